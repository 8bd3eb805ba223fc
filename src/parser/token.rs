//! Token definitions and the fixed lookup tables used by the lexer
//!
//! A [`Token`] is created once by the lexer and never mutated afterwards.
//! Literal tokens additionally carry a typed [`LiteralValue`]; the token kind
//! of a literal is always derived from its value, so the two cannot disagree.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::fmt;

/// Every token kind the lexer can produce.
///
/// Many of these (assignment, comparison, control keywords) have no parser
/// support yet; they are still recognized so that diagnostics can name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Arithmetic and assignment operators
    Plus,
    Minus,
    Multiply,
    Divide,
    RemainderDiv,
    Equals,
    PlusEquals,
    MinusEquals,
    MultiplyEquals,
    DivideEquals,
    RemainderDivEquals,

    // Comparison and boolean operators
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    BoolEquals,
    BoolNoEquals,
    BoolNo,
    And,
    Or,
    Is,

    // Literals
    IntLiteral,
    UintLiteral,
    FloatLiteral,
    DoubleLiteral,
    CharLiteral,
    StringLiteral,

    // Type keywords
    IntKeyword,
    UintKeyword,
    FloatKeyword,
    StringKeyword,
    CharKeyword,

    // Control keywords
    FuncKeyword,
    ForKeyword,
    WhileKeyword,
    LoopKeyword,
    VarKeyword,
    BreakKeyword,
    ContinueKeyword,
    ConstKeyword,
    IfKeyword,
    ElseKeyword,
    CastKeyword,
    StructKeyword,
    TrueKeyword,
    FalseKeyword,

    // Symbols
    Semicolon,
    Colon,
    Comma,
    Dot,
    OpenParenthesis,
    CloseParenthesis,
    OpenSquareBracket,
    CloseSquareBracket,
    OpenCurlyBracket,
    CloseCurlyBracket,

    Identifier,
    EndOfFile,
}

impl TokenKind {
    /// True for the four literal kinds a `NumberExpression` may wrap.
    pub fn is_numeric_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral
                | TokenKind::UintLiteral
                | TokenKind::FloatLiteral
                | TokenKind::DoubleLiteral
        )
    }

    pub fn is_literal(self) -> bool {
        self.is_numeric_literal()
            || matches!(self, TokenKind::CharLiteral | TokenKind::StringLiteral)
    }

    pub fn is_keyword(self) -> bool {
        KEYWORDS.values().any(|kind| *kind == self)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Multiply => write!(f, "'*'"),
            TokenKind::Divide => write!(f, "'/'"),
            TokenKind::RemainderDiv => write!(f, "'%'"),
            TokenKind::Equals => write!(f, "'='"),
            TokenKind::PlusEquals => write!(f, "'+='"),
            TokenKind::MinusEquals => write!(f, "'-='"),
            TokenKind::MultiplyEquals => write!(f, "'*='"),
            TokenKind::DivideEquals => write!(f, "'/='"),
            TokenKind::RemainderDivEquals => write!(f, "'%='"),
            TokenKind::Less => write!(f, "'<'"),
            TokenKind::LessOrEqual => write!(f, "'<='"),
            TokenKind::Greater => write!(f, "'>'"),
            TokenKind::GreaterOrEqual => write!(f, "'>='"),
            TokenKind::BoolEquals => write!(f, "'=='"),
            TokenKind::BoolNoEquals => write!(f, "'!='"),
            TokenKind::BoolNo => write!(f, "'!'"),
            TokenKind::And => write!(f, "'and'"),
            TokenKind::Or => write!(f, "'or'"),
            TokenKind::Is => write!(f, "'is'"),
            TokenKind::IntLiteral => write!(f, "int literal"),
            TokenKind::UintLiteral => write!(f, "uint literal"),
            TokenKind::FloatLiteral => write!(f, "float literal"),
            TokenKind::DoubleLiteral => write!(f, "double literal"),
            TokenKind::CharLiteral => write!(f, "char literal"),
            TokenKind::StringLiteral => write!(f, "string literal"),
            TokenKind::IntKeyword => write!(f, "'int'"),
            TokenKind::UintKeyword => write!(f, "'uint'"),
            TokenKind::FloatKeyword => write!(f, "'float'"),
            TokenKind::StringKeyword => write!(f, "'string'"),
            TokenKind::CharKeyword => write!(f, "'char'"),
            TokenKind::FuncKeyword => write!(f, "'func'"),
            TokenKind::ForKeyword => write!(f, "'for'"),
            TokenKind::WhileKeyword => write!(f, "'while'"),
            TokenKind::LoopKeyword => write!(f, "'loop'"),
            TokenKind::VarKeyword => write!(f, "'var'"),
            TokenKind::BreakKeyword => write!(f, "'break'"),
            TokenKind::ContinueKeyword => write!(f, "'continue'"),
            TokenKind::ConstKeyword => write!(f, "'const'"),
            TokenKind::IfKeyword => write!(f, "'if'"),
            TokenKind::ElseKeyword => write!(f, "'else'"),
            TokenKind::CastKeyword => write!(f, "'cast'"),
            TokenKind::StructKeyword => write!(f, "'struct'"),
            TokenKind::TrueKeyword => write!(f, "'true'"),
            TokenKind::FalseKeyword => write!(f, "'false'"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::Colon => write!(f, "':'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Dot => write!(f, "'.'"),
            TokenKind::OpenParenthesis => write!(f, "'('"),
            TokenKind::CloseParenthesis => write!(f, "')'"),
            TokenKind::OpenSquareBracket => write!(f, "'['"),
            TokenKind::CloseSquareBracket => write!(f, "']'"),
            TokenKind::OpenCurlyBracket => write!(f, "'{{'"),
            TokenKind::CloseCurlyBracket => write!(f, "'}}'"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::EndOfFile => write!(f, "end of file"),
        }
    }
}

/// Typed payload of a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Int(i32),
    Uint(u32),
    Float(f32),
    Double(f64),
    Char(char),
    Str(String),
}

impl LiteralValue {
    /// The token kind that carries this value.
    pub fn kind(&self) -> TokenKind {
        match self {
            LiteralValue::Int(_) => TokenKind::IntLiteral,
            LiteralValue::Uint(_) => TokenKind::UintLiteral,
            LiteralValue::Float(_) => TokenKind::FloatLiteral,
            LiteralValue::Double(_) => TokenKind::DoubleLiteral,
            LiteralValue::Char(_) => TokenKind::CharLiteral,
            LiteralValue::Str(_) => TokenKind::StringLiteral,
        }
    }

    /// Name of the value's type as it appears in cast diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            LiteralValue::Int(_) => "int",
            LiteralValue::Uint(_) => "uint",
            LiteralValue::Float(_) => "float",
            LiteralValue::Double(_) => "double",
            LiteralValue::Char(_) => "char",
            LiteralValue::Str(_) => "string",
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Int(n) => write!(f, "{}", n),
            LiteralValue::Uint(n) => write!(f, "{}u", n),
            LiteralValue::Float(x) => write!(f, "{}f", x),
            LiteralValue::Double(x) => write!(f, "{:?}", x),
            LiteralValue::Char(c) => write!(f, "{:?}", c),
            LiteralValue::Str(s) => write!(f, "{:?}", s),
        }
    }
}

/// A lexed token: kind, zero-based source offset, and the exact lexeme.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    position: usize,
    lexeme: String,
    value: Option<LiteralValue>,
}

impl Token {
    /// A non-literal token.
    pub fn new(kind: TokenKind, position: usize, lexeme: impl Into<String>) -> Self {
        Token {
            kind,
            position,
            lexeme: lexeme.into(),
            value: None,
        }
    }

    /// A literal token; the kind follows from the value.
    pub fn literal(value: LiteralValue, position: usize, lexeme: impl Into<String>) -> Self {
        Token {
            kind: value.kind(),
            position,
            lexeme: lexeme.into(),
            value: Some(value),
        }
    }

    /// An empty stand-in produced by the parser when an expected token is missing.
    pub fn placeholder(kind: TokenKind, position: usize) -> Self {
        Token::new(kind, position, String::new())
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// The literal payload; `None` for non-literals and parser placeholders.
    pub fn value(&self) -> Option<&LiteralValue> {
        self.value.as_ref()
    }

    pub fn is_placeholder(&self) -> bool {
        self.lexeme.is_empty() && self.kind != TokenKind::EndOfFile
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {} @{}", self.kind, value, self.position),
            None if self.kind == TokenKind::Identifier => {
                write!(f, "identifier '{}' @{}", self.lexeme, self.position)
            }
            None => write!(f, "{} @{}", self.kind, self.position),
        }
    }
}

/// Single-character separators and the token kind each one produces.
pub static SEPARATORS: Lazy<FxHashMap<char, TokenKind>> = Lazy::new(|| {
    [
        ('+', TokenKind::Plus),
        ('-', TokenKind::Minus),
        ('*', TokenKind::Multiply),
        ('/', TokenKind::Divide),
        ('(', TokenKind::OpenParenthesis),
        (')', TokenKind::CloseParenthesis),
        ('[', TokenKind::OpenSquareBracket),
        (']', TokenKind::CloseSquareBracket),
        ('=', TokenKind::Equals),
        ('%', TokenKind::RemainderDiv),
        ('{', TokenKind::OpenCurlyBracket),
        ('}', TokenKind::CloseCurlyBracket),
        ('.', TokenKind::Dot),
        (',', TokenKind::Comma),
        (';', TokenKind::Semicolon),
        (':', TokenKind::Colon),
        ('!', TokenKind::BoolNo),
        ('>', TokenKind::Greater),
        ('<', TokenKind::Less),
    ]
    .into_iter()
    .collect()
});

/// Reserved spellings and their keyword kinds.
pub static KEYWORDS: Lazy<FxHashMap<&'static str, TokenKind>> = Lazy::new(|| {
    [
        ("int", TokenKind::IntKeyword),
        ("uint", TokenKind::UintKeyword),
        ("float", TokenKind::FloatKeyword),
        ("string", TokenKind::StringKeyword),
        ("char", TokenKind::CharKeyword),
        ("break", TokenKind::BreakKeyword),
        ("continue", TokenKind::ContinueKeyword),
        ("const", TokenKind::ConstKeyword),
        ("cast", TokenKind::CastKeyword),
        ("if", TokenKind::IfKeyword),
        ("else", TokenKind::ElseKeyword),
        ("func", TokenKind::FuncKeyword),
        ("for", TokenKind::ForKeyword),
        ("while", TokenKind::WhileKeyword),
        ("loop", TokenKind::LoopKeyword),
        ("var", TokenKind::VarKeyword),
        ("true", TokenKind::TrueKeyword),
        ("false", TokenKind::FalseKeyword),
        ("and", TokenKind::And),
        ("or", TokenKind::Or),
        ("is", TokenKind::Is),
        ("struct", TokenKind::StructKeyword),
    ]
    .into_iter()
    .collect()
});

pub fn separator_kind(c: char) -> Option<TokenKind> {
    SEPARATORS.get(&c).copied()
}

pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    KEYWORDS.get(word).copied()
}

/// Two-character operators: the first character followed by `=`.
pub fn double_operator_kind(first: char) -> Option<TokenKind> {
    match first {
        '+' => Some(TokenKind::PlusEquals),
        '-' => Some(TokenKind::MinusEquals),
        '*' => Some(TokenKind::MultiplyEquals),
        '/' => Some(TokenKind::DivideEquals),
        '%' => Some(TokenKind::RemainderDivEquals),
        '<' => Some(TokenKind::LessOrEqual),
        '>' => Some(TokenKind::GreaterOrEqual),
        '=' => Some(TokenKind::BoolEquals),
        '!' => Some(TokenKind::BoolNoEquals),
        _ => None,
    }
}

/// Translate the character after a backslash. Shared by string and char literals.
pub fn escape_char(escaped: char) -> Option<char> {
    match escaped {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '0' => Some('\0'),
        '\\' => Some('\\'),
        '\'' => Some('\''),
        '"' => Some('"'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_kind_follows_value() {
        let token = Token::literal(LiteralValue::Uint(7), 3, "7u");
        assert_eq!(token.kind(), TokenKind::UintLiteral);
        assert_eq!(token.value(), Some(&LiteralValue::Uint(7)));
        assert_eq!(token.position(), 3);
        assert_eq!(token.lexeme(), "7u");
    }

    #[test]
    fn test_placeholder_is_empty() {
        let token = Token::placeholder(TokenKind::CloseParenthesis, 5);
        assert!(token.is_placeholder());
        assert!(token.value().is_none());
        assert!(!Token::new(TokenKind::Plus, 0, "+").is_placeholder());
    }

    #[test]
    fn test_tables_do_not_overlap_whitespace() {
        for c in [' ', '\t', '\r', '\n', '"', '\''] {
            assert!(separator_kind(c).is_none());
        }
        assert_eq!(KEYWORDS.len(), 22);
        assert_eq!(SEPARATORS.len(), 19);
    }

    #[test]
    fn test_escape_table() {
        assert_eq!(escape_char('n'), Some('\n'));
        assert_eq!(escape_char('0'), Some('\0'));
        assert_eq!(escape_char('"'), Some('"'));
        assert_eq!(escape_char('q'), None);
    }

    #[test]
    fn test_keyword_classification() {
        assert!(TokenKind::WhileKeyword.is_keyword());
        assert!(TokenKind::And.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(TokenKind::DoubleLiteral.is_numeric_literal());
        assert!(!TokenKind::CharLiteral.is_numeric_literal());
        assert!(TokenKind::CharLiteral.is_literal());
    }
}
