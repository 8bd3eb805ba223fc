//! Lexer (tokenizer) for preprocessed source text
//!
//! Converts text into a flat [`Token`] sequence for the parser. Malformed
//! input never aborts lexing: each problem is recorded in the caller's
//! [`Diagnostics`] and the offending token is dropped, then lexing continues
//! after the consumed characters.
//!
//! Token classes overlap (a quote may open a string or a char literal, a
//! digit may start a number), so the order in [`Lexer::next_token`] is the
//! tie-break.

use super::token::{
    double_operator_kind, escape_char, keyword_kind, separator_kind, LiteralValue, Token,
    TokenKind,
};
use crate::diagnostics::{Diagnostics, LexicalError};
use std::str::FromStr;

/// Whitespace skipped between tokens.
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Characters that end an identifier or keyword.
fn is_word_boundary(c: char) -> bool {
    is_whitespace(c) || c == '"' || c == '\'' || separator_kind(c).is_some()
}

/// Lexer over one preprocessed line (or file) of source.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the entire input.
    ///
    /// The returned sequence does not include the end-of-file token.
    pub fn tokenize(&mut self, diagnostics: &mut Diagnostics) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let start = self.position;
            match self.next_token(diagnostics) {
                Some(token) if token.kind() == TokenKind::EndOfFile => break,
                Some(token) => {
                    log::trace!("token {}", token);
                    tokens.push(token);
                }
                None => {
                    // A dropped token must still have consumed input.
                    if self.position == start {
                        self.advance();
                    }
                }
            }
        }

        log::debug!("lexed {} tokens", tokens.len());
        tokens
    }

    /// Lex one token. `None` means the token was malformed and dropped.
    fn next_token(&mut self, diagnostics: &mut Diagnostics) -> Option<Token> {
        self.skip_whitespace();

        let start = self.position;
        let ch = match self.peek() {
            Some(ch) => ch,
            None => return Some(Token::new(TokenKind::EndOfFile, start, "")),
        };

        if ch == '"' {
            return self.string_literal(diagnostics);
        }

        if ch == '\'' {
            return self.char_literal(diagnostics);
        }

        if self.peek_ahead(1) == Some('=') {
            if let Some(kind) = double_operator_kind(ch) {
                self.position += 2;
                return Some(Token::new(kind, start, self.lexeme_from(start)));
            }
        }

        if ch.is_ascii_digit() {
            return self.number_literal(diagnostics);
        }

        if let Some(kind) = separator_kind(ch) {
            self.advance();
            return Some(Token::new(kind, start, ch.to_string()));
        }

        Some(self.identifier_or_keyword())
    }

    /// Parse string literal
    fn string_literal(&mut self, diagnostics: &mut Diagnostics) -> Option<Token> {
        let start = self.position;
        self.advance(); // opening quote
        let mut string = String::new();

        loop {
            match self.peek() {
                None | Some('\n') => {
                    diagnostics.push(LexicalError::UnterminatedString { position: start });
                    return None;
                }
                Some('"') => {
                    self.advance();
                    let lexeme = self.lexeme_from(start);
                    return Some(Token::literal(LiteralValue::Str(string), start, lexeme));
                }
                Some('\\') => {
                    self.advance();
                    match self.escape_sequence(diagnostics) {
                        Some(c) => string.push(c),
                        None => {
                            diagnostics
                                .push(LexicalError::UnterminatedString { position: start });
                            return None;
                        }
                    }
                }
                Some(ch) => {
                    string.push(ch);
                    self.advance();
                }
            }
        }
    }

    /// Parse character literal
    fn char_literal(&mut self, diagnostics: &mut Diagnostics) -> Option<Token> {
        let start = self.position;
        self.advance(); // opening quote

        let value = match self.peek() {
            None | Some('\n') => {
                diagnostics.push(LexicalError::UnterminatedChar { position: start });
                return None;
            }
            Some('\'') => {
                self.advance();
                diagnostics.push(LexicalError::EmptyChar { position: start });
                return None;
            }
            Some('\\') => {
                self.advance();
                match self.escape_sequence(diagnostics) {
                    Some(c) => c,
                    None => {
                        diagnostics.push(LexicalError::UnterminatedChar { position: start });
                        return None;
                    }
                }
            }
            Some(ch) => {
                self.advance();
                ch
            }
        };

        if self.peek() != Some('\'') {
            diagnostics.push(LexicalError::UnterminatedChar { position: start });
            return None;
        }
        self.advance();

        Some(Token::literal(
            LiteralValue::Char(value),
            start,
            self.lexeme_from(start),
        ))
    }

    /// Consume the character after a backslash and translate it.
    ///
    /// Unknown escapes are copied through as the bare character and reported.
    /// Returns `None` when the literal ends (newline or end of input) instead.
    fn escape_sequence(&mut self, diagnostics: &mut Diagnostics) -> Option<char> {
        let escape_position = self.position - 1;
        let escaped = match self.peek() {
            None | Some('\n') => return None,
            Some(c) => c,
        };
        self.advance();

        match escape_char(escaped) {
            Some(c) => Some(c),
            None => {
                diagnostics.push(LexicalError::InvalidEscape {
                    escape: escaped,
                    position: escape_position,
                });
                Some(escaped)
            }
        }
    }

    /// Parse numeric literal: digits with at most one `.`, then an optional
    /// `u` (uint) or `f` (float) suffix.
    fn number_literal(&mut self, diagnostics: &mut Diagnostics) -> Option<Token> {
        let start = self.position;
        let mut digits = String::new();
        let mut seen_dot = false;

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                digits.push(ch);
            } else if ch == '.' && !seen_dot {
                seen_dot = true;
                digits.push(ch);
            } else {
                break;
            }
            self.advance();
        }

        let value = match self.peek() {
            Some('u') => {
                self.advance();
                parse_number::<u32>(&digits).map(LiteralValue::Uint)
            }
            Some('f') => {
                self.advance();
                parse_number::<f32>(&digits)
                    .filter(|x| x.is_finite())
                    .map(LiteralValue::Float)
            }
            _ if seen_dot => parse_number::<f64>(&digits)
                .filter(|x| x.is_finite())
                .map(LiteralValue::Double),
            _ => parse_number::<i32>(&digits).map(LiteralValue::Int),
        };

        let lexeme = self.lexeme_from(start);
        match value {
            Some(value) => Some(Token::literal(value, start, lexeme)),
            None => {
                diagnostics.push(LexicalError::LiteralCast {
                    lexeme,
                    type_name: self.suffix_type_name(seen_dot),
                    position: start,
                });
                None
            }
        }
    }

    /// Type named in a cast diagnostic for the literal just consumed.
    fn suffix_type_name(&self, seen_dot: bool) -> &'static str {
        match self.previous() {
            Some('u') => "uint",
            Some('f') => "float",
            _ if seen_dot => "double",
            _ => "int",
        }
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self) -> Token {
        let start = self.position;

        while let Some(ch) = self.peek() {
            if is_word_boundary(ch) {
                break;
            }
            self.advance();
        }

        let word = self.lexeme_from(start);
        let kind = keyword_kind(&word).unwrap_or(TokenKind::Identifier);
        Token::new(kind, start, word)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.advance();
        }
    }

    fn lexeme_from(&self, start: usize) -> String {
        self.input[start..self.position].iter().collect()
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    fn previous(&self) -> Option<char> {
        self.position
            .checked_sub(1)
            .and_then(|i| self.input.get(i).copied())
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }
}

fn parse_number<T: FromStr>(digits: &str) -> Option<T> {
    digits.parse::<T>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> (Vec<Token>, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let tokens = Lexer::new(source).tokenize(&mut diagnostics);
        (tokens, diagnostics)
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(Token::kind).collect()
    }

    #[test]
    fn test_simple_expression() {
        let (tokens, diagnostics) = lex("(2 + 3) * 4");
        assert!(diagnostics.is_empty());
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::OpenParenthesis,
                TokenKind::IntLiteral,
                TokenKind::Plus,
                TokenKind::IntLiteral,
                TokenKind::CloseParenthesis,
                TokenKind::Multiply,
                TokenKind::IntLiteral,
            ]
        );
        let positions: Vec<usize> = tokens.iter().map(Token::position).collect();
        assert_eq!(positions, vec![0, 1, 3, 5, 6, 8, 10]);
    }

    #[test]
    fn test_number_suffixes() {
        let (tokens, diagnostics) = lex("100 100u 52.05f 52.52 200f");
        assert!(diagnostics.is_empty());
        let values: Vec<LiteralValue> = tokens.iter().filter_map(|t| t.value().cloned()).collect();
        assert_eq!(
            values,
            vec![
                LiteralValue::Int(100),
                LiteralValue::Uint(100),
                LiteralValue::Float(52.05),
                LiteralValue::Double(52.52),
                LiteralValue::Float(200.0),
            ]
        );
        assert_eq!(tokens[1].lexeme(), "100u");
    }

    #[test]
    fn test_int_overflow_is_reported_and_skipped() {
        let (tokens, diagnostics) = lex("2147483648 + 1");
        assert_eq!(kinds(&tokens), vec![TokenKind::Plus, TokenKind::IntLiteral]);
        assert_eq!(
            diagnostics.messages(),
            vec!["ERROR : Can't cast token \"2147483648\" to type int in position 0".to_string()]
        );
    }

    #[test]
    fn test_uint_with_dot_fails_cast() {
        let (tokens, diagnostics) = lex("1.5u");
        assert!(tokens.is_empty());
        assert_eq!(
            diagnostics.messages(),
            vec!["ERROR : Can't cast token \"1.5u\" to type uint in position 0".to_string()]
        );
    }

    #[test]
    fn test_second_dot_ends_number() {
        let (tokens, diagnostics) = lex("1.2.3");
        assert!(diagnostics.is_empty());
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::DoubleLiteral, TokenKind::Dot, TokenKind::IntLiteral]
        );
    }

    #[test]
    fn test_double_operators_need_following_equals() {
        let (tokens, _) = lex("+= + =");
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::PlusEquals, TokenKind::Plus, TokenKind::Equals]
        );
        assert_eq!(tokens[0].lexeme(), "+=");
    }

    #[test]
    fn test_string_escapes() {
        let (tokens, diagnostics) = lex(r#""a\tb\"c\\""#);
        assert!(diagnostics.is_empty());
        assert_eq!(tokens[0].value(), Some(&LiteralValue::Str("a\tb\"c\\".to_string())));
        assert_eq!(tokens[0].lexeme(), r#""a\tb\"c\\""#);
    }

    #[test]
    fn test_invalid_escape_is_copied_and_reported() {
        let (tokens, diagnostics) = lex(r#""a\qb""#);
        assert_eq!(tokens[0].value(), Some(&LiteralValue::Str("aqb".to_string())));
        assert_eq!(
            diagnostics.messages(),
            vec!["ERROR: Invalid escape sequence '\\q' at position 2".to_string()]
        );
    }

    #[test]
    fn test_unterminated_string_resumes_after_newline() {
        let (tokens, diagnostics) = lex("\"abc\n7");
        assert_eq!(kinds(&tokens), vec![TokenKind::IntLiteral]);
        assert_eq!(
            diagnostics.messages(),
            vec!["ERROR: Unterminated string literal at position 0".to_string()]
        );
    }

    #[test]
    fn test_char_literals() {
        let (tokens, diagnostics) = lex(r"'h' '\n' '\0' ')'");
        assert!(diagnostics.is_empty());
        let values: Vec<LiteralValue> = tokens.iter().filter_map(|t| t.value().cloned()).collect();
        assert_eq!(
            values,
            vec![
                LiteralValue::Char('h'),
                LiteralValue::Char('\n'),
                LiteralValue::Char('\0'),
                LiteralValue::Char(')'),
            ]
        );
        assert_eq!(tokens[1].lexeme(), r"'\n'");
    }

    #[test]
    fn test_empty_and_unterminated_char() {
        let (tokens, diagnostics) = lex("''");
        assert!(tokens.is_empty());
        assert_eq!(
            diagnostics.messages(),
            vec!["ERROR: Empty character literal at position 0".to_string()]
        );

        let (tokens, diagnostics) = lex("'x");
        assert!(tokens.is_empty());
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_identifiers_and_keywords() {
        let (tokens, diagnostics) = lex("var total=while_x if");
        assert!(diagnostics.is_empty());
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::VarKeyword,
                TokenKind::Identifier,
                TokenKind::Equals,
                TokenKind::Identifier,
                TokenKind::IfKeyword,
            ]
        );
        assert_eq!(tokens[1].lexeme(), "total");
        assert_eq!(tokens[3].lexeme(), "while_x");
    }

    #[test]
    fn test_identifier_stops_at_quote() {
        let (tokens, diagnostics) = lex("name\"s\"");
        assert!(diagnostics.is_empty());
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Identifier, TokenKind::StringLiteral]
        );
    }

    #[test]
    fn test_number_then_letters() {
        let (tokens, _) = lex("12abc");
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::IntLiteral, TokenKind::Identifier]
        );
        assert_eq!(tokens[1].lexeme(), "abc");
    }
}
