//! Recoverable diagnostics collected by the preprocessor, lexer and parser
//!
//! A [`Diagnostics`] collector is created per pipeline run and passed by
//! `&mut` to each stage. Stages only append; nothing is cleared mid-run.

use crate::parser::token::TokenKind;
use std::fmt;
use thiserror::Error;

/// Malformed or unterminated input found before parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexicalError {
    #[error("ERROR: Unterminated string literal at position {position}")]
    UnterminatedString { position: usize },

    #[error("ERROR: Unterminated character literal at position {position}")]
    UnterminatedChar { position: usize },

    #[error("ERROR: Empty character literal at position {position}")]
    EmptyChar { position: usize },

    #[error("ERROR: Invalid escape sequence '\\{escape}' at position {position}")]
    InvalidEscape { escape: char, position: usize },

    #[error("ERROR : Can't cast token \"{lexeme}\" to type {type_name} in position {position}")]
    LiteralCast {
        lexeme: String,
        type_name: &'static str,
        position: usize,
    },

    #[error("ERROR: Unterminated multi-line comment at position {position}")]
    UnterminatedComment { position: usize },
}

impl LexicalError {
    pub fn position(&self) -> usize {
        match self {
            LexicalError::UnterminatedString { position }
            | LexicalError::UnterminatedChar { position }
            | LexicalError::EmptyChar { position }
            | LexicalError::InvalidEscape { position, .. }
            | LexicalError::LiteralCast { position, .. }
            | LexicalError::UnterminatedComment { position } => *position,
        }
    }
}

/// A token of the wrong kind where the grammar required a specific one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("ERROR: Expected {expected} but found {found} at position {position}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        position: usize,
    },

    #[error("ERROR: Unexpected {found} after end of expression at position {position}")]
    TrailingInput { found: TokenKind, position: usize },

    /// Parentheses or operator chains deeper than the parser accepts
    #[error("ERROR: Expression nested too deeply (limit {limit}) at position {position}")]
    NestingTooDeep { limit: usize, position: usize },
}

impl SyntaxError {
    pub fn position(&self) -> usize {
        match self {
            SyntaxError::UnexpectedToken { position, .. }
            | SyntaxError::TrailingInput { position, .. }
            | SyntaxError::NestingTooDeep { position, .. } => *position,
        }
    }
}

/// One recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error(transparent)]
    Lexical(#[from] LexicalError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl Diagnostic {
    pub fn position(&self) -> usize {
        match self {
            Diagnostic::Lexical(err) => err.position(),
            Diagnostic::Syntax(err) => err.position(),
        }
    }
}

/// Ordered, append-only list of diagnostics for one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: impl Into<Diagnostic>) {
        let diagnostic = diagnostic.into();
        log::debug!("diagnostic recorded: {}", diagnostic);
        self.entries.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// The user-facing message of every diagnostic, in recording order.
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", diagnostic)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_message_format() {
        let err = LexicalError::LiteralCast {
            lexeme: "99999999999".to_string(),
            type_name: "int",
            position: 4,
        };
        assert_eq!(
            err.to_string(),
            "ERROR : Can't cast token \"99999999999\" to type int in position 4"
        );
    }

    #[test]
    fn test_syntax_message_format() {
        let err = SyntaxError::UnexpectedToken {
            expected: TokenKind::CloseParenthesis,
            found: TokenKind::EndOfFile,
            position: 6,
        };
        assert_eq!(
            err.to_string(),
            "ERROR: Expected ')' but found end of file at position 6"
        );
    }

    #[test]
    fn test_collector_keeps_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(LexicalError::EmptyChar { position: 0 });
        diagnostics.push(SyntaxError::TrailingInput {
            found: TokenKind::IntLiteral,
            position: 2,
        });

        assert_eq!(diagnostics.len(), 2);
        let positions: Vec<usize> = diagnostics.iter().map(Diagnostic::position).collect();
        assert_eq!(positions, vec![0, 2]);
        assert_eq!(
            diagnostics.messages()[0],
            "ERROR: Empty character literal at position 0"
        );
        assert_eq!(diagnostics.to_string().lines().count(), 2);
    }
}
