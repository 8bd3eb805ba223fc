//! Evaluation error types
//!
//! [`EvaluationError`] covers everything that can go wrong while walking a
//! syntax tree, as opposed to the recoverable diagnostics recorded by the
//! earlier stages. Evaluation stops at the first error.

use crate::parser::ast::ArithmeticOp;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// Right operand of `/` evaluated to zero
    #[error("Division by zero at position {position}")]
    DivisionByZero { position: usize },

    /// Checked `i32` arithmetic overflowed
    #[error("Integer overflow in {left} {symbol} {right} at position {position}", symbol = .op.symbol())]
    IntegerOverflow {
        left: i32,
        op: ArithmeticOp,
        right: i32,
        position: usize,
    },

    /// A float or double literal where an integer is required
    #[error("Literal \"{lexeme}\" of type {type_name} is not an integer at position {position}")]
    NonIntegerLiteral {
        lexeme: String,
        type_name: &'static str,
        position: usize,
    },

    /// A uint literal that does not fit in a signed 32-bit integer
    #[error("Literal \"{lexeme}\" does not fit in type int at position {position}")]
    LiteralOutOfRange { lexeme: String, position: usize },

    /// A parser placeholder (missing literal) reached the evaluator
    #[error("Missing literal value at position {position}")]
    MissingLiteralValue { position: usize },
}

impl EvaluationError {
    pub fn position(&self) -> usize {
        match self {
            EvaluationError::DivisionByZero { position }
            | EvaluationError::IntegerOverflow { position, .. }
            | EvaluationError::NonIntegerLiteral { position, .. }
            | EvaluationError::LiteralOutOfRange { position, .. }
            | EvaluationError::MissingLiteralValue { position } => *position,
        }
    }
}
