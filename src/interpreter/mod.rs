//! Expression evaluation
//!
//! - [`evaluator`]: walks a syntax tree and computes an `i32`
//! - [`errors`]: evaluation error types
//!
//! # Execution Model
//!
//! Evaluation is a single recursive pass with exhaustive matching over the
//! closed [`Expression`](crate::parser::ast::Expression) variants. It holds no
//! state between runs.

pub mod errors;
pub mod evaluator;
