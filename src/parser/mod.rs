//! Expression front end
//!
//! This module turns preprocessed text into a syntax tree:
//! - [`token`]: token kinds, literal values and the fixed lookup tables
//! - [`lexer`]: tokenization (text → tokens)
//! - [`parse`]: the [`Parser`](parse::Parser) and its cursor helpers
//! - [`ast`]: expression tree definitions
//!
//! # Grammar
//!
//! Only arithmetic over integer literals is parsed: `+ - * /` with the usual
//! precedence and parentheses. Other token kinds (keywords, comparison and
//! assignment operators, string and char literals) are lexed but have no
//! grammar rules yet.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent with left-associative folding per
//! precedence level. No parser generator dependencies.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
pub mod token;
