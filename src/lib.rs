//! # Introduction
//!
//! nextr is the front end of the NextR expression language. It turns one line
//! of source text into an integer result, collecting every recoverable
//! problem along the way instead of stopping at the first one.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Preprocessor → Lexer → Parser → Syntax tree → Evaluator → i32
//! ```
//!
//! 1. [`preprocessor`]: strips `/* */` then `//` comments, string-aware.
//! 2. [`parser`]: tokenizes the text and builds an expression tree.
//! 3. [`interpreter`]: walks the tree with checked `i32` arithmetic.
//! 4. [`diagnostics`]: the collector passed through the first three stages.
//! 5. [`pipeline`]: runs all stages for one line and renders the report.
//! 6. [`ui`]: ratatui-based workbench; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! assert_eq!(nextr::pipeline::evaluate_line("(2 + 3) * 4"), Ok(20));
//! ```

pub mod config;
pub mod diagnostics;
pub mod interpreter;
pub mod logging;
pub mod parser;
pub mod pipeline;
pub mod preprocessor;
pub mod session;
pub mod ui;
