//! One pipeline run: text → preprocess → tokenize → parse → evaluate
//!
//! Every run owns its own [`Diagnostics`] collector, token sequence and
//! tree; nothing is shared between runs. Evaluation only happens when the
//! earlier stages recorded no diagnostics, so a partially built tree is never
//! evaluated.

use crate::diagnostics::Diagnostics;
use crate::interpreter::errors::EvaluationError;
use crate::interpreter::evaluator::evaluate;
use crate::parser::ast::SyntaxTree;
use crate::parser::lexer::Lexer;
use crate::parser::parse::Parser;
use crate::parser::token::Token;
use crate::preprocessor::preprocess_checked;
use std::fmt;
use thiserror::Error;

/// Everything a run produced, stage by stage.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub source: String,
    pub preprocessed: String,
    pub tokens: Vec<Token>,
    pub tree: SyntaxTree,
    pub diagnostics: Diagnostics,
    /// `None` when diagnostics stopped the run before evaluation.
    pub result: Option<Result<i32, EvaluationError>>,
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.result, Some(Ok(_)))
    }

    /// Lines to show the user: the decimal result, every diagnostic, or the
    /// evaluation error.
    pub fn report(&self) -> Vec<String> {
        match &self.result {
            Some(Ok(value)) => vec![value.to_string()],
            Some(Err(err)) => vec![format!("ERROR: {}", err)],
            None => self.diagnostics.messages(),
        }
    }

    pub fn into_result(self) -> Result<i32, PipelineError> {
        match self.result {
            Some(Ok(value)) => Ok(value),
            Some(Err(err)) => Err(PipelineError::Evaluation(err)),
            None => Err(PipelineError::Diagnostics(self.diagnostics)),
        }
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.report().join("\n"))
    }
}

/// Why a line did not produce a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("{0}")]
    Diagnostics(Diagnostics),

    #[error("ERROR: {0}")]
    Evaluation(#[from] EvaluationError),
}

/// Run all four stages over one line of source text.
pub fn run(source: &str) -> RunOutcome {
    let mut diagnostics = Diagnostics::new();

    let preprocessed = preprocess_checked(source, &mut diagnostics);
    let tokens = Lexer::new(&preprocessed).tokenize(&mut diagnostics);
    let tree = Parser::new(tokens.clone()).parse(&mut diagnostics);

    let result = if diagnostics.is_empty() {
        let result = evaluate(&tree);
        match &result {
            Ok(value) => log::debug!("evaluated {:?} to {}", source, value),
            Err(err) => log::warn!("evaluation of {:?} failed: {}", source, err),
        }
        Some(result)
    } else {
        log::debug!(
            "skipping evaluation of {:?}: {} diagnostic(s)",
            source,
            diagnostics.len()
        );
        None
    };

    RunOutcome {
        source: source.to_string(),
        preprocessed,
        tokens,
        tree,
        diagnostics,
        result,
    }
}

/// Convenience entry: the value of `source`, or why there is none.
pub fn evaluate_line(source: &str) -> Result<i32, PipelineError> {
    run(source).into_result()
}
