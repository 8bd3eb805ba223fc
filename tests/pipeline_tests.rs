// End-to-end tests: source line in, value or diagnostics out

use nextr::interpreter::errors::EvaluationError;
use nextr::parser::parse::{MAX_NESTING_DEPTH, MAX_TREE_DEPTH};
use nextr::pipeline::{evaluate_line, run, PipelineError};
use nextr::preprocessor::preprocess;

#[test]
fn test_precedence() {
    assert_eq!(evaluate_line("2 + 3 * 4"), Ok(14));
    assert_eq!(evaluate_line("2 * 3 + 4"), Ok(10));
    assert_eq!(evaluate_line("20 - 6 / 3"), Ok(18));
}

#[test]
fn test_parentheses() {
    assert_eq!(evaluate_line("(2 + 3) * 4"), Ok(20));
    assert_eq!(evaluate_line("((1 + 2) * (3 + 4)) / 3"), Ok(7));
}

#[test]
fn test_whitespace_is_insignificant() {
    assert_eq!(evaluate_line("\t(2+3)*4\r\n"), Ok(20));
}

#[test]
fn test_division_by_zero_is_typed() {
    assert_eq!(
        evaluate_line("10 / 0"),
        Err(PipelineError::Evaluation(EvaluationError::DivisionByZero {
            position: 3
        }))
    );
}

#[test]
fn test_all_diagnostics_reported_in_one_pass() {
    let outcome = run("(1 + 'x");
    assert!(outcome.result.is_none());
    assert_eq!(
        outcome.report(),
        vec![
            "ERROR: Unterminated character literal at position 5".to_string(),
            "ERROR: Expected int literal but found end of file at position 4".to_string(),
            "ERROR: Expected ')' but found end of file at position 4".to_string(),
        ]
    );
}

#[test]
fn test_non_int_literal_is_a_syntax_error() {
    let outcome = run("1.5 + 2");
    assert_eq!(
        outcome.report(),
        vec![
            "ERROR: Expected int literal but found double literal at position 0".to_string(),
            "ERROR: Unexpected double literal after end of expression at position 0".to_string(),
        ]
    );
}

#[test]
fn test_cast_failure_is_reported() {
    let outcome = run("99999999999 + 1");
    assert_eq!(
        outcome.report()[0],
        "ERROR : Can't cast token \"99999999999\" to type int in position 0"
    );
}

#[test]
fn test_comments() {
    assert_eq!(evaluate_line("1 + 2 // + 100"), Ok(3));
    assert_eq!(evaluate_line("/* lead */ 5 * /* mid */ 5"), Ok(25));
}

#[test]
fn test_unterminated_comment_is_reported() {
    let outcome = run("7 /* trailing");
    assert_eq!(
        outcome.report(),
        vec!["ERROR: Unterminated multi-line comment at position 2".to_string()]
    );
}

#[test]
fn test_preprocess_round_trip() {
    let code = "x // comment";
    assert_eq!(preprocess(code), "x ");

    let quoted = "\"x // comment\"";
    assert_eq!(preprocess(quoted), quoted);
    assert_eq!(preprocess(&preprocess(quoted)), quoted);
}

#[test]
fn test_runs_are_independent() {
    let first = run("(1 +");
    let second = run("1 + 1");
    assert_eq!(first.diagnostics.len(), 2);
    assert!(second.diagnostics.is_empty());
    assert_eq!(second.report(), vec!["2".to_string()]);
}

fn nested(depth: usize) -> String {
    format!("{}1{}", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn test_deep_parentheses_within_limit() {
    assert_eq!(evaluate_line(&nested(MAX_NESTING_DEPTH)), Ok(1));
}

#[test]
fn test_deep_parentheses_past_limit_are_diagnosed() {
    let outcome = run(&nested(MAX_NESTING_DEPTH + 1));
    assert!(outcome.result.is_none());
    assert_eq!(
        outcome.report(),
        vec![format!(
            "ERROR: Expression nested too deeply (limit {}) at position {}",
            MAX_NESTING_DEPTH, MAX_NESTING_DEPTH
        )]
    );
}

#[test]
fn test_very_deep_parentheses_do_not_crash() {
    let outcome = run(&nested(20_000));
    assert_eq!(outcome.diagnostics.len(), 1);
    assert!(outcome.result.is_none());
}

#[test]
fn test_long_operator_chains() {
    let chain = |operators: usize| format!("1{}", " + 1".repeat(operators));

    assert_eq!(evaluate_line(&chain(MAX_TREE_DEPTH - 1)), Ok(MAX_TREE_DEPTH as i32));

    let outcome = run(&chain(50_000));
    assert_eq!(outcome.diagnostics.len(), 1);
    assert!(outcome.report()[0].contains("nested too deeply"));
}
