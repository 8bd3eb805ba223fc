//! Tree-walking evaluator
//!
//! Computes the `i32` value of a [`SyntaxTree`]. Arithmetic is checked:
//! division by zero and overflow become [`EvaluationError`]s rather than
//! panics. Integer division truncates toward zero.

use crate::interpreter::errors::EvaluationError;
use crate::parser::ast::{ArithmeticOp, BinaryExpression, Expression, NumberExpression, SyntaxTree};
use crate::parser::token::LiteralValue;

/// Evaluate a whole tree.
pub fn evaluate(tree: &SyntaxTree) -> Result<i32, EvaluationError> {
    Evaluator::new().evaluate(tree.root())
}

/// Stateless evaluator; one instance may evaluate any number of trees.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Evaluator
    }

    pub fn evaluate(&self, expression: &Expression) -> Result<i32, EvaluationError> {
        match expression {
            Expression::Number(number) => self.evaluate_number(number),
            Expression::Binary(binary) => self.evaluate_binary(binary),
        }
    }

    /// Literal values are checked, never narrowed.
    fn evaluate_number(&self, number: &NumberExpression) -> Result<i32, EvaluationError> {
        let token = number.token();
        let position = token.position();

        match token.value() {
            Some(LiteralValue::Int(n)) => Ok(*n),
            Some(LiteralValue::Uint(n)) => {
                i32::try_from(*n).map_err(|_| EvaluationError::LiteralOutOfRange {
                    lexeme: token.lexeme().to_string(),
                    position,
                })
            }
            Some(value) => Err(EvaluationError::NonIntegerLiteral {
                lexeme: token.lexeme().to_string(),
                type_name: value.type_name(),
                position,
            }),
            None => Err(EvaluationError::MissingLiteralValue { position }),
        }
    }

    fn evaluate_binary(&self, binary: &BinaryExpression) -> Result<i32, EvaluationError> {
        let left = self.evaluate(binary.left())?;
        let right = self.evaluate(binary.right())?;
        let op = binary.operator().op();
        let position = binary.operator().token().position();

        let result = match op {
            ArithmeticOp::Add => left.checked_add(right),
            ArithmeticOp::Sub => left.checked_sub(right),
            ArithmeticOp::Mul => left.checked_mul(right),
            ArithmeticOp::Div => {
                if right == 0 {
                    return Err(EvaluationError::DivisionByZero { position });
                }
                left.checked_div(right)
            }
        };

        result.ok_or(EvaluationError::IntegerOverflow {
            left,
            op,
            right,
            position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostics;
    use crate::parser::ast::BinaryOperator;
    use crate::parser::lexer::Lexer;
    use crate::parser::parse::Parser;
    use crate::parser::token::{Token, TokenKind};

    fn eval(source: &str) -> Result<i32, EvaluationError> {
        let mut diagnostics = Diagnostics::new();
        let tokens = Lexer::new(source).tokenize(&mut diagnostics);
        let tree = Parser::new(tokens).parse(&mut diagnostics);
        assert!(diagnostics.is_empty(), "unexpected diagnostics: {}", diagnostics);
        evaluate(&tree)
    }

    fn literal(value: LiteralValue, lexeme: &str) -> Expression {
        let token = Token::literal(value, 0, lexeme);
        Expression::Number(NumberExpression::new(token).unwrap())
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(eval("2 + 3 * 4"), Ok(14));
        assert_eq!(eval("(2 + 3) * 4"), Ok(20));
        assert_eq!(eval("100 - 1 - 2"), Ok(97));
        assert_eq!(eval("((7))"), Ok(7));
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(eval("7 / 2"), Ok(3));
        assert_eq!(eval("(0 - 7) / 2"), Ok(-3));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            eval("10 / 0"),
            Err(EvaluationError::DivisionByZero { position: 3 })
        );
        assert_eq!(
            eval("10 / (2 - 2)").map_err(|e| e.to_string()),
            Err("Division by zero at position 3".to_string())
        );
    }

    #[test]
    fn test_overflow_is_an_error() {
        let err = eval("2147483647 + 1").unwrap_err();
        assert!(matches!(err, EvaluationError::IntegerOverflow { op: ArithmeticOp::Add, .. }));
        assert_eq!(
            err.to_string(),
            "Integer overflow in 2147483647 + 1 at position 11"
        );
        assert!(eval("65536 * 65536").is_err());
    }

    #[test]
    fn test_uint_literal_is_range_checked() {
        let evaluator = Evaluator::new();
        assert_eq!(
            evaluator.evaluate(&literal(LiteralValue::Uint(40), "40u")),
            Ok(40)
        );
        assert_eq!(
            evaluator.evaluate(&literal(LiteralValue::Uint(u32::MAX), "4294967295u")),
            Err(EvaluationError::LiteralOutOfRange {
                lexeme: "4294967295u".to_string(),
                position: 0,
            })
        );
    }

    #[test]
    fn test_float_literal_is_not_truncated() {
        let evaluator = Evaluator::new();
        let err = evaluator
            .evaluate(&literal(LiteralValue::Double(2.9), "2.9"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Literal \"2.9\" of type double is not an integer at position 0"
        );
    }

    #[test]
    fn test_placeholder_literal() {
        let placeholder = Token::placeholder(TokenKind::IntLiteral, 4);
        let tree = SyntaxTree::new(Expression::binary(
            literal(LiteralValue::Int(1), "1"),
            BinaryOperator::from_token(Token::new(TokenKind::Plus, 2, "+")).unwrap(),
            Expression::Number(NumberExpression::new(placeholder).unwrap()),
        ));
        assert_eq!(
            evaluate(&tree),
            Err(EvaluationError::MissingLiteralValue { position: 4 })
        );
    }
}
