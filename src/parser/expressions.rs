//! Expression grammar
//!
//! ```text
//! expression := term ( ('+' | '-') term )*
//! term       := primary ( ('*' | '/') primary )*
//! primary    := '(' expression ')' | IntLiteral
//! ```
//!
//! Each rule folds its operands to the left, so `a - b - c` parses as
//! `(a - b) - c`.
//!
//! Parenthesis nesting is capped at [`MAX_NESTING_DEPTH`] and tree height at
//! [`MAX_TREE_DEPTH`]; past either limit a diagnostic is recorded and the
//! excess input is parsed without growing the tree.

use crate::diagnostics::Diagnostics;
use crate::parser::ast::{BinaryOperator, Expression, NumberExpression};
use crate::parser::parse::{Parser, MAX_NESTING_DEPTH, MAX_TREE_DEPTH};
use crate::parser::token::{Token, TokenKind};

impl Parser {
    /// Parse expression (lowest precedence: `+` and `-`)
    pub(crate) fn parse_expression(&mut self, diagnostics: &mut Diagnostics) -> Expression {
        let mut left = self.parse_term(diagnostics);

        while let Some(operator) = self.match_operator(&[TokenKind::Plus, TokenKind::Minus]) {
            let right = self.parse_term(diagnostics);
            left = self.fold(left, operator, right, diagnostics);
        }

        left
    }

    /// Parse term (`*` and `/`)
    fn parse_term(&mut self, diagnostics: &mut Diagnostics) -> Expression {
        let mut left = self.parse_primary(diagnostics);

        while let Some(operator) = self.match_operator(&[TokenKind::Multiply, TokenKind::Divide]) {
            let right = self.parse_primary(diagnostics);
            left = self.fold(left, operator, right, diagnostics);
        }

        left
    }

    /// Parse primary: parenthesized expression or integer literal
    fn parse_primary(&mut self, diagnostics: &mut Diagnostics) -> Expression {
        if self.check(TokenKind::OpenParenthesis) {
            if self.nesting >= MAX_NESTING_DEPTH {
                let position = self.current().position();
                self.report_too_deep(MAX_NESTING_DEPTH, position, diagnostics);
                self.skip_group();
                let token = Token::placeholder(TokenKind::IntLiteral, position);
                return Expression::Number(NumberExpression { token });
            }

            self.advance();
            self.nesting += 1;
            let inner = self.parse_expression(diagnostics);
            self.nesting -= 1;
            // A missing ')' is reported, but the inner tree is still used.
            self.expect_token(TokenKind::CloseParenthesis, diagnostics);
            return inner;
        }

        let token = self.expect_token(TokenKind::IntLiteral, diagnostics);
        Expression::Number(NumberExpression { token })
    }

    /// Join `left operator right`, unless the result would exceed
    /// [`MAX_TREE_DEPTH`]; then `right` is discarded and `left` kept.
    fn fold(
        &mut self,
        left: Expression,
        operator: BinaryOperator,
        right: Expression,
        diagnostics: &mut Diagnostics,
    ) -> Expression {
        if left.depth().max(right.depth()) >= MAX_TREE_DEPTH {
            self.report_too_deep(MAX_TREE_DEPTH, operator.token().position(), diagnostics);
            return left;
        }
        log::trace!("folding '{}'", operator.op().symbol());
        Expression::binary(left, operator, right)
    }

    /// Consume the current token if it is one of `accepted` operators.
    fn match_operator(&mut self, accepted: &[TokenKind]) -> Option<BinaryOperator> {
        if !accepted.contains(&self.current().kind()) {
            return None;
        }
        let operator = BinaryOperator::from_token(self.current().clone())?;
        self.advance();
        Some(operator)
    }
}
