// Syntax tree definitions for arithmetic expressions

use super::token::{Token, TokenKind};
use std::fmt;

/// The four arithmetic operators a binary node may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithmeticOp {
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(ArithmeticOp::Add),
            TokenKind::Minus => Some(ArithmeticOp::Sub),
            TokenKind::Multiply => Some(ArithmeticOp::Mul),
            TokenKind::Divide => Some(ArithmeticOp::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            ArithmeticOp::Add => '+',
            ArithmeticOp::Sub => '-',
            ArithmeticOp::Mul => '*',
            ArithmeticOp::Div => '/',
        }
    }
}

/// Operator token of a binary node, paired with its decoded operation.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOperator {
    op: ArithmeticOp,
    token: Token,
}

impl BinaryOperator {
    /// `None` unless the token is one of `+ - * /`.
    pub fn from_token(token: Token) -> Option<Self> {
        let op = ArithmeticOp::from_kind(token.kind())?;
        Some(Self { op, token })
    }

    pub fn op(&self) -> ArithmeticOp {
        self.op
    }

    pub fn token(&self) -> &Token {
        &self.token
    }
}

/// A single numeric literal.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpression {
    pub(crate) token: Token,
}

impl NumberExpression {
    /// `None` unless the token is a numeric literal kind.
    pub fn new(token: Token) -> Option<Self> {
        token
            .kind()
            .is_numeric_literal()
            .then_some(Self { token })
    }

    pub fn token(&self) -> &Token {
        &self.token
    }
}

/// `left operator right`, exclusively owning both operands.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    left: Box<Expression>,
    operator: BinaryOperator,
    right: Box<Expression>,
    depth: usize,
}

impl BinaryExpression {
    pub fn new(left: Expression, operator: BinaryOperator, right: Expression) -> Self {
        let depth = 1 + left.depth().max(right.depth());
        Self {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            depth,
        }
    }

    pub fn left(&self) -> &Expression {
        &self.left
    }

    pub fn operator(&self) -> &BinaryOperator {
        &self.operator
    }

    pub fn right(&self) -> &Expression {
        &self.right
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(NumberExpression),
    Binary(BinaryExpression),
}

impl Expression {
    pub fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Self {
        Expression::Binary(BinaryExpression::new(left, operator, right))
    }

    /// Source offset of the token that best identifies this node.
    pub fn position(&self) -> usize {
        match self {
            Expression::Number(number) => number.token.position(),
            Expression::Binary(binary) => binary.operator.token.position(),
        }
    }

    /// Height of this subtree; a single number has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Expression::Number(_) => 1,
            Expression::Binary(binary) => binary.depth,
        }
    }

    /// Number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        match self {
            Expression::Number(_) => 1,
            Expression::Binary(binary) => 1 + binary.left.node_count() + binary.right.node_count(),
        }
    }

    fn write_outline(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            Expression::Number(number) => {
                let token = &number.token;
                match token.value() {
                    Some(value) => writeln!(f, "{}Number {}", indent, value),
                    None => writeln!(f, "{}Number <missing>", indent),
                }
            }
            Expression::Binary(binary) => {
                writeln!(f, "{}Binary '{}'", indent, binary.operator.op.symbol())?;
                binary.left.write_outline(f, depth + 1)?;
                binary.right.write_outline(f, depth + 1)
            }
        }
    }
}

/// Root handle returned by the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxTree {
    root: Expression,
}

impl SyntaxTree {
    pub fn new(root: Expression) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Expression {
        &self.root
    }

    /// Fully parenthesized infix form, e.g. `(2 + (3 * 4))`.
    pub fn to_infix(&self) -> String {
        fn infix(expr: &Expression) -> String {
            match expr {
                Expression::Number(number) => match number.token.value() {
                    Some(value) => value.to_string(),
                    None => "?".to_string(),
                },
                Expression::Binary(binary) => format!(
                    "({} {} {})",
                    infix(&binary.left),
                    binary.operator.op.symbol(),
                    infix(&binary.right)
                ),
            }
        }
        infix(&self.root)
    }
}

/// Indented outline, one node per line.
impl fmt::Display for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.write_outline(f, 0)
    }
}
