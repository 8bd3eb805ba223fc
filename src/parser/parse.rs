//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, its token-cursor helpers and
//! the `parse` entry point. The grammar rules themselves live in
//! `expressions`, which extends `Parser` with its own `impl` block.
//!
//! The parser never fails on malformed input. A missing token is recorded in
//! the caller's [`Diagnostics`] and replaced by an empty placeholder of the
//! expected kind, so a (partial) [`SyntaxTree`] is always returned.

use crate::diagnostics::{Diagnostics, SyntaxError};
use crate::parser::ast::SyntaxTree;
use crate::parser::token::{Token, TokenKind};

/// Deepest parenthesis nesting accepted before the group is skipped.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Tallest syntax tree the parser will build; longer operator chains are cut off.
pub const MAX_TREE_DEPTH: usize = 1024;

/// Recursive descent parser over a token sequence.
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    /// Open parentheses enclosing the cursor.
    pub(crate) nesting: usize,
    too_deep: bool,
}

impl Parser {
    /// Build a parser over `tokens`.
    ///
    /// An end-of-file token is appended unless the sequence already ends
    /// with one; it is placed just past the last token's lexeme.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        let needs_eof = tokens
            .last()
            .map_or(true, |last| last.kind() != TokenKind::EndOfFile);
        if needs_eof {
            let end = tokens
                .last()
                .map_or(0, |last| last.position() + last.lexeme().chars().count());
            tokens.push(Token::new(TokenKind::EndOfFile, end, ""));
        }

        Self {
            tokens,
            position: 0,
            nesting: 0,
            too_deep: false,
        }
    }

    /// Parse a single expression spanning the whole token sequence.
    pub fn parse(&mut self, diagnostics: &mut Diagnostics) -> SyntaxTree {
        let root = self.parse_expression(diagnostics);

        if !self.is_at_end() {
            let current = self.current();
            diagnostics.push(SyntaxError::TrailingInput {
                found: current.kind(),
                position: current.position(),
            });
        }

        log::debug!("parsed expression with {} nodes", root.node_count());
        SyntaxTree::new(root)
    }

    // ===== Helper methods =====

    /// The token under the cursor.
    pub(crate) fn current(&self) -> &Token {
        self.peek(0)
    }

    /// Token `offset` places ahead; past the end this is always the last token.
    pub(crate) fn peek(&self, offset: usize) -> &Token {
        let index = (self.position + offset).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current().kind() == kind
    }

    /// Return the current token and move past it, never beyond the last token.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if self.position < self.tokens.len() - 1 {
            self.position += 1;
        }
        token
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.check(TokenKind::EndOfFile)
    }

    /// Consume a token of `kind`, or record a diagnostic and fabricate an
    /// empty placeholder of that kind at the current position.
    pub(crate) fn expect_token(&mut self, kind: TokenKind, diagnostics: &mut Diagnostics) -> Token {
        if self.check(kind) {
            return self.advance();
        }

        let current = self.current();
        let position = current.position();
        diagnostics.push(SyntaxError::UnexpectedToken {
            expected: kind,
            found: current.kind(),
            position,
        });
        Token::placeholder(kind, position)
    }

    /// Record that a depth limit was hit. Only the first hit is reported.
    pub(crate) fn report_too_deep(
        &mut self,
        limit: usize,
        position: usize,
        diagnostics: &mut Diagnostics,
    ) {
        if self.too_deep {
            return;
        }
        self.too_deep = true;
        log::warn!("expression deeper than {} at position {}", limit, position);
        diagnostics.push(SyntaxError::NestingTooDeep { limit, position });
    }

    /// Move past the parenthesized group opening at the cursor, including
    /// its matching `)` when there is one.
    pub(crate) fn skip_group(&mut self) {
        let mut open = 0usize;
        while !self.is_at_end() {
            match self.advance().kind() {
                TokenKind::OpenParenthesis => open += 1,
                TokenKind::CloseParenthesis => {
                    open = open.saturating_sub(1);
                    if open == 0 {
                        return;
                    }
                }
                _ => {}
            }
        }
    }
}
