//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and the shared parsing
//! infrastructure: the error type, cursor helpers and the entry point.
//!
//! # Parser Architecture
//!
//! The parser is a pure acceptor. Every rule method either advances the cursor
//! past a fully recognized construct or returns the first [`ParseError`];
//! nothing is built and nothing is retained. Rules are split across files
//! using `impl Parser` blocks:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: typed declarations
//! - `statements`: assignment, `if`, `return` and blocks
//! - `expressions`: expression, term and factor
//!
//! The cursor only moves forward. Statement dispatch and the optional `else`
//! branch look at the current token without consuming it.

use crate::parser::token::{SourceLocation, Token, TokenKind};
use thiserror::Error;

/// Default limit on nested statements and expressions.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Stands in for the end-of-input token if a caller hands over a token slice
/// that is missing one.
static MISSING_EOF: Token = Token {
    kind: TokenKind::Eof,
    lexeme: String::new(),
    location: SourceLocation { line: 0, column: 0 },
};

/// Syntax errors. The first one ends the parse.
///
/// The `Display` texts are part of the tool's observable output and must not
/// change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No statement or factor can start with this token
    #[error("Syntax error: unexpected token '{lexeme}' at line {line}")]
    UnexpectedToken { lexeme: String, line: usize },

    /// A required token kind is missing
    #[error("Syntax error: expected {expected} but found '{found}' at line {line}")]
    Expected {
        expected: TokenKind,
        found: String,
        line: usize,
    },

    /// Statements or expressions nested deeper than the configured limit
    #[error("Syntax error: nesting depth exceeds {limit} at line {line}")]
    NestingTooDeep { limit: usize, line: usize },
}

impl ParseError {
    /// Line of the offending token.
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { line, .. }
            | ParseError::Expected { line, .. }
            | ParseError::NestingTooDeep { line, .. } => *line,
        }
    }
}

/// Outcome of a successful parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseSummary {
    /// Number of top-level statements
    pub statements: usize,
}

/// Recursive descent acceptor over a borrowed token stream
pub struct Parser<'a> {
    pub(crate) tokens: &'a [Token],
    pub(crate) position: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser over `tokens`, which should end with a
    /// [`TokenKind::Eof`] token as produced by the lexer.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse the entire program: zero or more statements up to end of input.
    pub fn parse_program(&mut self) -> Result<ParseSummary, ParseError> {
        let mut statements = 0;

        while !self.is_at_end() {
            self.parse_statement()?;
            statements += 1;
        }

        tracing::debug!(statements, "parsed program");
        Ok(ParseSummary { statements })
    }

    /// Cursor position; the index of the current token.
    pub fn position(&self) -> usize {
        self.position
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&MISSING_EOF)
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    pub(crate) fn at_declaration_start(&self) -> bool {
        self.peek().kind.starts_declaration()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Step past the current token. End of input is never consumed.
    pub(crate) fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            let found = self.peek();
            Err(ParseError::Expected {
                expected: kind,
                found: found.lexeme.clone(),
                line: found.line(),
            })
        }
    }

    /// Error for a token that no alternative of the current rule accepts.
    pub(crate) fn unexpected(&self) -> ParseError {
        let found = self.peek();
        ParseError::UnexpectedToken {
            lexeme: found.lexeme.clone(),
            line: found.line(),
        }
    }

    /// Run a recursive rule one nesting level deeper.
    pub(crate) fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
                line: self.peek().line(),
            });
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }
}
