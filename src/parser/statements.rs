//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! statement  ::= declaration | assignment | if_stmt | return_stmt | block
//! assignment ::= IDENT '=' expression ';'
//! if_stmt    ::= 'if' '(' expression ')' statement ('else' statement)?
//! return_stmt::= 'return' expression ';'
//! block      ::= '{' statement* '}'
//! ```
//!
//! Dispatch looks only at the current token. An identifier always starts an
//! assignment; there is no expression statement.

use crate::parser::parse::{ParseError, Parser};
use crate::parser::token::TokenKind;

impl Parser<'_> {
    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<(), ParseError> {
        self.nested(|parser| {
            let token = parser.peek();
            tracing::trace!(
                kind = ?token.kind,
                line = token.location.line,
                "statement"
            );

            let kind = token.kind;
            match kind {
                kind if kind.starts_declaration() => parser.parse_declaration(),
                TokenKind::Ident => parser.parse_assignment(),
                TokenKind::If => parser.parse_if_statement(),
                TokenKind::Return => parser.parse_return_statement(),
                TokenKind::LBrace => parser.parse_block(),
                _ => Err(parser.unexpected()),
            }
        })
    }

    /// Parse block: { statements }
    pub(crate) fn parse_block(&mut self) -> Result<(), ParseError> {
        self.expect(TokenKind::LBrace)?;

        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            self.parse_statement()?;
        }

        self.expect(TokenKind::RBrace)
    }

    fn parse_assignment(&mut self) -> Result<(), ParseError> {
        self.expect(TokenKind::Ident)?;
        self.expect(TokenKind::Assign)?;
        self.parse_expression()?;
        self.expect(TokenKind::Semicolon)
    }

    /// Parse if statement with an optional else branch
    fn parse_if_statement(&mut self) -> Result<(), ParseError> {
        self.expect(TokenKind::If)?;
        self.expect(TokenKind::LParen)?;
        self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        self.parse_statement()?;

        // a dangling else binds to the innermost if
        if self.check(TokenKind::Else) {
            self.advance();
            self.parse_statement()?;
        }

        Ok(())
    }

    fn parse_return_statement(&mut self) -> Result<(), ParseError> {
        self.expect(TokenKind::Return)?;
        self.parse_expression()?;
        self.expect(TokenKind::Semicolon)
    }
}
