//! Declaration parsing implementation
//!
//! ```text
//! declaration ::= TYPE IDENT ';'
//! TYPE        ::= 'int' | 'string' | 'float' | 'bool' | 'char' | 'double'
//!               | STRING_LITERAL | CHAR_LITERAL
//! ```
//!
//! A string or char literal opens a declaration just like the `string` or
//! `char` keyword it shares a category with.
//!
//! Shape validation only: neither the type nor the declared name is recorded.

use crate::parser::parse::{ParseError, Parser};
use crate::parser::token::TokenKind;

impl Parser<'_> {
    /// Parse variable declaration: type name;
    pub(crate) fn parse_declaration(&mut self) -> Result<(), ParseError> {
        if self.at_declaration_start() {
            self.advance();
        }

        self.expect(TokenKind::Ident)?;
        self.expect(TokenKind::Semicolon)
    }
}
