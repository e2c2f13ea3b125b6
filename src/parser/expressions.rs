//! Expression parsing implementation
//!
//! # Grammar
//!
//! ```text
//! expression ::= term (('+' | '-') term)* ('>' expression)?
//! term       ::= factor (('*' | '/') factor)*
//! factor     ::= NUMBER | IDENT | STRING | CHAR | '(' expression ')'
//! ```
//!
//! `>` takes a whole expression on its right, so it sits below the additive
//! operators: `a + b > c - d` splits at the `>`, and `a > b > c` groups as
//! `a > (b > c)`. Nothing is built, so the right-recursive tail is accepted
//! with a loop; only parentheses add nesting depth.
//!
//! `STRING` and `CHAR` cover both the literals and the `string` and `char`
//! keywords.

use crate::parser::parse::{ParseError, Parser};
use crate::parser::token::TokenKind;

impl Parser<'_> {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<(), ParseError> {
        self.nested(|parser| {
            parser.parse_additive()?;

            while parser.check(TokenKind::Gt) {
                parser.advance();
                parser.parse_additive()?;
            }

            Ok(())
        })
    }

    /// Parse additive operators (+ -)
    fn parse_additive(&mut self) -> Result<(), ParseError> {
        self.parse_term()?;

        while self.check(TokenKind::Plus) || self.check(TokenKind::Minus) {
            self.advance();
            self.parse_term()?;
        }

        Ok(())
    }

    /// Parse multiplicative operators (* /)
    fn parse_term(&mut self) -> Result<(), ParseError> {
        self.parse_factor()?;

        while self.check(TokenKind::Star) || self.check(TokenKind::Slash) {
            self.advance();
            self.parse_factor()?;
        }

        Ok(())
    }

    /// Parse a literal, a name or a parenthesized expression
    fn parse_factor(&mut self) -> Result<(), ParseError> {
        let kind = self.peek().kind;
        match kind {
            kind if kind.is_operand() => {
                self.advance();
                Ok(())
            }
            TokenKind::LParen => {
                self.expect(TokenKind::LParen)?;
                self.parse_expression()?;
                self.expect(TokenKind::RParen)
            }
            _ => Err(self.unexpected()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::lexer::Lexer;
    use crate::parser::parse::{ParseError, Parser};
    use crate::parser::token::TokenKind;

    fn parse_assigned(expr: &str) -> Result<(), ParseError> {
        let source = format!("x = {};", expr);
        let tokens = Lexer::new(&source).tokenize().unwrap();
        Parser::new(&tokens).parse_program().map(|_| ())
    }

    #[test]
    fn test_factors() {
        for expr in ["42", "3.5", "y", "\"text\"", "'c'", "(1)", "((y))"] {
            assert!(parse_assigned(expr).is_ok(), "{}", expr);
        }
    }

    #[test]
    fn test_arithmetic() {
        assert!(parse_assigned("1 + 2 * 3 - 4 / 5").is_ok());
        assert!(parse_assigned("(1 + 2) * (3 - 4)").is_ok());
        assert!(parse_assigned("a * b * c / d").is_ok());
    }

    #[test]
    fn test_greater_than_chains() {
        assert!(parse_assigned("a > b").is_ok());
        assert!(parse_assigned("a + 1 > b * 2").is_ok());
        assert!(parse_assigned("a > b > c > d").is_ok());
        assert!(parse_assigned("(a > b) + 1").is_ok());
    }

    #[test]
    fn test_greater_than_needs_right_operand() {
        let err = parse_assigned("a >").unwrap_err();

        assert_eq!(err.to_string(), "Syntax error: unexpected token ';' at line 1");
    }

    #[test]
    fn test_term_after_comparison_is_not_continued() {
        // `>` consumes a whole expression, so nothing can follow but `;`
        assert!(parse_assigned("a > b + c").is_ok());
        assert!(parse_assigned("a > b (c)").is_err());
    }

    #[test]
    fn test_unary_minus_is_not_supported() {
        let err = parse_assigned("-1").unwrap_err();

        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                lexeme: "-".to_string(),
                line: 1,
            }
        );
    }

    #[test]
    fn test_unbalanced_parenthesis() {
        let err = parse_assigned("(1 + 2").unwrap_err();

        assert_eq!(
            err,
            ParseError::Expected {
                expected: TokenKind::RParen,
                found: ";".to_string(),
                line: 1,
            }
        );
    }

    #[test]
    fn test_string_and_char_keywords_are_factors() {
        assert!(parse_assigned("string").is_ok());
        assert!(parse_assigned("char").is_ok());
        assert!(parse_assigned("char + 'c' > string").is_ok());

        let err = parse_assigned("int").unwrap_err();
        assert_eq!(err.to_string(), "Syntax error: unexpected token 'int' at line 1");
        assert!(parse_assigned("double").is_err());
    }

    #[test]
    fn test_long_comparison_chain_within_default_depth() {
        let chain = format!("{}a", "a > ".repeat(1000));
        assert!(parse_assigned(&chain).is_ok());

        let chain = format!("{}1 + b", "(a) * 2 > ".repeat(1000));
        assert!(parse_assigned(&chain).is_ok());
    }

    #[test]
    fn test_parentheses_still_count_toward_depth() {
        let nested = format!("{}a{}", "(".repeat(300), ")".repeat(300));
        let err = parse_assigned(&nested).unwrap_err();

        assert!(matches!(err, ParseError::NestingTooDeep { limit: 256, .. }));
    }

    #[test]
    fn test_string_literal_errors_report_unattributed_line() {
        // string literal tokens carry line 0 unless lines are attributed
        let err = parse_assigned("1 \"two\"").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Syntax error: expected ';' but found 'two' at line 0"
        );
    }
}
