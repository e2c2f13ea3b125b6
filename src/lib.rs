//! # Introduction
//!
//! tinyc-check is a front-end syntax checker for a small C-like language. It
//! turns source text into tokens and verifies that the token stream follows
//! the statement and expression grammar, stopping at the first error.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → accepted | first error
//! ```
//!
//! 1. [`parser::lexer`] classifies characters into line-tagged
//!    [`parser::token::Token`]s.
//! 2. [`parser::parse`] walks the tokens with a recursive descent acceptor.
//!    Nothing is built; the parser only advances a cursor.
//!
//! Each call constructs fresh lexer and parser state, so checking the same
//! text twice always gives the same outcome.
//!
//! ```
//! use tinyc_check::{check_source, CheckOptions};
//!
//! let options = CheckOptions::default();
//! assert!(check_source("if (x > 0) { return x; } else { return 0; }", &options).is_ok());
//!
//! let err = check_source("x = 1 + ;", &options).unwrap_err();
//! assert_eq!(err.to_string(), "Syntax error: unexpected token ';' at line 1");
//! ```

pub mod config;
pub mod error;
pub mod parser;

use std::fs;
use std::path::Path;

pub use config::{CheckOptions, ColorChoice};
pub use error::CheckError;
pub use parser::lexer::{LexError, Lexer};
pub use parser::parse::{ParseError, ParseSummary, Parser};
pub use parser::token::{SourceLocation, Token, TokenKind};

/// Printed when the whole input is accepted.
pub const SUCCESS_MESSAGE: &str = "Parsing completed successfully! No Syntax Error";

/// Tokenize `source` with the lexer settings from `options`.
pub fn tokenize(source: &str, options: &CheckOptions) -> Result<Vec<Token>, LexError> {
    Lexer::new(source)
        .attribute_string_lines(options.attribute_string_lines)
        .tokenize()
}

/// Check an already tokenized program.
pub fn check_tokens(tokens: &[Token], options: &CheckOptions) -> Result<ParseSummary, ParseError> {
    Parser::new(tokens)
        .with_max_depth(options.max_depth)
        .parse_program()
}

/// Tokenize and parse `source`, returning the first error found.
pub fn check_source(source: &str, options: &CheckOptions) -> Result<ParseSummary, CheckError> {
    let tokens = tokenize(source, options)?;
    Ok(check_tokens(&tokens, options)?)
}

/// Read a source file into one text buffer.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD, which the lexer
/// then reports as an unexpected character.
pub fn read_source(path: impl AsRef<Path>) -> Result<String, CheckError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| CheckError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read source file");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read the file at `path` and check its contents.
pub fn check_file(path: impl AsRef<Path>, options: &CheckOptions) -> Result<ParseSummary, CheckError> {
    let source = read_source(path)?;
    check_source(&source, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_source_is_repeatable() {
        let options = CheckOptions::default();
        let source = "int x;\nx = 1 + 2;\nif (x > 2) { return x; }";

        let first = check_source(source, &options).unwrap();
        let second = check_source(source, &options).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.statements, 3);

        let bad = "x = 1 + ;";
        let first = check_source(bad, &options).unwrap_err().to_string();
        let second = check_source(bad, &options).unwrap_err().to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_lex_error_stops_before_parsing() {
        // the syntax error on line 1 is never reached
        let err = check_source("x = ;\ny = 1.2.3;", &CheckOptions::default()).unwrap_err();

        assert!(matches!(err, CheckError::Lex(LexError::MalformedNumber { line: 2 })));
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn test_attributed_string_lines_in_diagnostics() {
        let options = CheckOptions {
            attribute_string_lines: true,
            ..CheckOptions::default()
        };

        let err = check_source("\nx = 1 \"two\";", &options).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Syntax error: expected ';' but found 'two' at line 2"
        );
    }

    #[test]
    fn test_missing_file() {
        let err = check_file("/nonexistent/dir/input.tc", &CheckOptions::default()).unwrap_err();

        assert!(matches!(err, CheckError::Io { .. }));
        assert_eq!(err.line(), None);
        assert_eq!(
            err.to_string(),
            "Error: Could not open file /nonexistent/dir/input.tc"
        );
    }
}
