//! Error type for a whole check run
//!
//! Lexical and syntax errors are both fatal: the run stops at the first one.
//! Their `Display` output is the diagnostic line printed by the command-line
//! tool.

use crate::parser::lexer::LexError;
use crate::parser::parse::ParseError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    /// The source could not be tokenized
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The token stream does not match the grammar
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The source file could not be read
    #[error("Error: Could not open file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CheckError {
    /// Line the diagnostic refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            CheckError::Lex(err) => Some(err.line()),
            CheckError::Parse(err) => Some(err.line()),
            CheckError::Io { .. } => None,
        }
    }
}
