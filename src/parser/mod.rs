//! Source syntax checker
//!
//! This module checks source text against the language grammar:
//! - [`token`]: Token kinds and source locations
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → accept or first syntax error)
//!
//! # Supported Language
//!
//! - Declarations of one of six types: `int`, `string`, `float`, `bool`,
//!   `char`, `double`
//! - Assignments, `if`/`else`, `return` and `{ }` blocks
//! - Expressions over numbers, names, string and char literals with
//!   `+ - * /`, parentheses and a single comparison operator `>`
//! - No comments, loops, functions, arrays or multi-character operators
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent acceptor with one token of lookahead. No
//! syntax tree is built.

pub mod lexer;
pub mod parse;
pub mod token;

mod declarations;
mod expressions;
mod statements;
