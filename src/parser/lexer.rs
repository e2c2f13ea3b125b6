//! Lexer (tokenizer) for the checked language
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. The scan is a single left-to-right pass with one character of
//! lookahead; the first malformed lexeme stops it with a [`LexError`].
//!
//! Only whitespace skipping advances the line counter. Literals cannot span
//! lines in this language, so a newline inside a string or char literal is
//! taken as content and leaves the line unchanged.

use super::token::{keyword_table, SourceLocation, Token, TokenKind, UNATTRIBUTED_LINE};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Lexical errors. Each one is fatal to the scan.
///
/// The `Display` texts are part of the tool's observable output and must not
/// change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that cannot start any token
    #[error("Unexpected character: {ch} at line {line}")]
    UnexpectedCharacter { ch: char, line: usize },

    /// A second decimal point inside one numeric literal
    #[error("Unexpected character: . at line {line}")]
    MalformedNumber { line: usize },

    /// End of input before the closing `"`
    #[error("Unterminated string literal")]
    UnterminatedString { line: usize },

    /// A char literal that is not exactly one character between quotes
    #[error("Unexpected char literal format at line {line}")]
    MalformedChar { line: usize },
}

impl LexError {
    /// Line on which the offending lexeme started.
    pub fn line(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { line, .. }
            | LexError::MalformedNumber { line }
            | LexError::UnterminatedString { line }
            | LexError::MalformedChar { line } => *line,
        }
    }
}

/// Lexer for a single source buffer
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    keywords: FxHashMap<&'static str, TokenKind>,
    attribute_string_lines: bool,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            keywords: keyword_table(),
            attribute_string_lines: false,
        }
    }

    /// Attribute string-literal tokens to the line they start on instead of
    /// [`UNATTRIBUTED_LINE`].
    pub fn attribute_string_lines(mut self, enabled: bool) -> Self {
        self.attribute_string_lines = enabled;
        self
    }

    /// Tokenize the entire input.
    ///
    /// On success the returned vector always ends with exactly one
    /// [`TokenKind::Eof`] token carrying the final line number.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            if is_space(ch) {
                self.skip_space(ch);
                continue;
            }

            let token = self.next_token(ch)?;
            tracing::trace!(
                kind = ?token.kind,
                lexeme = %token.lexeme,
                line = token.location.line,
                column = token.location.column,
                "token"
            );
            tokens.push(token);
        }

        tokens.push(Token::new(TokenKind::Eof, "", self.current_location()));
        tracing::debug!(tokens = tokens.len(), lines = self.line, "tokenized source");

        Ok(tokens)
    }

    /// Recognize the token starting at `ch`, the current character.
    fn next_token(&mut self, ch: char) -> Result<Token, LexError> {
        let loc = self.current_location();

        if ch.is_ascii_digit() {
            return self.number_literal(loc);
        }

        match ch {
            '"' => self.string_literal(loc),
            '\'' => self.char_literal(loc),
            c if c.is_ascii_alphabetic() => Ok(self.identifier_or_keyword(loc)),
            c => match TokenKind::from_symbol(c) {
                Some(kind) => {
                    self.advance();
                    Ok(Token::new(kind, c.to_string(), loc))
                }
                None => Err(LexError::UnexpectedCharacter {
                    ch: c,
                    line: self.line,
                }),
            },
        }
    }

    /// Digits with at most one decimal point. A trailing point is accepted.
    fn number_literal(&mut self, loc: SourceLocation) -> Result<Token, LexError> {
        let start = self.position;
        let mut seen_dot = false;

        while let Some(ch) = self.peek() {
            if ch == '.' {
                if seen_dot {
                    return Err(LexError::MalformedNumber { line: self.line });
                }
                seen_dot = true;
            } else if !ch.is_ascii_digit() {
                break;
            }
            self.advance();
        }

        Ok(Token::new(TokenKind::Number, self.slice(start), loc))
    }

    /// Everything up to the next `"`. No escape sequences.
    fn string_literal(&mut self, loc: SourceLocation) -> Result<Token, LexError> {
        self.advance(); // opening quote
        let start = self.position;

        while let Some(ch) = self.peek() {
            if ch == '"' {
                let contents = self.slice(start);
                self.advance(); // closing quote

                let location = if self.attribute_string_lines {
                    loc
                } else {
                    SourceLocation::new(UNATTRIBUTED_LINE, loc.column)
                };
                return Ok(Token::new(TokenKind::StringLiteral, contents, location));
            }
            self.advance();
        }

        Err(LexError::UnterminatedString { line: loc.line })
    }

    /// Exactly one character followed by the closing `'`.
    fn char_literal(&mut self, loc: SourceLocation) -> Result<Token, LexError> {
        self.advance(); // opening quote

        match (self.peek(), self.peek_ahead(1)) {
            (Some(ch), Some('\'')) => {
                self.advance();
                self.advance();
                Ok(Token::new(TokenKind::CharLiteral, ch.to_string(), loc))
            }
            _ => Err(LexError::MalformedChar { line: self.line }),
        }
    }

    /// Letters and digits only; `_` does not continue a word.
    fn identifier_or_keyword(&mut self, loc: SourceLocation) -> Token {
        let start = self.position;

        while let Some(ch) = self.peek() {
            if !ch.is_ascii_alphanumeric() {
                break;
            }
            self.advance();
        }

        let word = self.slice(start);
        let kind = self
            .keywords
            .get(word.as_str())
            .copied()
            .unwrap_or(TokenKind::Ident);

        Token::new(kind, word, loc)
    }

    fn skip_space(&mut self, ch: char) {
        self.position += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance within a lexeme. Never touches the line counter.
    fn advance(&mut self) {
        if self.position < self.input.len() {
            self.position += 1;
            self.column += 1;
        }
    }

    fn slice(&self, start: usize) -> String {
        self.input[start..self.position].iter().collect()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// The C `isspace` set.
fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}
