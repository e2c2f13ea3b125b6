//! Token definitions shared by the lexer and the parser
//!
//! A [`Token`] is created once by the [`Lexer`](super::lexer::Lexer) and never
//! mutated afterwards. The parser only ever borrows the token slice.

use rustc_hash::FxHashMap;
use std::fmt;

/// Line reported by tokens that carry no line attribution.
///
/// String literals historically never recorded the line they started on, so
/// unless [`CheckOptions::attribute_string_lines`](crate::CheckOptions) is set
/// their tokens report this value.
pub const UNATTRIBUTED_LINE: usize = 0;

/// Source location information for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// The closed set of token categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Type keywords
    Int,
    String,
    Float,
    Bool,
    Char,
    Double,

    // Control keywords
    If,
    Else,
    Return,

    // Literals and names
    Ident,
    Number,
    StringLiteral,
    CharLiteral,

    // Operators
    Assign, // =
    Plus,   // +
    Minus,  // -
    Star,   // *
    Slash,  // /
    Gt,     // >

    // Delimiters
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    Semicolon, // ;

    Eof,
}

impl TokenKind {
    /// True for the six keywords that may open a declaration.
    pub fn is_type_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Int
                | TokenKind::String
                | TokenKind::Float
                | TokenKind::Bool
                | TokenKind::Char
                | TokenKind::Double
        )
    }

    /// True for the kinds that open a declaration.
    ///
    /// String and char literals share their category with the `string` and
    /// `char` keywords, so a literal in statement position also opens one.
    pub fn starts_declaration(self) -> bool {
        self.is_type_keyword()
            || matches!(self, TokenKind::StringLiteral | TokenKind::CharLiteral)
    }

    /// True for the kinds accepted as a single-token factor.
    ///
    /// The `string` and `char` keywords are accepted alongside the literals
    /// they share a category with.
    pub fn is_operand(self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::Ident
                | TokenKind::StringLiteral
                | TokenKind::CharLiteral
                | TokenKind::String
                | TokenKind::Char
        )
    }

    /// Kind of a single-character operator or delimiter, if `ch` is one.
    pub fn from_symbol(ch: char) -> Option<TokenKind> {
        let kind = match ch {
            '=' => TokenKind::Assign,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '>' => TokenKind::Gt,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ';' => TokenKind::Semicolon,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int => write!(f, "'int'"),
            TokenKind::String => write!(f, "'string'"),
            TokenKind::Float => write!(f, "'float'"),
            TokenKind::Bool => write!(f, "'bool'"),
            TokenKind::Char => write!(f, "'char'"),
            TokenKind::Double => write!(f, "'double'"),
            TokenKind::If => write!(f, "'if'"),
            TokenKind::Else => write!(f, "'else'"),
            TokenKind::Return => write!(f, "'return'"),
            TokenKind::Ident => write!(f, "identifier"),
            TokenKind::Number => write!(f, "number literal"),
            TokenKind::StringLiteral => write!(f, "string literal"),
            TokenKind::CharLiteral => write!(f, "char literal"),
            TokenKind::Assign => write!(f, "'='"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::Gt => write!(f, "'>'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// A classified, line-tagged lexical unit.
///
/// `lexeme` is the exact source text, except for string and char literals
/// where it holds the contents without the surrounding quotes. The end-of-input
/// token has an empty lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            location,
        }
    }

    pub fn line(&self) -> usize {
        self.location.line
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Ident | TokenKind::Number => {
                write!(f, "{} '{}'", self.kind, self.lexeme)
            }
            TokenKind::StringLiteral => write!(f, "string literal \"{}\"", self.lexeme),
            TokenKind::CharLiteral => write!(f, "char literal '{}'", self.lexeme),
            kind => write!(f, "{}", kind),
        }
    }
}

/// Keyword lookup table. Matching is exact and case-sensitive.
pub(crate) fn keyword_table() -> FxHashMap<&'static str, TokenKind> {
    let mut keywords = FxHashMap::default();
    keywords.insert("int", TokenKind::Int);
    keywords.insert("string", TokenKind::String);
    keywords.insert("float", TokenKind::Float);
    keywords.insert("bool", TokenKind::Bool);
    keywords.insert("char", TokenKind::Char);
    keywords.insert("double", TokenKind::Double);
    keywords.insert("if", TokenKind::If);
    keywords.insert("else", TokenKind::Else);
    keywords.insert("return", TokenKind::Return);
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_keywords() {
        let types = [
            TokenKind::Int,
            TokenKind::String,
            TokenKind::Float,
            TokenKind::Bool,
            TokenKind::Char,
            TokenKind::Double,
        ];
        for kind in types {
            assert!(kind.is_type_keyword(), "{} should be a type keyword", kind);
        }
        assert!(!TokenKind::If.is_type_keyword());
        assert!(!TokenKind::Ident.is_type_keyword());
        assert!(!TokenKind::StringLiteral.is_type_keyword());
        assert!(!TokenKind::CharLiteral.is_type_keyword());
    }

    #[test]
    fn test_literals_share_category_with_keywords() {
        assert!(TokenKind::StringLiteral.starts_declaration());
        assert!(TokenKind::CharLiteral.starts_declaration());
        assert!(TokenKind::Double.starts_declaration());
        assert!(!TokenKind::Number.starts_declaration());
        assert!(!TokenKind::Ident.starts_declaration());

        assert!(TokenKind::String.is_operand());
        assert!(TokenKind::Char.is_operand());
        assert!(!TokenKind::Int.is_operand());
        assert!(!TokenKind::Float.is_operand());
        assert!(!TokenKind::LParen.is_operand());
    }

    #[test]
    fn test_keyword_table_is_case_sensitive() {
        let keywords = keyword_table();
        assert_eq!(keywords.len(), 9);
        assert_eq!(keywords.get("return"), Some(&TokenKind::Return));
        assert_eq!(keywords.get("Return"), None);
        assert_eq!(keywords.get("INT"), None);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(TokenKind::from_symbol(';'), Some(TokenKind::Semicolon));
        assert_eq!(TokenKind::from_symbol('>'), Some(TokenKind::Gt));
        assert_eq!(TokenKind::from_symbol('<'), None);
        assert_eq!(TokenKind::from_symbol('%'), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::Ident.to_string(), "identifier");
        assert_eq!(TokenKind::Semicolon.to_string(), "';'");
        assert_eq!(TokenKind::LBrace.to_string(), "'{'");
        assert_eq!(TokenKind::Eof.to_string(), "end of input");
    }

    #[test]
    fn test_expected_kind_is_named_not_numbered() {
        // diagnostics name the missing kind instead of printing an enum ordinal
        for kind in [TokenKind::Int, TokenKind::Ident, TokenKind::Semicolon, TokenKind::RParen] {
            let name = kind.to_string();
            assert!(name.parse::<u32>().is_err(), "{} renders as a number", name);
        }
        assert_eq!(TokenKind::Assign.to_string(), "'='");
        assert_eq!(TokenKind::RParen.to_string(), "')'");
    }
}
