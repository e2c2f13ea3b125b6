//! Checker configuration

use crate::parser::parse::DEFAULT_MAX_DEPTH;
use clap::ValueEnum;

/// Options for one check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    /// Report string literals on the line they start on. Off by default, in
    /// which case they report [`UNATTRIBUTED_LINE`](crate::parser::token::UNATTRIBUTED_LINE).
    pub attribute_string_lines: bool,

    /// Deepest allowed nesting of statements and expressions.
    pub max_depth: usize,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            attribute_string_lines: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// When to style terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Only when writing to a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = CheckOptions::default();

        assert!(!options.attribute_string_lines);
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_color_choice() {
        assert!(ColorChoice::Auto.enabled(true));
        assert!(!ColorChoice::Auto.enabled(false));
        assert!(ColorChoice::Always.enabled(false));
        assert!(!ColorChoice::Never.enabled(true));
    }
}
