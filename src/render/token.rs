//! Line tokens
//!
//! A token classifies a contiguous range of a line, starting at
//! `start_index` and running up to the next token's start (or the end of
//! the line). Offsets are UTF-16 code units.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::OnceLock;

/// Matches token types that mark whitespace, as a whole word. Word
/// boundaries are ASCII-only, so a following `é` still ends the word.
static WHITESPACE_TYPE: OnceLock<Regex> = OnceLock::new();

/// Matches characters that may not appear in a CSS class list.
static CLASS_UNSAFE: OnceLock<Regex> = OnceLock::new();

fn whitespace_type() -> &'static Regex {
    WHITESPACE_TYPE.get_or_init(|| Regex::new(r"(?-u:\b)whitespace(?-u:\b)").expect("valid whitespace pattern"))
}

fn class_unsafe() -> &'static Regex {
    CLASS_UNSAFE.get_or_init(|| Regex::new(r"[^a-zA-Z0-9\-]").expect("valid class pattern"))
}

/// A style annotation over part of a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineToken {
    /// First UTF-16 code unit covered by this token
    pub start_index: usize,
    /// Space-separated type label, e.g. `"keyword control"`
    pub token_type: String,
}

impl LineToken {
    /// Create a token starting at `start_index`.
    pub fn new(start_index: usize, token_type: impl Into<String>) -> Self {
        Self {
            start_index,
            token_type: token_type.into(),
        }
    }

    /// Whether the type label denotes whitespace.
    ///
    /// `"whitespace"` must appear as a whole word: `"token whitespace"`
    /// matches, `"nowhitespaces"` does not.
    pub fn is_whitespace(&self) -> bool {
        whitespace_type().is_match(&self.token_type)
    }

    /// The type label with everything outside `[A-Za-z0-9-]` blanked out,
    /// safe to drop into a `class` attribute.
    pub fn css_class(&self) -> Cow<'_, str> {
        class_unsafe().replace_all(&self.token_type, " ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_whitespace_whole_word() {
        assert!(LineToken::new(0, "whitespace").is_whitespace());
        assert!(LineToken::new(0, "token whitespace").is_whitespace());
        assert!(LineToken::new(0, "whitespace.leading").is_whitespace());
        assert!(!LineToken::new(0, "nowhitespace").is_whitespace());
        assert!(!LineToken::new(0, "whitespaces").is_whitespace());
        assert!(!LineToken::new(0, "keyword").is_whitespace());
    }

    #[test]
    fn test_is_whitespace_ascii_word_boundary() {
        assert!(LineToken::new(0, "whitespaceé").is_whitespace());
        assert!(LineToken::new(0, "éwhitespace").is_whitespace());
        assert!(!LineToken::new(0, "whitespace_x").is_whitespace());
    }

    #[test]
    fn test_css_class_passthrough() {
        let token = LineToken::new(0, "keyword-control");
        assert_eq!(token.css_class(), "keyword-control");
    }

    #[test]
    fn test_css_class_blanks_unsafe_chars() {
        let token = LineToken::new(0, "string.quoted\"><script>");
        assert_eq!(token.css_class(), "string quoted   script ");
    }

    #[test]
    fn test_token_deserialize() {
        let json = r#"{"start_index": 3, "token_type": "comment"}"#;
        let token: LineToken = serde_json::from_str(json).unwrap();
        assert_eq!(token, LineToken::new(3, "comment"));
    }
}
