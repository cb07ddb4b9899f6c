//! Export Options
//!
//! Options controlling how rendered lines are wrapped into an HTML document.

use serde::{Deserialize, Serialize};

/// Configuration options for HTML export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Document title
    pub title: String,

    /// Whether each line is prefixed with its 1-based line number
    pub include_line_numbers: bool,

    /// Whether to inline the base stylesheet
    pub include_base_css: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            title: String::from("Rendered Lines"),
            include_line_numbers: false,
            include_base_css: true,
        }
    }
}

impl ExportOptions {
    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Enable or disable the line-number gutter.
    pub fn with_line_numbers(mut self, include: bool) -> Self {
        self.include_line_numbers = include;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ExportOptions::default();
        assert_eq!(options.title, "Rendered Lines");
        assert!(!options.include_line_numbers);
        assert!(options.include_base_css);
    }

    #[test]
    fn test_builder_methods() {
        let options = ExportOptions::default()
            .with_title("main.rs")
            .with_line_numbers(true);
        assert_eq!(options.title, "main.rs");
        assert!(options.include_line_numbers);
    }

    #[test]
    fn test_deserialize_partial() {
        let options: ExportOptions =
            serde_json::from_str(r#"{"include_line_numbers": true}"#).unwrap();
        assert!(options.include_line_numbers);
        assert_eq!(options.title, "Rendered Lines");
    }
}
