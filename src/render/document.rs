//! Rendering of whole tokenized documents
//!
//! The view layer hands over one entry per visible line. Each line is
//! rendered independently with the same [`RenderOptions`].

use crate::error::{Error, Result};
use crate::render::{render_line, LineToken, RenderLineInput, RenderLineOutput, RenderOptions};
use log::debug;
use serde::{Deserialize, Serialize};

/// One line of text with its tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenizedLine {
    pub content: String,
    #[serde(default)]
    pub tokens: Vec<LineToken>,
}

impl TokenizedLine {
    pub fn new(content: impl Into<String>, tokens: Vec<LineToken>) -> Self {
        Self {
            content: content.into(),
            tokens,
        }
    }
}

/// A list of tokenized lines, as read from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenizedDocument {
    #[serde(default)]
    pub lines: Vec<TokenizedLine>,
}

impl TokenizedDocument {
    /// Parse a document from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::DocumentParse {
            message: e.to_string(),
            source: Some(Box::new(e)),
        })
    }
}

/// Render every line of `document`.
///
/// # Errors
///
/// Stops at the first line that cannot be rendered and returns
/// [`Error::Line`] carrying its 1-based line number.
pub fn render_document(
    document: &TokenizedDocument,
    options: &RenderOptions,
) -> Result<Vec<RenderLineOutput>> {
    debug!(
        "Rendering {} lines (tab size {}, limit {:?}, whitespace {})",
        document.lines.len(),
        options.tab_size,
        options.stop_rendering_line_after,
        options.render_whitespace
    );

    document
        .lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let input = RenderLineInput::new(line.content.as_str(), line.tokens.clone(), options);
            render_line(&input).map_err(|e| Error::Line {
                line_number: index + 1,
                source: Box::new(e),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let json = r#"{
            "lines": [
                {"content": "fn main() {", "tokens": [
                    {"start_index": 0, "token_type": "keyword"},
                    {"start_index": 2, "token_type": "text"}
                ]},
                {"content": ""}
            ]
        }"#;
        let document = TokenizedDocument::from_json(json).unwrap();
        assert_eq!(document.lines.len(), 2);
        assert_eq!(document.lines[0].tokens[1], LineToken::new(2, "text"));
        assert!(document.lines[1].tokens.is_empty());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = TokenizedDocument::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::DocumentParse { .. }));
    }

    #[test]
    fn test_render_document() {
        let document = TokenizedDocument {
            lines: vec![
                TokenizedLine::new("a\tb", vec![LineToken::new(0, "text")]),
                TokenizedLine::new("", Vec::new()),
                TokenizedLine::new("x", vec![LineToken::new(0, "text")]),
            ],
        };
        let rendered = render_document(&document, &RenderOptions::default()).unwrap();

        assert_eq!(rendered.len(), 3);
        assert_eq!(rendered[0].char_offset_in_part, vec![0, 1, 4, 5]);
        assert_eq!(rendered[1].markup(), "<span><span>&nbsp;</span></span>");
        assert_eq!(
            rendered[2].markup(),
            "<span><span class=\"token text\">x</span></span>"
        );
    }

    #[test]
    fn test_render_document_reports_line_number() {
        let document = TokenizedDocument {
            lines: vec![
                TokenizedLine::new("ok", vec![LineToken::new(0, "text")]),
                TokenizedLine::new("missing tokens", Vec::new()),
            ],
        };
        let err = render_document(&document, &RenderOptions::default()).unwrap_err();
        match err {
            Error::Line {
                line_number,
                source,
            } => {
                assert_eq!(line_number, 2);
                assert!(matches!(*source, Error::InvalidInput { line_length: 14 }));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_render_document_applies_options() {
        let document = TokenizedDocument {
            lines: vec![TokenizedLine::new(
                "abcdef",
                vec![LineToken::new(0, "text")],
            )],
        };
        let options = RenderOptions {
            stop_rendering_line_after: Some(3),
            ..RenderOptions::default()
        };
        let rendered = render_document(&document, &options).unwrap();
        assert!(rendered[0].is_truncated());
    }
}
