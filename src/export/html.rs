//! HTML Export Generation
//!
//! This module wraps rendered lines into a complete HTML document with an
//! inlined base stylesheet for standalone viewing.

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::export::ExportOptions;
use crate::render::{render_document, RenderLineOutput, TokenizedDocument};
use log::{debug, info};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

// ─────────────────────────────────────────────────────────────────────────────
// HTML Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a complete HTML document from rendered lines.
pub fn generate_html_document(lines: &[RenderLineOutput], options: &ExportOptions) -> String {
    let body = generate_html_fragment(lines, options.include_line_numbers);
    let css = if options.include_base_css { BASE_CSS } else { "" };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="generator" content="viewline">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <div class="view-lines">
{body}
    </div>
</body>
</html>"#,
        title = html_escape(&options.title),
        css = css,
        body = body,
    )
}

/// Generate only the line markup, one `view-line` div per line.
pub fn generate_html_fragment(lines: &[RenderLineOutput], include_line_numbers: bool) -> String {
    let mut html = String::new();
    for (index, line) in lines.iter().enumerate() {
        html.push_str("<div class=\"view-line\">");
        if include_line_numbers {
            // Writing into a String cannot fail.
            let _ = write!(html, "<span class=\"line-number\">{}</span>", index + 1);
        }
        for fragment in &line.output {
            html.push_str(fragment);
        }
        html.push_str("</div>\n");
    }
    html
}

/// Render a tokenized JSON document and write it out as an HTML file.
///
/// Rendering and export options come from `settings`; the output title falls
/// back to the source file name when the configured title is the default.
pub fn export_to_html_file(source_path: &Path, output_path: &Path, settings: &Settings) -> Result<()> {
    debug!("Exporting {} to {}", source_path.display(), output_path.display());

    let json = fs::read_to_string(source_path)?;
    let document = TokenizedDocument::from_json(&json)?;
    let lines = render_document(&document, &settings.render_options())?;

    let mut options = settings.export.clone();
    if options.title == ExportOptions::default().title {
        if let Some(name) = source_path.file_name().and_then(|s| s.to_str()) {
            options.title = name.to_string();
        }
    }

    let html = generate_html_document(&lines, &options);
    fs::write(output_path, html).map_err(|e| Error::FileWrite {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    info!(
        "Exported {} lines to {}",
        lines.len(),
        output_path.display()
    );
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// CSS
// ─────────────────────────────────────────────────────────────────────────────

/// Base CSS for rendered lines (layout and whitespace glyphs).
const BASE_CSS: &str = r#"
body {
    margin: 0;
    padding: 16px;
    font-family: 'JetBrains Mono', 'Fira Code', 'Consolas', 'Monaco', monospace;
    font-size: 14px;
}

.view-line {
    white-space: pre;
    line-height: 1.5;
}

.view-line .line-number {
    display: inline-block;
    min-width: 3em;
    margin-right: 1em;
    text-align: right;
    opacity: 0.5;
    user-select: none;
}

.view-line .token.whitespace {
    opacity: 0.4;
}
"#;

// ─────────────────────────────────────────────────────────────────────────────
// Utility Functions
// ─────────────────────────────────────────────────────────────────────────────

/// HTML-escape a string.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
