//! Single-line renderer
//!
//! Turns one line of text and its tokens into markup fragments, plus a table
//! mapping every source character to its offset inside the rendered text of
//! the token that contains it.
//!
//! Columns, token offsets and the offset table all count UTF-16 code units,
//! one unit at a time. A character outside the BMP therefore occupies two
//! table entries even though it is emitted as a single fragment.

use crate::error::{Error, Result};
use crate::render::LineToken;
use log::{trace, warn};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// ─────────────────────────────────────────────────────────────────────────────
// Markup Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Markup for a line with no characters; keeps the line hit-testable.
const EMPTY_LINE_MARKUP: &str = "<span><span>&nbsp;</span></span>";

const LINE_OPEN: &str = "<span>";
const LINE_CLOSE: &str = "</span>";
const PART_CLOSE: &str = "</span>";

/// Ellipsis followed by the closing of the open token span and the line.
const TRUNCATED_TAIL: &str = "&hellip;</span></span>";

const NBSP: &str = "&nbsp;";
const VISIBLE_TAB: &str = "&rarr;";
const VISIBLE_SPACE: &str = "&middot;";
const REPLACEMENT: &str = "\u{fffd}";

// ─────────────────────────────────────────────────────────────────────────────
// Input / Output
// ─────────────────────────────────────────────────────────────────────────────

/// The knobs that shape how every line of a view is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Columns between tab stops
    pub tab_size: usize,
    /// 1-based character count after which a line is cut off with an
    /// ellipsis; `None` renders the whole line
    pub stop_rendering_line_after: Option<usize>,
    /// Whether whitespace tokens get visible glyphs
    pub render_whitespace: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tab_size: 4,
            stop_rendering_line_after: None,
            render_whitespace: false,
        }
    }
}

/// Everything needed to render one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderLineInput {
    pub line_content: String,
    pub tab_size: usize,
    pub stop_rendering_line_after: Option<usize>,
    pub render_whitespace: bool,
    /// Tokens ordered by strictly increasing `start_index`, first at 0
    pub parts: Vec<LineToken>,
}

impl RenderLineInput {
    /// Build an input for `line_content` using view-wide `options`.
    pub fn new(
        line_content: impl Into<String>,
        parts: Vec<LineToken>,
        options: &RenderOptions,
    ) -> Self {
        Self {
            line_content: line_content.into(),
            tab_size: options.tab_size,
            stop_rendering_line_after: options.stop_rendering_line_after,
            render_whitespace: options.render_whitespace,
            parts,
        }
    }
}

/// The rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderLineOutput {
    /// For each rendered source index, its offset within the rendered text
    /// of its token. Untruncated lines carry one extra end-of-line entry;
    /// truncated lines have their last entry bumped by one for the ellipsis.
    pub char_offset_in_part: Vec<usize>,
    /// Markup fragments; concatenate them for the final markup
    pub output: Vec<Cow<'static, str>>,
    /// Index of the last token whose content was emitted
    pub last_rendered_part_index: usize,
}

impl RenderLineOutput {
    /// The full markup string.
    pub fn markup(&self) -> String {
        self.output.concat()
    }

    /// Whether the line was cut off before its end.
    pub fn is_truncated(&self) -> bool {
        self.output
            .last()
            .is_some_and(|fragment| fragment == TRUNCATED_TAIL)
    }

    fn empty_line() -> Self {
        Self {
            char_offset_in_part: Vec::new(),
            output: vec![Cow::Borrowed(EMPTY_LINE_MARKUP)],
            last_rendered_part_index: 0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rendering
// ─────────────────────────────────────────────────────────────────────────────

/// One UTF-16 code unit of the line.
#[derive(Debug, Clone, Copy)]
enum CodeUnit {
    /// A BMP character
    Char(char),
    /// Leading half of a surrogate pair, carrying the whole character
    Lead(char),
    /// Trailing half of a surrogate pair
    Trail,
}

fn code_units(text: &str) -> Vec<CodeUnit> {
    let mut units = Vec::with_capacity(text.len());
    for ch in text.chars() {
        if ch.len_utf16() == 2 {
            units.push(CodeUnit::Lead(ch));
            units.push(CodeUnit::Trail);
        } else {
            units.push(CodeUnit::Char(ch));
        }
    }
    units
}

/// Render a single line.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] when the line has content but no tokens.
pub fn render_line(input: &RenderLineInput) -> Result<RenderLineOutput> {
    let line = code_units(&input.line_content);
    let line_length = line.len();

    if line_length == 0 {
        return Ok(RenderLineOutput::empty_line());
    }

    let parts = &input.parts;
    if parts.is_empty() {
        return Err(Error::InvalidInput { line_length });
    }

    let tab_size = if input.tab_size == 0 {
        warn!("Tab size of 0 is not valid, rendering with tab size 1");
        1
    } else {
        input.tab_size
    };

    let char_break_index = match input.stop_rendering_line_after {
        Some(limit) => limit.saturating_sub(1),
        None => line_length,
    };

    let mut char_offset_in_part_arr = Vec::with_capacity(line_length + 1);
    let mut out: Vec<Cow<'static, str>> = Vec::with_capacity(line_length + 2 * parts.len() + 2);
    out.push(Cow::Borrowed(LINE_OPEN));

    let mut tabs_char_delta = 0;
    let mut char_offset_in_part = 0;
    let mut char_index = 0;
    // Whether the last surrogate pair fit in one token and was emitted whole.
    let mut pair_emitted = false;

    for (part_index, part) in parts.iter().enumerate() {
        let part_end = parts
            .get(part_index + 1)
            .map_or(line_length, |next| next.start_index.min(line_length));
        let is_whitespace = input.render_whitespace && part.is_whitespace();

        char_offset_in_part = 0;
        out.push(Cow::Owned(format!(
            "<span class=\"token {}\">",
            part.css_class()
        )));

        while char_index < part_end {
            char_offset_in_part_arr.push(char_offset_in_part);

            match line[char_index] {
                CodeUnit::Char('\t') => {
                    let insert_spaces_count = tab_size - (char_index + tabs_char_delta) % tab_size;
                    tabs_char_delta += insert_spaces_count - 1;
                    char_offset_in_part += insert_spaces_count - 1;

                    out.push(Cow::Borrowed(if is_whitespace { VISIBLE_TAB } else { NBSP }));
                    out.extend((1..insert_spaces_count).map(|_| Cow::Borrowed(NBSP)));
                }
                CodeUnit::Char(' ') => {
                    out.push(Cow::Borrowed(if is_whitespace { VISIBLE_SPACE } else { NBSP }));
                }
                CodeUnit::Char('<') => out.push(Cow::Borrowed("&lt;")),
                CodeUnit::Char('>') => out.push(Cow::Borrowed("&gt;")),
                CodeUnit::Char('&') => out.push(Cow::Borrowed("&amp;")),
                CodeUnit::Char('\0') => out.push(Cow::Borrowed("&#00;")),
                CodeUnit::Char('\u{feff}') | CodeUnit::Char('\u{2028}') => {
                    out.push(Cow::Borrowed(REPLACEMENT));
                }
                CodeUnit::Char('\r') => out.push(Cow::Borrowed("&#8203;")),
                CodeUnit::Char(ch) => out.push(Cow::Owned(ch.to_string())),
                CodeUnit::Lead(ch) => {
                    pair_emitted = char_index + 1 < part_end && char_index < char_break_index;
                    if pair_emitted {
                        out.push(Cow::Owned(ch.to_string()));
                    } else {
                        out.push(Cow::Borrowed(REPLACEMENT));
                    }
                }
                CodeUnit::Trail => {
                    if !pair_emitted {
                        out.push(Cow::Borrowed(REPLACEMENT));
                    }
                }
            }

            char_offset_in_part += 1;

            if char_index >= char_break_index {
                out.push(Cow::Borrowed(TRUNCATED_TAIL));
                // Only the last entry moves; if this was the first character
                // of its token, its before and after offsets collapse into one.
                if let Some(last) = char_offset_in_part_arr.last_mut() {
                    *last += 1;
                }
                trace!(
                    "Line truncated at character {} of {} (part {})",
                    char_index + 1,
                    line_length,
                    part_index
                );
                return Ok(RenderLineOutput {
                    char_offset_in_part: char_offset_in_part_arr,
                    output: out,
                    last_rendered_part_index: part_index,
                });
            }

            char_index += 1;
        }

        out.push(Cow::Borrowed(PART_CLOSE));
    }

    out.push(Cow::Borrowed(LINE_CLOSE));

    // End-of-line position for hit testing.
    char_offset_in_part_arr.push(char_offset_in_part);

    Ok(RenderLineOutput {
        char_offset_in_part: char_offset_in_part_arr,
        output: out,
        last_rendered_part_index: parts.len() - 1,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
