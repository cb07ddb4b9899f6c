//! User settings for viewline
//!
//! This module defines the `Settings` struct that holds all user-configurable
//! rendering and export options, with serde support for JSON persistence.

use crate::export::ExportOptions;
use crate::render::RenderOptions;
use serde::{Deserialize, Serialize};

/// Truncation limit used when no configuration says otherwise.
pub const DEFAULT_STOP_RENDERING_LINE_AFTER: usize = 10_000;

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// User preferences.
///
/// This struct is serialized to JSON and persisted to the user's config directory.
/// All fields have sensible defaults via the `Default` trait and `#[serde(default)]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────
    /// Columns between tab stops
    pub tab_size: u8,

    /// Whether whitespace tokens are drawn with visible glyphs
    pub render_whitespace: bool,

    /// Characters rendered per line before cutting off with an ellipsis
    /// (`null` for no limit)
    pub stop_rendering_line_after: Option<usize>,

    // ─────────────────────────────────────────────────────────────────────────
    // Export
    // ─────────────────────────────────────────────────────────────────────────
    /// HTML export options
    pub export: ExportOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tab_size: 4,
            render_whitespace: false,
            stop_rendering_line_after: Some(DEFAULT_STOP_RENDERING_LINE_AFTER),
            export: ExportOptions::default(),
        }
    }
}

impl Settings {
    /// Minimum allowed tab size.
    pub const MIN_TAB_SIZE: u8 = 1;
    /// Maximum allowed tab size.
    pub const MAX_TAB_SIZE: u8 = 16;

    /// Sanitize settings by clamping values to valid ranges.
    ///
    /// This is useful after loading settings from a file that might have
    /// been manually edited with invalid values.
    pub fn sanitize(&mut self) {
        self.tab_size = self.tab_size.clamp(Self::MIN_TAB_SIZE, Self::MAX_TAB_SIZE);

        let title = self.export.title.trim();
        if title.is_empty() {
            self.export.title = ExportOptions::default().title;
        } else if title.len() != self.export.title.len() {
            self.export.title = title.to_string();
        }
    }

    /// Load settings and sanitize them to ensure validity.
    pub fn from_json_sanitized(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// The renderer options these settings describe.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            tab_size: usize::from(self.tab_size.max(Self::MIN_TAB_SIZE)),
            stop_rendering_line_after: self.stop_rendering_line_after,
            render_whitespace: self.render_whitespace,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
