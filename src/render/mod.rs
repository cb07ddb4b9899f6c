//! Line rendering for viewline
//!
//! This module converts tokenized lines of text into span markup and keeps
//! enough bookkeeping to map rendered positions back to source characters.
//!
//! # Architecture
//!
//! - `token.rs` - Token type and type-label classification
//! - `line.rs` - The single-line renderer
//! - `hit_test.rs` - Rendered position ↔ source index lookups
//! - `document.rs` - Rendering of many lines at once

mod document;
mod line;
mod token;

pub use document::{render_document, TokenizedDocument, TokenizedLine};
pub use hit_test::LineHitTest;
pub use line::{render_line, RenderLineInput, RenderLineOutput, RenderOptions};
pub use token::LineToken;
