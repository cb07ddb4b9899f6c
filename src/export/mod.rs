//! Document Export Module for viewline
//!
//! This module exports rendered lines as standalone HTML.
//!
//! # Architecture
//!
//! - `options.rs` - Export configuration
//! - `html.rs` - HTML document generation

pub mod html;
pub mod options;

pub use html::{export_to_html_file, generate_html_document, generate_html_fragment, html_escape};
pub use options::ExportOptions;
