//! viewline - tokenized line rendering
//!
//! Renders a line of text and its style tokens into span markup, expanding
//! tabs to tab stops, escaping markup characters, optionally truncating long
//! lines, and recording an offset table for mapping clicks back to source
//! characters.
//!
//! ```
//! use viewline::render::{render_line, LineToken, RenderLineInput, RenderOptions};
//!
//! let input = RenderLineInput::new(
//!     "a\tb",
//!     vec![LineToken::new(0, "text")],
//!     &RenderOptions::default(),
//! );
//! let output = render_line(&input).unwrap();
//! assert_eq!(output.char_offset_in_part, vec![0, 1, 4, 5]);
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod render;

pub use error::{Error, Result};
