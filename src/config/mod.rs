//! Configuration module for viewline
//!
//! This module handles user preferences for rendering and export,
//! including serialization/deserialization to/from JSON and
//! persistent storage to platform-specific directories.

mod persistence;
mod settings;

pub use persistence::*;
pub use settings::*;
