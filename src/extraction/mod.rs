//! Content extraction module
//!
//! This module pulls the title and the main content region out of a
//! legal or auth page so it can be re-wrapped in the standard shell.

pub mod content;
pub mod title;

pub use content::{ContentExtractor, ContentFragment, Strategy, CONTAINER_OPEN_TAG};
pub use title::{extract_title, DEFAULT_TITLE};
