//! standardize-pages - rewrite legal and auth pages into the standard shell
//!
//! Each page has its `<title>` and main content region extracted, then both
//! are spliced into a shared page template (common `<head>`, header and
//! footer placeholders) and the page is overwritten in place.
//!
//! # Architecture
//!
//! ```text
//! BatchConfig ──▶ targets ──▶ Document::read
//!                                  │
//!                                  ▼
//!                  ┌──────────────────────────────┐
//!                  │ extract_title                │
//!                  │ ContentExtractor::extract    │
//!                  │   Container                  │
//!                  │   BetweenNavAndFooter        │
//!                  └──────────────┬───────────────┘
//!                                 ▼
//!                       Template::render ──▶ write
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use standardize_pages::extraction::{extract_title, ContentExtractor};
//! use standardize_pages::template::Template;
//!
//! let page = r#"<title>Terms</title><nav></nav><p>Rules</p><footer></footer>"#;
//! let title = extract_title(page);
//! let fragment = ContentExtractor::extract(page).unwrap();
//! let html = Template::standard().render(&title, &fragment.html);
//! assert!(html.contains("<title>Terms</title>"));
//! assert!(html.contains("<p>Rules</p>"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod batch;
pub mod config;
pub mod error;
pub mod extraction;
pub mod template;

// Re-exports for convenience
pub use batch::{run, standardize_file, BatchReport, Document, FileOutcome};
pub use config::BatchConfig;
pub use error::{Error, Result};
pub use extraction::{extract_title, ContentExtractor, ContentFragment, Strategy};
pub use template::Template;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
