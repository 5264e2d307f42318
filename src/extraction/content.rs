//! Main content extraction
//!
//! The content region of a page is located by an ordered list of
//! [`Strategy`] variants. The first strategy that matches wins; the
//! remaining ones are never consulted.

use crate::error::ExtractionError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use tracing::{debug, instrument};

/// Opening tag of the wrapper that holds a legal/auth page's content
pub const CONTAINER_OPEN_TAG: &str = r#"<div class="container mx-auto px-4 py-12 max-w-4xl">"#;

// The fragment stops before the whitespace that precedes the footer marker.
static CONTAINER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?s)({}.*?)\s*(?:<!-- Footer -->|<footer)",
        regex::escape(CONTAINER_OPEN_TAG)
    ))
    .expect("CONTAINER_RE should compile")
});

static NAV_FOOTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)</nav>(.*?)<footer").expect("NAV_FOOTER_RE should compile")
});

static BACK_TO_HOME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<div class="text-center mt-8">.*?Back to Home.*?</div>"#)
        .expect("BACK_TO_HOME_RE should compile")
});

/// A way of locating the content region of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Exact container opening tag up to the first footer marker
    Container,
    /// Everything between the first `</nav>` and the next `<footer`
    BetweenNavAndFooter,
}

impl Strategy {
    /// Try to locate the content region in `html`
    pub fn attempt(&self, html: &str) -> Option<String> {
        match self {
            Strategy::Container => CONTAINER_RE
                .captures(html)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string()),
            Strategy::BetweenNavAndFooter => NAV_FOOTER_RE
                .captures(html)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().trim().to_string()),
        }
    }

    /// Whether the fragment comes from the page's container wrapper
    pub fn is_container(&self) -> bool {
        matches!(self, Strategy::Container)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Container => "container",
            Strategy::BetweenNavAndFooter => "nav/footer fallback",
        };
        f.write_str(name)
    }
}

/// Extracted content region of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFragment {
    /// HTML of the content region
    pub html: String,
    /// Strategy that located it
    pub strategy: Strategy,
}

/// Content extraction functionality
pub struct ContentExtractor;

impl ContentExtractor {
    /// Strategies in priority order
    pub fn strategies() -> &'static [Strategy] {
        &[Strategy::Container, Strategy::BetweenNavAndFooter]
    }

    /// Extract the main content fragment from a page
    #[instrument(skip(html), fields(len = html.len()))]
    pub fn extract(html: &str) -> Result<ContentFragment, ExtractionError> {
        for &strategy in Self::strategies() {
            let Some(found) = strategy.attempt(html) else {
                debug!("Strategy '{}' found nothing", strategy);
                continue;
            };

            let cleaned = if strategy.is_container() {
                Self::strip_back_to_home(&found)
            } else {
                found
            };

            debug!("Strategy '{}' matched {} bytes", strategy, cleaned.len());
            return Ok(ContentFragment {
                html: cleaned,
                strategy,
            });
        }

        Err(ExtractionError::NoContent)
    }

    /// Remove "Back to Home" link blocks, leaving every other byte in place
    pub fn strip_back_to_home(fragment: &str) -> String {
        BACK_TO_HOME_RE.replace_all(fragment, "").into_owned()
    }
}
