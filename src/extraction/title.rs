//! Page title extraction

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Title used when a page has no `<title>` element
pub const DEFAULT_TITLE: &str = "Jeevan Chakra";

// Single line, case-sensitive, first occurrence.
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<title>(.*?)</title>").expect("TITLE_RE should compile"));

/// Return the inner text of the first `<title>` pair, or [`DEFAULT_TITLE`].
pub fn extract_title(html: &str) -> String {
    match TITLE_RE.captures(html).and_then(|c| c.get(1)) {
        Some(m) => m.as_str().to_string(),
        None => {
            debug!("No <title> found, using default");
            DEFAULT_TITLE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_title_wins() {
        let html = "<head><title>Privacy Policy</title></head><svg><title>Icon</title></svg>";
        assert_eq!(extract_title(html), "Privacy Policy");
    }

    #[test]
    fn test_missing_title_uses_default() {
        assert_eq!(extract_title("<html><body>hi</body></html>"), DEFAULT_TITLE);
    }

    #[test]
    fn test_title_is_case_sensitive() {
        assert_eq!(extract_title("<TITLE>Shout</TITLE>"), DEFAULT_TITLE);
    }

    #[test]
    fn test_title_does_not_span_lines() {
        assert_eq!(extract_title("<title>Terms\nof Service</title>"), DEFAULT_TITLE);
    }

    #[test]
    fn test_empty_title() {
        assert_eq!(extract_title("<title></title>"), "");
    }
}
