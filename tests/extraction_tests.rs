//! Extraction module tests
//!
//! These tests run realistic legal and auth page layouts through title and
//! content extraction.

use pretty_assertions::assert_eq;
use standardize_pages::error::ExtractionError;
use standardize_pages::extraction::{
    extract_title, ContentExtractor, Strategy, CONTAINER_OPEN_TAG, DEFAULT_TITLE,
};

const PRIVACY_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Privacy Policy</title>
</head>
<body>
    <nav class="bg-white shadow">
        <a href="/">Jeevan Chakra</a>
    </nav>

    <div class="container mx-auto px-4 py-12 max-w-4xl">
        <h1 class="text-4xl font-bold mb-8">Privacy Policy</h1>
        <section class="mb-8">
            <h2>1. Information We Collect</h2>
            <p>We collect information you provide directly.</p>
        </section>

        <div class="text-center mt-8">
            <a href="/" class="text-teal-600 hover:underline">&larr; Back to Home</a>
        </div>
    </div>

    <!-- Footer -->
    <footer class="bg-gray-900 text-white py-8">
        <p>&copy; 2025 Jeevan Chakra</p>
    </footer>
</body>
</html>"#;

const LOGIN_PAGE: &str = r#"<html>
<head><title>Login - Jeevan Chakra</title></head>
<body>
<nav><a href="/">Home</a></nav>

    <section class="min-h-screen flex items-center">
        <form id="login-form"><input type="email"></form>
    </section>

<footer><p>footer</p></footer>
</body>
</html>"#;

#[test]
fn test_privacy_page_title() {
    assert_eq!(extract_title(PRIVACY_PAGE), "Privacy Policy");
}

#[test]
fn test_privacy_page_content() {
    let fragment = ContentExtractor::extract(PRIVACY_PAGE).unwrap();

    assert_eq!(fragment.strategy, Strategy::Container);
    assert!(fragment.html.starts_with(CONTAINER_OPEN_TAG));
    assert!(fragment.html.ends_with("</div>"));
    assert!(fragment.html.contains("1. Information We Collect"));
    assert!(!fragment.html.contains("Back to Home"));
    assert!(!fragment.html.contains("<footer"));
    assert!(!fragment.html.contains("<!-- Footer -->"));
}

#[test]
fn test_privacy_page_content_outside_removed_block_is_unchanged() {
    let fragment = ContentExtractor::extract(PRIVACY_PAGE).unwrap();

    let start = PRIVACY_PAGE.find(CONTAINER_OPEN_TAG).unwrap();
    let end = PRIVACY_PAGE.find("\n\n    <!-- Footer -->").unwrap();
    let region = &PRIVACY_PAGE[start..end];

    let block_start = region.find(r#"<div class="text-center mt-8">"#).unwrap();
    let block_len = region[block_start..].find("</div>").unwrap() + "</div>".len();
    let expected = format!(
        "{}{}",
        &region[..block_start],
        &region[block_start + block_len..]
    );
    assert_eq!(fragment.html, expected);
}

#[test]
fn test_login_page_uses_fallback() {
    let fragment = ContentExtractor::extract(LOGIN_PAGE).unwrap();

    assert_eq!(fragment.strategy, Strategy::BetweenNavAndFooter);
    assert_eq!(
        fragment.html,
        "<section class=\"min-h-screen flex items-center\">\n        <form id=\"login-form\"><input type=\"email\"></form>\n    </section>"
    );
    assert_eq!(extract_title(LOGIN_PAGE), "Login - Jeevan Chakra");
}

#[test]
fn test_footer_tag_before_comment_wins() {
    let html = format!(
        "{CONTAINER_OPEN_TAG}<p>body</p></div>\n<footer>first</footer>\n<!-- Footer -->"
    );
    let fragment = ContentExtractor::extract(&html).unwrap();
    assert_eq!(fragment.html, format!("{CONTAINER_OPEN_TAG}<p>body</p></div>"));
}

#[test]
fn test_page_without_title_or_content() {
    let html = "<html><body><main><p>Orphan</p></main></body></html>";
    assert_eq!(extract_title(html), DEFAULT_TITLE);
    assert_eq!(
        ContentExtractor::extract(html).unwrap_err(),
        ExtractionError::NoContent
    );
}

#[test]
fn test_nav_without_footer_fails() {
    let html = "<nav></nav><p>no footer here</p>";
    assert!(ContentExtractor::extract(html).is_err());
}

#[test]
fn test_strategy_order() {
    assert_eq!(
        ContentExtractor::strategies(),
        &[Strategy::Container, Strategy::BetweenNavAndFooter]
    );
}
