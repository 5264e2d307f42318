//! Standard page shell and placeholder rendering

use crate::error::{Error, Result, TemplateError};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::path::Path;
use std::sync::LazyLock;

/// Placeholder for the page title
pub const TITLE_PLACEHOLDER: &str = "{title}";

/// Placeholder for the main content fragment
pub const CONTENT_PLACEHOLDER: &str = "{content}";

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(title|content)\}").expect("PLACEHOLDER_RE should compile")
});

/// Shell every standardized page is rewritten into
pub const STANDARD_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="description" content="Jeevan Chakra - Life Infrastructure">

    <!-- Favicon -->
    <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><circle cx='50' cy='50' r='40' fill='%230F4C5C'/><circle cx='50' cy='50' r='25' fill='none' stroke='%231B9C85' stroke-width='3'/><circle cx='50' cy='20' r='4' fill='%23F4A261'/></svg>">

    <!-- Fonts -->
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700;800&display=swap" rel="stylesheet">

    <!-- Tailwind -->
    <script src="https://cdn.tailwindcss.com"></script>
    <script src="/tailwind-config.js"></script>

    <!-- Global Styles & Loader -->
    <link rel="stylesheet" href="/styles.css">
    <script src="/scripts/header-footer-loader.js" defer></script>

    <style>
        body {
            font-family: 'Inter', sans-serif;
            padding-top: 80px;
            background-color: #f9fafb;
        }
    </style>
</head>

<body class="bg-gray-50 text-gray-900 font-sans antialiased min-h-screen flex flex-col">

    <!-- HEADER PLACEHOLDER -->
    <div id="header-placeholder"></div>

    <!-- MAIN CONTENT -->
    <main class="flex-grow">
        {content}
    </main>

    <!-- FOOTER PLACEHOLDER -->
    <div id="footer-placeholder"></div>

</body>
</html>"#;

/// A page shell with exactly one title and one content placeholder
#[derive(Debug, Clone)]
pub struct Template {
    source: Cow<'static, str>,
}

impl Template {
    /// Build a template, checking that each placeholder appears exactly once
    pub fn new(source: impl Into<Cow<'static, str>>) -> std::result::Result<Self, TemplateError> {
        let source = source.into();
        for name in [TITLE_PLACEHOLDER, CONTENT_PLACEHOLDER] {
            let count = source.matches(name).count();
            if count != 1 {
                return Err(TemplateError::Placeholder { name, count });
            }
        }
        Ok(Self { source })
    }

    /// Load a custom shell from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::new(source)?)
    }

    /// The built-in shell for legal and auth pages
    pub fn standard() -> Self {
        Self {
            source: Cow::Borrowed(STANDARD_SHELL),
        }
    }

    /// Raw template text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Fill both placeholders in a single pass over the template.
    ///
    /// Substituted values are never scanned again, so a title or fragment
    /// containing `{title}` or `{content}` is emitted literally.
    pub fn render(&self, title: &str, content: &str) -> String {
        PLACEHOLDER_RE
            .replace_all(&self.source, |caps: &Captures<'_>| match &caps[1] {
                "title" => title,
                _ => content,
            })
            .into_owned()
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::standard()
    }
}
