//! Batch configuration
//!
//! Which pages get standardized. The defaults reproduce the site layout:
//! every `.html` page in `legal/` plus the login and signup pages.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default directory holding legal pages, relative to the root
pub const DEFAULT_LEGAL_DIR: &str = "legal";

/// Default auth pages, relative to the root
pub const DEFAULT_AUTH_FILES: [&str; 2] = [
    "components/auth/login.html",
    "components/auth/signup.html",
];

/// Extension of pages picked up from the legal directory
const PAGE_EXTENSION: &str = ".html";

/// Target selection for a batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Site root that relative paths resolve against
    pub root: PathBuf,
    /// Directory scanned (non-recursively) for `.html` pages
    pub legal_dir: PathBuf,
    /// Individually named pages
    pub auth_files: Vec<PathBuf>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            legal_dir: PathBuf::from(DEFAULT_LEGAL_DIR),
            auth_files: DEFAULT_AUTH_FILES.iter().map(PathBuf::from).collect(),
        }
    }
}

impl BatchConfig {
    /// Configuration with the default targets under `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Resolve a configured path against the root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    /// Every page to process, in processing order.
    ///
    /// Legal pages come first, sorted by path, followed by the auth files in
    /// configured order. Auth files are listed whether or not they exist.
    pub fn targets(&self) -> Result<Vec<PathBuf>> {
        let mut targets = self.legal_pages()?;
        targets.extend(self.auth_files.iter().map(|p| self.resolve(p)));
        Ok(targets)
    }

    fn legal_pages(&self) -> Result<Vec<PathBuf>> {
        let dir = self.resolve(&self.legal_dir);
        if !dir.is_dir() {
            debug!("Legal directory {} not found, skipping", dir.display());
            return Ok(Vec::new());
        }

        let mut pages = Vec::new();
        for entry in std::fs::read_dir(&dir).map_err(|e| Error::io(&dir, e))? {
            let entry = entry.map_err(|e| Error::io(&dir, e))?;
            let path = entry.path();
            let is_page = entry.file_name().to_string_lossy().ends_with(PAGE_EXTENSION);
            if is_page && path.is_file() {
                pages.push(path);
            }
        }
        pages.sort();
        Ok(pages)
    }
}
