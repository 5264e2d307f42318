//! Batch driver
//!
//! Reads each target page, extracts its title and content, renders the
//! standard shell and overwrites the page in place. Pages are processed one
//! at a time; an extraction failure only affects its own page, while a
//! filesystem error aborts the run.

use crate::config::BatchConfig;
use crate::error::{Error, ExtractionError, Result};
use crate::extraction::{extract_title, ContentExtractor, Strategy};
use crate::template::Template;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument, warn};

/// A page read from disk
#[derive(Debug, Clone)]
pub struct Document {
    /// Where the page lives
    pub path: PathBuf,
    /// Page text as read
    pub raw: String,
}

/// A page rendered into the standard shell
#[derive(Debug, Clone)]
pub struct Rewrite {
    /// Extracted title
    pub title: String,
    /// Strategy that located the content
    pub strategy: Strategy,
    /// Full rendered page
    pub html: String,
}

impl Document {
    /// Read a page from disk
    pub fn read(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let raw = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        Ok(Self { path, raw })
    }

    /// Render this page into `template`
    pub fn rewrite(&self, template: &Template) -> Result<Rewrite> {
        let title = extract_title(&self.raw);
        let fragment = ContentExtractor::extract(&self.raw)?;
        let html = template.render(&title, &fragment.html);
        Ok(Rewrite {
            title,
            strategy: fragment.strategy,
            html,
        })
    }
}

/// What happened to a single page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Page was rewritten
    Updated {
        /// Strategy that located the content
        strategy: Strategy,
    },
    /// Page does not exist
    Skipped,
    /// No content could be extracted; page left untouched
    Failed(ExtractionError),
}

/// Per-page outcomes of a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Outcomes in processing order
    pub outcomes: Vec<(PathBuf, FileOutcome)>,
}

impl BatchReport {
    /// Number of rewritten pages
    pub fn updated(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Updated { .. }))
    }

    /// Number of pages whose content could not be extracted
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed(_)))
    }

    /// Number of missing pages
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Skipped))
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| pred(o)).count()
    }
}

/// Standardize a single page in place
#[instrument(skip_all, fields(path = %path.display()))]
pub fn standardize_file(path: &Path, template: &Template) -> Result<FileOutcome> {
    if !path.exists() {
        debug!("{} does not exist, skipping", path.display());
        return Ok(FileOutcome::Skipped);
    }

    info!("Processing {}...", path.display());
    let document = Document::read(path)?;

    let rewrite = document.rewrite(template);
    if !matches!(&rewrite, Ok(r) if r.strategy == Strategy::Container) {
        warn!(
            "Strict container match failed for {}, trying fallback...",
            path.display()
        );
    }

    match rewrite {
        Err(Error::Extraction(e)) => {
            error!("Could not extract content for {}: {}", path.display(), e);
            Ok(FileOutcome::Failed(e))
        }
        Err(e) => Err(e),
        Ok(rewrite) => {
            std::fs::write(path, &rewrite.html).map_err(|e| Error::io(path, e))?;
            info!("Updated {} ({})", path.display(), rewrite.strategy);
            Ok(FileOutcome::Updated {
                strategy: rewrite.strategy,
            })
        }
    }
}

/// Standardize every page selected by `config`
pub fn run(config: &BatchConfig, template: &Template) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for path in config.targets()? {
        let outcome = standardize_file(&path, template)?;
        report.outcomes.push((path, outcome));
    }

    info!(
        "Done: {} updated, {} failed, {} skipped",
        report.updated(),
        report.failed(),
        report.skipped()
    );
    Ok(report)
}
