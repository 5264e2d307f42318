//! standardize-pages
//!
//! Rewrites the site's legal and auth pages into the standard page shell.

use anyhow::Context;
use clap::Parser;
use standardize_pages::config::{DEFAULT_AUTH_FILES, DEFAULT_LEGAL_DIR};
use standardize_pages::{BatchConfig, Template};
use std::path::PathBuf;

/// Rewrite legal and auth pages into the standard page shell
#[derive(Parser, Debug)]
#[command(name = "standardize-pages")]
#[command(version)]
#[command(about = "Rewrite legal and auth pages into the standard page shell")]
struct Args {
    /// Site root that the other paths are relative to
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Directory whose .html pages are standardized
    #[arg(long, default_value = DEFAULT_LEGAL_DIR)]
    legal_dir: PathBuf,

    /// Individual page to standardize (repeatable)
    #[arg(long = "auth-file", default_values_t = DEFAULT_AUTH_FILES.map(String::from))]
    auth_files: Vec<String>,

    /// Page shell to use instead of the built-in one
    #[arg(long)]
    template: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<Args> for BatchConfig {
    fn from(args: Args) -> Self {
        BatchConfig {
            root: args.root,
            legal_dir: args.legal_dir,
            auth_files: args.auth_files.into_iter().map(PathBuf::from).collect(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let template = match &args.template {
        Some(path) => Template::from_file(path)
            .with_context(|| format!("loading template {}", path.display()))?,
        None => Template::standard(),
    };

    let config = BatchConfig::from(args);
    tracing::debug!("Running with {:?}", config);

    standardize_pages::run(&config, &template)
        .with_context(|| format!("standardizing pages under {}", config.root.display()))?;

    Ok(())
}
