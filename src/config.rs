//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for folio.
#[derive(Debug, Clone, Parser)]
#[command(name = "folio", version, about, long_about = None)]
pub struct Config {
    /// Content directory with one markdown file per section
    #[arg(default_value = ".")]
    pub content: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site title (defaults to the content directory name)
    #[arg(long)]
    pub title: Option<String>,

    /// Path of the wasm-bindgen JavaScript glue, relative to index.html
    #[arg(long)]
    pub script: Option<String>,

    /// Do not open the generated page in a browser
    #[arg(long)]
    pub no_open: bool,

    /// Log progress (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if content path does not exist or is not a directory.
    pub fn validate(&self) -> Result<()> {
        if !self.content.exists() {
            bail!("Content path does not exist: {}", self.content.display());
        }
        if !self.content.is_dir() {
            bail!("Content path is not a directory: {}", self.content.display());
        }

        Ok(())
    }

    /// Returns site title from configuration or content directory.
    ///
    /// # Errors
    ///
    /// Returns error if content path has no name component or contains invalid UTF8.
    pub fn site_title(&self) -> Result<String> {
        if let Some(title) = &self.title {
            return Ok(title.clone());
        }

        let path = self
            .content
            .canonicalize()
            .unwrap_or_else(|_| self.content.clone());

        path.file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Cannot extract site title from path: {}", path.display()))
            .map(String::from)
    }
}
