//! Shared test utilities for integration tests.
//!
//! Provides helpers for building temporary content directories with
//! section markdown files and palette entries.

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Creates temporary content directory with three sections.
///
/// Files are named so sort order differs from heading order, and one
/// section has no heading to exercise the file stem fallback.
///
/// # Returns
///
/// Temporary directory holding the markdown files
///
/// # Errors
///
/// Returns error if directory creation or file writes fail
pub fn create_content_dir() -> Result<TempDir> {
    let dir = TempDir::new()?;

    write_section(
        dir.path(),
        "01-about.md",
        "# About\n\nI build [tools](https://example.com) & *things*.",
    )?;
    write_section(
        dir.path(),
        "02-projects.md",
        "## Projects\n\n```\nfn main() {}\n```\n\n### Folio\nStatic <site> builder",
    )?;
    write_section(dir.path(), "03-notes.md", "plain text only")?;

    Ok(dir)
}

/// Writes one markdown file into a content directory.
///
/// # Arguments
///
/// * `dir`: Content directory
/// * `name`: File name including extension
/// * `markdown`: File contents
///
/// # Errors
///
/// Returns error if the file cannot be written
pub fn write_section(dir: &Path, name: &str, markdown: &str) -> Result<()> {
    fs::write(dir.join(name), markdown)?;
    Ok(())
}

/// Writes `palette.json` with the given JSON text.
pub fn write_palette_file(dir: &Path, json: &str) -> Result<()> {
    fs::write(dir.join("palette.json"), json)?;
    Ok(())
}
