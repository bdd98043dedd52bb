//! Page content discovery.
//!
//! A content directory holds one markdown file per page section plus an
//! optional `palette.json` with extra command palette entries.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::markdown::MarkdownRenderer;
use crate::palette::{PaletteItem, load_items};
use crate::util::slugify;

/// File name of the optional extra palette entries.
pub const PALETTE_FILE: &str = "palette.json";

/// Rendered page section backed by one markdown file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Element id, unique within the page
    pub id: String,
    /// First heading of the file, or the file stem
    pub title: String,
    /// Rendered HTML body
    pub html: String,
    /// Source markdown file
    pub source: PathBuf,
}

impl Section {
    /// Selector that navigates to this section.
    pub fn anchor(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Lists top level markdown files sorted by file name.
///
/// Hidden files are skipped.
///
/// # Errors
///
/// Returns error if directory cannot be read
pub fn list_markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read content directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        let is_markdown = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
        if !hidden && is_markdown && path.is_file() {
            files.push(path);
        }
    }

    files.sort_by_key(|path| path.file_name().map(|name| name.to_os_string()));
    Ok(files)
}

/// Loads and renders every markdown section in a directory.
///
/// Section ids come from the file stem; duplicates get a numeric suffix.
/// Files that cannot be read are skipped with a warning.
///
/// # Arguments
///
/// * `dir`: Content directory
/// * `renderer`: Markdown renderer
///
/// # Returns
///
/// Sections in file name order
///
/// # Errors
///
/// Returns error if the directory itself cannot be listed
pub fn load_sections(dir: &Path, renderer: &MarkdownRenderer) -> Result<Vec<Section>> {
    let mut used_ids = HashSet::new();
    let mut sections = Vec::new();

    for path in list_markdown_files(dir)? {
        let markdown = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Skipping unreadable section {}: {}", path.display(), e);
                continue;
            }
        };

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let id = unique_id(&stem, &mut used_ids);
        let title = renderer.title(&markdown).unwrap_or_else(|| stem.clone());

        debug!(id = %id, source = %path.display(), "Loaded section");
        sections.push(Section {
            id,
            title,
            html: renderer.render(&markdown),
            source: path,
        });
    }

    Ok(sections)
}

fn unique_id(stem: &str, used: &mut HashSet<String>) -> String {
    let base = match slugify(stem) {
        slug if slug.is_empty() => "section".to_string(),
        slug => slug,
    };

    let mut candidate = base.clone();
    let mut n = 2;
    while used.contains(&candidate) {
        candidate = format!("{}-{}", base, n);
        n += 1;
    }
    used.insert(candidate.clone());
    candidate
}

/// Builds palette entries: one per section, then any extra entries from
/// `palette.json` in the content directory.
///
/// # Errors
///
/// Returns error if `palette.json` exists but cannot be parsed
pub fn palette_items(dir: &Path, sections: &[Section]) -> Result<Vec<PaletteItem>> {
    let mut items: Vec<PaletteItem> = sections
        .iter()
        .map(|section| PaletteItem::to_target(section.title.clone(), section.anchor()))
        .collect();

    let extra = dir.join(PALETTE_FILE);
    if extra.is_file() {
        let loaded = load_items(&extra)?;
        debug!(count = loaded.len(), "Loaded extra palette items");
        items.extend(loaded);
    }

    Ok(items)
}
