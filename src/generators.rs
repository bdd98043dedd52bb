//! Site generation from a content directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::assets::{SITE_CSS, write_css_assets, write_network_svg};
use crate::content::{load_sections, palette_items};
use crate::markdown::MarkdownRenderer;
use crate::network::NetworkLayout;
use crate::pages::index::{self, IndexPageData};
use crate::palette::Palette;
use crate::util::current_year;

/// Inputs for one site build.
#[derive(Debug, Clone)]
pub struct SiteOptions<'a> {
    /// Directory with section markdown files and optional `palette.json`
    pub content_dir: &'a Path,
    /// Directory receiving `index.html` and `assets/`
    pub output_dir: &'a Path,
    /// Site title shown in header, hero and footer
    pub title: &'a str,
    /// Optional path to the wasm-bindgen JavaScript glue, relative to the page
    pub script: Option<&'a str>,
}

/// Summary of a finished build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSite {
    pub index_path: PathBuf,
    pub section_count: usize,
    pub palette_item_count: usize,
}

/// Generates the portfolio page and its assets.
///
/// Renders every markdown section, builds the command palette from the
/// sections plus `palette.json`, and writes `index.html`,
/// `assets/site.css` and `assets/network.svg`.
///
/// # Arguments
///
/// * `options`: Build inputs
///
/// # Returns
///
/// Paths and counts of the generated site
///
/// # Errors
///
/// Returns error if:
/// - Content directory cannot be listed
/// - `palette.json` is present but invalid
/// - Output files cannot be written
///
/// # Examples
///
/// ```no_run
/// use folio::{SiteOptions, generate_site};
/// use std::path::Path;
///
/// let site = generate_site(&SiteOptions {
///     content_dir: Path::new("content"),
///     output_dir: Path::new("dist"),
///     title: "Ada Lovelace",
///     script: None,
/// })?;
/// println!("{}", site.index_path.display());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate_site(options: &SiteOptions<'_>) -> Result<GeneratedSite> {
    let renderer = MarkdownRenderer::new();
    let sections =
        load_sections(options.content_dir, &renderer).context("Failed to load page sections")?;
    let items =
        palette_items(options.content_dir, &sections).context("Failed to build palette items")?;
    let palette_item_count = items.len();
    let palette = Palette::new(items);
    let network = NetworkLayout::default();

    let assets_dir = options.output_dir.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_css_assets(&assets_dir)?;
    write_network_svg(&assets_dir, &network)?;

    let stylesheet = format!("assets/{}", SITE_CSS);
    let html = index::generate(IndexPageData {
        title: options.title,
        sections: &sections,
        palette: &palette,
        network: &network,
        year: current_year(),
        stylesheets: &[stylesheet.as_str()],
        script: options.script,
    });

    let index_path = options.output_dir.join("index.html");
    fs::write(&index_path, html.into_string())
        .with_context(|| format!("Failed to write index page to {}", index_path.display()))?;

    info!(
        sections = sections.len(),
        palette_items = palette_item_count,
        "Generated {}",
        index_path.display()
    );

    Ok(GeneratedSite {
        index_path,
        section_count: sections.len(),
        palette_item_count,
    })
}
