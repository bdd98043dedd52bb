//! Static asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::network::NetworkLayout;

const BASE: &str = include_str!("../assets/base.css");
const PALETTE: &str = include_str!("../assets/palette.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Stylesheet file name inside the assets directory.
pub const SITE_CSS: &str = "site.css";

/// Standalone diagram file name inside the assets directory.
pub const NETWORK_SVG: &str = "network.svg";

/// Writes the bundled stylesheet to the assets directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(assets_dir, SITE_CSS, &[BASE, PALETTE, MARKDOWN])
}

/// Writes the network diagram as a standalone SVG file
pub fn write_network_svg(assets_dir: &Path, layout: &NetworkLayout) -> Result<()> {
    fs::write(assets_dir.join(NETWORK_SVG), layout.to_svg_string())
        .with_context(|| format!("Failed to write asset: {}", NETWORK_SVG))
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
