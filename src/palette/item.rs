//! Palette entries and their navigation targets.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Where activating an item scrolls the page.
///
/// Holds a CSS selector such as `#about`, resolved by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Target(String);

impl Target {
    /// Creates target from selector text.
    pub fn new(selector: impl Into<String>) -> Self {
        Self(selector.into())
    }

    /// Returns the selector.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One navigable palette entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteItem {
    /// Display text, also used for filtering
    pub label: String,
    /// Navigation target; items without one do nothing on activation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,
    #[serde(skip, default = "visible_by_default")]
    visible: bool,
}

fn visible_by_default() -> bool {
    true
}

impl PaletteItem {
    /// Creates visible item.
    pub fn new(label: impl Into<String>, target: Option<Target>) -> Self {
        Self {
            label: label.into(),
            target,
            visible: true,
        }
    }

    /// Creates visible item pointing at a selector.
    pub fn to_target(label: impl Into<String>, selector: impl Into<String>) -> Self {
        Self::new(label, Some(Target::new(selector)))
    }

    /// Whether item matches the current query.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(super) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Case-insensitive substring match against the label.
    ///
    /// `query_lower` must already be lowercased.
    pub(super) fn matches(&self, query_lower: &str) -> bool {
        self.label.to_lowercase().contains(query_lower)
    }
}

/// Parses palette items from a JSON array.
///
/// # Arguments
///
/// * `json`: JSON array of `{ "label": ..., "target": ... }` objects
///
/// # Returns
///
/// Items in document order, all visible
///
/// # Errors
///
/// Returns error if JSON is malformed or misses a label
pub fn parse_items(json: &str) -> Result<Vec<PaletteItem>> {
    serde_json::from_str(json).context("Failed to parse palette items")
}

/// Loads palette items from a JSON file.
///
/// # Errors
///
/// Returns error if file cannot be read or parsed
pub fn load_items(path: impl AsRef<Path>) -> Result<Vec<PaletteItem>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read palette items: {}", path.display()))?;
    parse_items(&json).with_context(|| format!("Invalid palette file: {}", path.display()))
}
