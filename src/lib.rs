//! Portfolio page interactivity.
//!
//! A small markdown renderer, a command palette controller, a node network
//! diagram, and a static page builder that ties them together. The `wasm`
//! feature wires the palette to a browser page.

mod assets;
pub mod components;
#[cfg(feature = "cli")]
mod config;
pub mod content;
mod generators;
pub mod markdown;
pub mod network;
pub mod pages;
pub mod palette;
mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use assets::{write_css_assets, write_network_svg};
#[cfg(feature = "cli")]
pub use config::Config;
pub use content::{Section, load_sections, palette_items};
pub use generators::{GeneratedSite, SiteOptions, generate_site};
pub use markdown::{Block, MarkdownRenderer, render};
pub use network::{NetworkLayout, Point};
pub use palette::{
    Direction, KeyInput, KeyOutcome, Keymap, Navigation, Palette, PaletteCommand, PaletteEffect,
    PaletteItem, PaletteState, Target,
};
pub use util::{current_year, slugify};
