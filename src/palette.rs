//! Command palette: a filterable, keyboard navigable list of page targets.
//!
//! The controller holds plain state and returns the effects the host should
//! perform (focus the query input, reveal an item, scroll to a target).
//! Element lookup, event subscription and scrolling stay with the host.

mod controller;
mod item;
pub mod keymap;

pub use controller::{Direction, FOCUS_DELAY, Navigation, Palette, PaletteEffect, PaletteState};
pub use item::{PaletteItem, Target, load_items, parse_items};
pub use keymap::{KeyInput, KeyOutcome, Keymap, PaletteCommand};
