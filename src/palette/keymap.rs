//! Keyboard bindings for the palette.
//!
//! Key names follow the DOM `KeyboardEvent.key` values so a browser host can
//! pass events through unchanged.

use super::controller::{Direction, PaletteEffect};

pub const KEY_ESCAPE: &str = "Escape";
pub const KEY_ARROW_UP: &str = "ArrowUp";
pub const KEY_ARROW_DOWN: &str = "ArrowDown";
pub const KEY_ENTER: &str = "Enter";

/// Key event as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            meta: false,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }
}

/// Operation a key (or host control) maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteCommand {
    Toggle,
    Open,
    Close,
    Move(Direction),
    Activate,
}

impl PaletteCommand {
    /// Whether the host should suppress the browser's default action.
    ///
    /// Escape keeps its default so it can still exit fullscreen and the like.
    pub fn prevents_default(self) -> bool {
        !matches!(self, PaletteCommand::Close | PaletteCommand::Open)
    }
}

/// Result of routing one key event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    pub prevent_default: bool,
    pub effect: Option<PaletteEffect>,
}

/// Palette key bindings.
///
/// Ctrl or Meta plus the toggle letter opens and closes the palette from
/// anywhere. Escape, arrows and Enter only apply while the palette is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keymap {
    toggle_letter: char,
}

impl Default for Keymap {
    fn default() -> Self {
        Self { toggle_letter: 'k' }
    }
}

impl Keymap {
    /// Creates keymap with a custom toggle letter.
    pub fn new(toggle_letter: char) -> Self {
        Self { toggle_letter }
    }

    pub fn toggle_letter(&self) -> char {
        self.toggle_letter
    }

    /// Maps a key event to a command given the palette's open state.
    pub fn resolve(&self, input: &KeyInput, is_open: bool) -> Option<PaletteCommand> {
        if (input.ctrl || input.meta) && self.is_toggle_key(&input.key) {
            return Some(PaletteCommand::Toggle);
        }

        if !is_open {
            return None;
        }

        match input.key.as_str() {
            KEY_ESCAPE => Some(PaletteCommand::Close),
            KEY_ARROW_UP => Some(PaletteCommand::Move(Direction::Up)),
            KEY_ARROW_DOWN => Some(PaletteCommand::Move(Direction::Down)),
            KEY_ENTER => Some(PaletteCommand::Activate),
            _ => None,
        }
    }

    fn is_toggle_key(&self, key: &str) -> bool {
        key.to_lowercase() == self.toggle_letter.to_lowercase().to_string()
    }
}
