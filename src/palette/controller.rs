//! Palette session state machine.

use std::time::Duration;
use tracing::debug;

use super::item::{PaletteItem, Target};
use super::keymap::{KeyInput, KeyOutcome, Keymap, PaletteCommand};

/// Delay before focusing the query input after opening.
///
/// Lets the container's visibility transition apply before focus moves.
pub const FOCUS_DELAY: Duration = Duration::from_millis(50);

/// Top level palette state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteState {
    #[default]
    Closed,
    Open,
}

/// Selection movement over the visible items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Request to scroll the page to a target.
///
/// The host scrolls smoothly with the target aligned to the viewport start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub target: Target,
}

/// Side effect the host performs after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteEffect {
    /// Focus the query input after `delay`
    FocusInput { delay: Duration },
    /// Scroll the list so item `index` is visible (nearest edge)
    RevealItem { index: usize },
    /// Scroll the page to a target
    Navigate(Navigation),
}

/// Command palette controller.
///
/// Built once from the page's items and mutated only through its
/// operations. At most one item is selected, and the selected item is
/// always visible.
#[derive(Debug, Clone)]
pub struct Palette {
    items: Vec<PaletteItem>,
    query: String,
    selected: Option<usize>,
    state: PaletteState,
    keymap: Keymap,
}

impl Palette {
    /// Creates closed palette with all items visible and nothing selected.
    pub fn new(items: Vec<PaletteItem>) -> Self {
        let mut palette = Self {
            items,
            query: String::new(),
            selected: None,
            state: PaletteState::Closed,
            keymap: Keymap::default(),
        };
        palette.reset_query();
        palette
    }

    /// Replaces the key bindings used by [`Palette::handle_key`].
    pub fn with_keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn items(&self) -> &[PaletteItem] {
        &self.items
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> PaletteState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PaletteState::Open
    }

    /// Index of the selected item in the full list.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&PaletteItem> {
        self.selected.and_then(|index| self.items.get(index))
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Indices of visible items in list order.
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_visible())
            .map(|(index, _)| index)
    }

    pub fn visible_count(&self) -> usize {
        self.visible_indices().count()
    }

    /// Opens the palette with an empty query.
    ///
    /// # Returns
    ///
    /// Deferred focus request for the query input
    pub fn open(&mut self) -> PaletteEffect {
        self.reset_query();
        self.state = PaletteState::Open;
        debug!(items = self.items.len(), "Palette opened");
        PaletteEffect::FocusInput { delay: FOCUS_DELAY }
    }

    /// Closes the palette. Query and selection stay until the next open.
    pub fn close(&mut self) {
        if self.is_open() {
            debug!("Palette closed");
        }
        self.state = PaletteState::Closed;
    }

    /// Opens when closed, closes when open.
    pub fn toggle(&mut self) -> Option<PaletteEffect> {
        if self.is_open() {
            self.close();
            None
        } else {
            Some(self.open())
        }
    }

    /// Filters items and selects the first visible one.
    ///
    /// Visibility is case-insensitive substring containment of `query` in
    /// each label. Any previous selection is dropped.
    pub fn set_query(&mut self, query: &str) {
        let query_lower = query.to_lowercase();
        for item in &mut self.items {
            let visible = item.matches(&query_lower);
            item.set_visible(visible);
        }
        self.query = query.to_string();
        let first = self.visible_indices().next();
        self.selected = first;
    }

    /// Moves selection one step over the visible items.
    ///
    /// Clamps at both ends without wrapping. With nothing selected the
    /// first visible item becomes selected. Only acts while open.
    ///
    /// # Returns
    ///
    /// Index of the newly selected item, or None when nothing moved
    pub fn move_selection(&mut self, direction: Direction) -> Option<usize> {
        if !self.is_open() {
            return None;
        }

        let visible: Vec<usize> = self.visible_indices().collect();
        let last = visible.len().checked_sub(1)?;
        let current = self
            .selected
            .and_then(|selected| visible.iter().position(|&index| index == selected));

        let next = match (current, direction) {
            (None, _) => 0,
            (Some(pos), Direction::Down) => (pos + 1).min(last),
            (Some(pos), Direction::Up) => pos.saturating_sub(1),
        };

        self.selected = Some(visible[next]);
        self.selected
    }

    /// Activates the selected item, or the first item when none is selected.
    ///
    /// With a target present the palette closes and a navigation request
    /// is returned. A missing target changes nothing.
    pub fn activate_selection(&mut self) -> Option<Navigation> {
        let index = match self.selected {
            Some(index) => index,
            None if !self.items.is_empty() => 0,
            None => return None,
        };
        let target = self.items.get(index)?.target.clone()?;

        self.close();
        debug!(%target, "Palette navigation");
        Some(Navigation { target })
    }

    /// Handles a pointer click on item `index`.
    ///
    /// Resets the query so every item shows on the next open, selects the
    /// clicked item, then activates it. Hidden or unknown items are ignored.
    pub fn select_with_pointer(&mut self, index: usize) -> Option<Navigation> {
        if !self.items.get(index)?.is_visible() {
            return None;
        }

        self.reset_query();
        self.selected = Some(index);
        self.activate_selection()
    }

    /// Applies one palette command.
    pub fn apply(&mut self, command: PaletteCommand) -> Option<PaletteEffect> {
        match command {
            PaletteCommand::Toggle => self.toggle(),
            PaletteCommand::Open => Some(self.open()),
            PaletteCommand::Close => {
                self.close();
                None
            }
            PaletteCommand::Move(direction) => self
                .move_selection(direction)
                .map(|index| PaletteEffect::RevealItem { index }),
            PaletteCommand::Activate => self.activate_selection().map(PaletteEffect::Navigate),
        }
    }

    /// Resolves a key event through the keymap and applies it.
    pub fn handle_key(&mut self, input: &KeyInput) -> KeyOutcome {
        match self.keymap.resolve(input, self.is_open()) {
            Some(command) => KeyOutcome {
                prevent_default: command.prevents_default(),
                effect: self.apply(command),
            },
            None => KeyOutcome::default(),
        }
    }

    fn reset_query(&mut self) {
        self.query.clear();
        for item in &mut self.items {
            item.set_visible(true);
        }
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greek() -> Palette {
        Palette::new(vec![
            PaletteItem::to_target("Alpha", "#alpha"),
            PaletteItem::to_target("Beta", "#beta"),
            PaletteItem::to_target("Gamma", "#gamma"),
        ])
    }

    fn visible_labels(palette: &Palette) -> Vec<&str> {
        palette
            .visible_indices()
            .map(|index| palette.items()[index].label.as_str())
            .collect()
    }

    #[test]
    fn test_new_palette_is_closed_and_unfiltered() {
        // Arrange & Act
        let palette = greek();

        // Assert
        assert_eq!(palette.state(), PaletteState::Closed);
        assert_eq!(palette.visible_count(), 3);
        assert_eq!(palette.selected(), None);
        assert_eq!(palette.query(), "");
    }

    #[test]
    fn test_open_requests_deferred_focus() {
        // Arrange
        let mut palette = greek();

        // Act
        let effect = palette.open();

        // Assert
        assert!(palette.is_open());
        assert_eq!(
            effect,
            PaletteEffect::FocusInput {
                delay: Duration::from_millis(50)
            }
        );
    }

    #[test]
    fn test_open_resets_previous_query() {
        // Arrange
        let mut palette = greek();
        palette.open();
        palette.set_query("gam");
        palette.close();

        // Act
        palette.open();

        // Assert
        assert_eq!(palette.query(), "");
        assert_eq!(palette.visible_count(), 3);
        assert_eq!(palette.selected(), None);
    }

    #[test]
    fn test_close_keeps_state_until_next_open() {
        // Arrange
        let mut palette = greek();
        palette.open();
        palette.set_query("bet");

        // Act
        palette.close();

        // Assert
        assert!(!palette.is_open());
        assert_eq!(palette.query(), "bet");
        assert_eq!(visible_labels(&palette), vec!["Beta"]);
    }

    #[test]
    fn test_set_query_matches_case_insensitively() {
        // Arrange
        let mut palette = greek();
        palette.open();

        // Act
        palette.set_query("a");

        // Assert
        assert_eq!(visible_labels(&palette), vec!["Alpha", "Beta", "Gamma"]);
        assert_eq!(palette.selected_item().map(|i| i.label.as_str()), Some("Alpha"));
    }

    #[test]
    fn test_set_query_uppercase_query() {
        // Arrange
        let mut palette = greek();
        palette.open();

        // Act
        palette.set_query("GAM");

        // Assert
        assert_eq!(visible_labels(&palette), vec!["Gamma"]);
        assert_eq!(palette.selected(), Some(2));
    }

    #[test]
    fn test_set_query_without_matches_clears_selection() {
        // Arrange
        let mut palette = greek();
        palette.open();
        palette.set_query("a");

        // Act
        palette.set_query("z");

        // Assert
        assert_eq!(palette.visible_count(), 0);
        assert_eq!(palette.selected(), None);
    }

    #[test]
    fn test_move_selection_clamps_at_end() {
        // Arrange
        let mut palette = greek();
        palette.open();
        palette.set_query("a");

        // Act
        palette.move_selection(Direction::Down);
        let second = palette.move_selection(Direction::Down);
        let third = palette.move_selection(Direction::Down);

        // Assert
        assert_eq!(second, Some(2));
        assert_eq!(third, Some(2), "No wraparound past last item");
        assert_eq!(palette.selected_item().map(|i| i.label.as_str()), Some("Gamma"));
    }

    #[test]
    fn test_move_selection_clamps_at_start() {
        // Arrange
        let mut palette = greek();
        palette.open();
        palette.set_query("");

        // Act
        let moved = palette.move_selection(Direction::Up);

        // Assert
        assert_eq!(moved, Some(0));
        assert_eq!(palette.selected(), Some(0));
    }

    #[test]
    fn test_move_selection_skips_hidden_items() {
        // Arrange
        let mut palette = Palette::new(vec![
            PaletteItem::to_target("Projects", "#projects"),
            PaletteItem::to_target("About", "#about"),
            PaletteItem::to_target("Project notes", "#notes"),
        ]);
        palette.open();
        palette.set_query("project");

        // Act
        let moved = palette.move_selection(Direction::Down);

        // Assert
        assert_eq!(moved, Some(2), "Hidden 'About' is skipped");
    }

    #[test]
    fn test_move_selection_without_selection_picks_first_visible() {
        // Arrange
        let mut palette = greek();
        palette.open();

        // Act
        let moved = palette.move_selection(Direction::Down);

        // Assert
        assert_eq!(moved, Some(0));
    }

    #[test]
    fn test_move_selection_noop_when_closed() {
        // Arrange
        let mut palette = greek();
        palette.set_query("a");

        // Act
        let moved = palette.move_selection(Direction::Down);

        // Assert
        assert_eq!(moved, None);
        assert_eq!(palette.selected(), Some(0));
    }

    #[test]
    fn test_move_selection_noop_without_visible_items() {
        // Arrange
        let mut palette = greek();
        palette.open();
        palette.set_query("zzz");

        // Act
        let moved = palette.move_selection(Direction::Down);

        // Assert
        assert_eq!(moved, None);
        assert_eq!(palette.selected(), None);
    }

    #[test]
    fn test_activate_falls_back_to_first_item() {
        // Arrange
        let mut palette = greek();
        palette.open();

        // Act
        let navigation = palette.activate_selection();

        // Assert
        assert_eq!(
            navigation,
            Some(Navigation {
                target: Target::new("#alpha")
            })
        );
        assert!(!palette.is_open(), "Navigation closes palette");
    }

    #[test]
    fn test_activate_uses_selected_item() {
        // Arrange
        let mut palette = greek();
        palette.open();
        palette.set_query("bet");

        // Act
        let navigation = palette.activate_selection();

        // Assert
        assert_eq!(navigation.map(|n| n.target), Some(Target::new("#beta")));
    }

    #[test]
    fn test_activate_fallback_ignores_filter() {
        // Arrange
        let mut palette = greek();
        palette.open();
        palette.set_query("nothing");

        // Act
        let navigation = palette.activate_selection();

        // Assert
        assert_eq!(navigation.map(|n| n.target), Some(Target::new("#alpha")));
    }

    #[test]
    fn test_activate_missing_target_is_noop() {
        // Arrange
        let mut palette = Palette::new(vec![PaletteItem::new("Coming soon", None)]);
        palette.open();

        // Act
        let navigation = palette.activate_selection();

        // Assert
        assert_eq!(navigation, None);
        assert!(palette.is_open(), "Palette stays open");
    }

    #[test]
    fn test_activate_empty_palette() {
        // Arrange
        let mut palette = Palette::new(Vec::new());
        palette.open();

        // Act & Assert
        assert_eq!(palette.activate_selection(), None);
    }

    #[test]
    fn test_pointer_selection_resets_query_and_navigates() {
        // Arrange
        let mut palette = greek();
        palette.open();
        palette.set_query("a");

        // Act
        let navigation = palette.select_with_pointer(2);

        // Assert
        assert_eq!(navigation.map(|n| n.target), Some(Target::new("#gamma")));
        assert_eq!(palette.query(), "");
        assert_eq!(palette.visible_count(), 3);
        assert_eq!(palette.selected(), Some(2), "Only clicked item selected");
        assert!(!palette.is_open());
    }

    #[test]
    fn test_pointer_selection_ignores_hidden_item() {
        // Arrange
        let mut palette = greek();
        palette.open();
        palette.set_query("alp");

        // Act
        let navigation = palette.select_with_pointer(1);

        // Assert
        assert_eq!(navigation, None);
        assert_eq!(palette.query(), "alp");
        assert!(palette.is_open());
    }

    #[test]
    fn test_pointer_selection_out_of_range() {
        let mut palette = greek();
        palette.open();
        assert_eq!(palette.select_with_pointer(10), None);
    }

    #[test]
    fn test_toggle_round_trip() {
        // Arrange
        let mut palette = greek();

        // Act
        let opened = palette.toggle();
        let closed = palette.toggle();

        // Assert
        assert!(matches!(opened, Some(PaletteEffect::FocusInput { .. })));
        assert_eq!(closed, None);
        assert!(!palette.is_open());
    }

    #[test]
    fn test_apply_move_reports_reveal() {
        // Arrange
        let mut palette = greek();
        palette.open();
        palette.set_query("a");

        // Act
        let effect = palette.apply(PaletteCommand::Move(Direction::Down));

        // Assert
        assert_eq!(effect, Some(PaletteEffect::RevealItem { index: 1 }));
    }

    #[test]
    fn test_set_query_replaces_previous_selection() {
        // Arrange
        let mut palette = greek();
        palette.open();
        palette.move_selection(Direction::Down);
        palette.move_selection(Direction::Down);

        // Act
        palette.set_query("et");

        // Assert
        assert_eq!(palette.selected(), Some(1));
        assert_eq!(visible_labels(&palette), vec!["Beta"]);
    }

    #[test]
    fn test_with_keymap_rebinds_toggle() {
        // Arrange
        let mut palette = greek().with_keymap(Keymap::new('p'));

        // Act
        let ignored = palette.handle_key(&KeyInput::new("k").with_ctrl());
        let opened = palette.handle_key(&KeyInput::new("P").with_meta());

        // Assert
        assert_eq!(ignored, KeyOutcome::default());
        assert!(opened.prevent_default);
        assert!(palette.is_open());
        assert_eq!(palette.keymap().toggle_letter(), 'p');
    }
}
