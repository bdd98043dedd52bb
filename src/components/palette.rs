//! Command palette markup

use maud::{Markup, html};

use crate::palette::{Palette, Target};

/// Renders command palette dialog from controller state
///
/// The dialog, query input and list carry the ids the browser adapter
/// looks up (`cmd`, `cmdInput`, `cmdList`). Each entry exposes its target
/// through `data-go`; hidden entries get `display: none` and the selected
/// entry `aria-selected="true"`, so the markup mirrors the session exactly.
///
/// # Arguments
///
/// * `palette`: Palette session to render
///
/// # Returns
///
/// Palette dialog markup
pub fn command_palette(palette: &Palette) -> Markup {
    let hidden = if palette.is_open() { "false" } else { "true" };
    let shortcut = palette.keymap().toggle_letter().to_ascii_uppercase();

    html! {
        div id="cmd" class="cmd" role="dialog" aria-modal="true" aria-label="Command palette" aria-hidden=(hidden) {
            div class="cmd-panel" {
                input id="cmdInput" class="cmd-input" type="text" placeholder="Jump to…"
                    autocomplete="off" aria-controls="cmdList" value=(palette.query());
                ul id="cmdList" class="cmd-list" role="listbox" {
                    @for (index, item) in palette.items().iter().enumerate() {
                        li role="option"
                            data-go=[item.target.as_ref().map(Target::as_str)]
                            aria-selected=[palette.is_selected(index).then_some("true")]
                            style=[(!item.is_visible()).then_some("display: none")] {
                            (item.label)
                        }
                    }
                }
                p class="cmd-hint" {
                    kbd { "Ctrl" } " " kbd { (shortcut) } " toggle · "
                    kbd { "↑" } kbd { "↓" } " move · "
                    kbd { "Enter" } " go · "
                    kbd { "Esc" } " close"
                }
            }
        }
    }
}
