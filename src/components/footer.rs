//! Page footer component

use maud::{Markup, html};

/// Renders footer with copyright year
///
/// The year element carries `data-year` so a script can refresh it.
pub fn footer(owner: &str, year: i64) -> Markup {
    html! {
        footer class="site-footer" {
            p {
                "© " span data-year { (year) } " " (owner)
            }
        }
    }
}
