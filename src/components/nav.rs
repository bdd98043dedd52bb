//! Site header and section navigation

use maud::{Markup, html};

use crate::content::Section;

/// Renders sticky site header
///
/// Shows the site title linking back to the top, one link per section, and
/// a toggle button that opens the command palette on small screens.
///
/// # Arguments
///
/// * `title`: Site title
/// * `sections`: Page sections in display order
///
/// # Returns
///
/// Header markup
pub fn site_header(title: &str, sections: &[Section]) -> Markup {
    html! {
        header class="site-header" {
            a class="brand" href="#top" { (title) }
            nav class="site-nav" aria-label="Sections" {
                @for section in sections {
                    a href=(section.anchor()) { (section.title) }
                }
            }
            button type="button" class="nav-toggle" aria-label="Open command palette" aria-controls="cmd" {
                "☰"
            }
        }
    }
}
