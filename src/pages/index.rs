//! Portfolio index page generation

use maud::{Markup, PreEscaped, html};

use crate::components::footer::footer;
use crate::components::layout::page_wrapper;
use crate::components::nav::site_header;
use crate::components::palette::command_palette;
use crate::content::Section;
use crate::network::NetworkLayout;
use crate::palette::Palette;

/// Element id of the inline network diagram.
pub const NETWORK_CANVAS_ID: &str = "nnCanvas";

/// Data container for index page generation
pub struct IndexPageData<'a> {
    pub title: &'a str,
    pub sections: &'a [Section],
    pub palette: &'a Palette,
    pub network: &'a NetworkLayout,
    pub year: i64,
    pub stylesheets: &'a [&'a str],
    pub script: Option<&'a str>,
}

/// Generates the portfolio page
///
/// Layout top to bottom: site header, hero with the network diagram, one
/// `<section>` per markdown file, footer, then the (hidden) command palette
/// dialog.
///
/// # Arguments
///
/// * `data`: Index page data container with all required fields
///
/// # Returns
///
/// Complete HTML markup for the page
pub fn generate(data: IndexPageData<'_>) -> Markup {
    page_wrapper(
        data.title,
        data.stylesheets,
        data.script,
        html! {
            (site_header(data.title, data.sections))
            main class="container" {
                section class="hero" aria-label="Intro" {
                    h1 class="hero-title" { (data.title) }
                    (data.network.svg(Some(NETWORK_CANVAS_ID)))
                }
                @if data.sections.is_empty() {
                    p class="empty-state" { "No sections yet" }
                }
                @for section in data.sections {
                    section id=(section.id) class="page-section markdown-body" {
                        (PreEscaped(&section.html))
                    }
                }
            }
            (footer(data.title, data.year))
            (command_palette(data.palette))
        },
    )
}
