//! Page layout wrapper component

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, and body structure. When a
/// browser bundle path is given, a module script loads it and mounts the
/// palette wiring once the document is parsed.
///
/// # Arguments
///
/// * `title`: Page title text
/// * `stylesheets`: CSS file paths to include
/// * `script`: Optional path to the wasm-bindgen JavaScript glue
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(
    title: &str,
    stylesheets: &[&str],
    script: Option<&str>,
    body: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body id="top" {
                (body)
                @if let Some(src) = script {
                    script type="module" {
                        (PreEscaped(mount_script(src)))
                    }
                }
            }
        }
    }
}

fn mount_script(src: &str) -> String {
    let src = src.replace('\\', "\\\\").replace('\'', "\\'");
    format!("import init, {{ mount }} from '{src}';\ninit().then(() => mount());")
}
