//! Text escaping and inline link rewriting.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Anchor attributes for rendered links.
///
/// Links open in a new browsing context without exposing `window.opener`
/// or sending a referrer.
const LINK_ATTRS: &str = r#"target="_blank" rel="noopener noreferrer""#;

fn link_pattern() -> &'static Regex {
    static RE_LINK: OnceLock<Regex> = OnceLock::new();
    RE_LINK.get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"))
}

/// Escapes the HTML text metacharacters `&`, `<` and `>`.
///
/// Quotes are left alone: the result is meant for element content, not
/// attribute values.
///
/// # Arguments
///
/// * `text`: Raw text
///
/// # Returns
///
/// Text safe for insertion as element content
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Replaces `[label](url)` spans with anchor elements.
///
/// Expects text that has already passed through [`escape_html`], so labels
/// and urls carry no raw markup. The url additionally has `"` escaped since
/// it lands inside an attribute value.
///
/// # Arguments
///
/// * `escaped`: Escaped line of paragraph text
///
/// # Returns
///
/// Line with every inline link rewritten to `<a>`
pub fn rewrite_inline_links(escaped: &str) -> String {
    link_pattern()
        .replace_all(escaped, |caps: &Captures| {
            let label = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let href = caps
                .get(2)
                .map(|m| m.as_str())
                .unwrap_or_default()
                .replace('"', "&quot;");
            format!(r#"<a href="{href}" {LINK_ATTRS}>{label}</a>"#)
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_metacharacters() {
        // Arrange
        let raw = "a < b && c > d";

        // Act
        let escaped = escape_html(raw);

        // Assert
        assert_eq!(escaped, "a &lt; b &amp;&amp; c &gt; d");
    }

    #[test]
    fn test_escape_html_leaves_quotes() {
        assert_eq!(escape_html(r#"say "hi" it's"#), r#"say "hi" it's"#);
    }

    #[test]
    fn test_rewrite_single_link() {
        // Arrange
        let line = "see [docs](https://example.com/docs) here";

        // Act
        let html = rewrite_inline_links(line);

        // Assert
        assert_eq!(
            html,
            r#"see <a href="https://example.com/docs" target="_blank" rel="noopener noreferrer">docs</a> here"#
        );
    }

    #[test]
    fn test_rewrite_multiple_links() {
        // Arrange
        let line = "[a](#one) and [b](#two)";

        // Act
        let html = rewrite_inline_links(line);

        // Assert
        assert!(html.contains(r##"<a href="#one""##), "First link: {}", html);
        assert!(html.contains(r##"<a href="#two""##), "Second link: {}", html);
        assert_eq!(html.matches("</a>").count(), 2);
    }

    #[test]
    fn test_rewrite_escapes_quote_in_href() {
        // Arrange
        let line = r#"[x](http://a"onmouseover="b)"#;

        // Act
        let html = rewrite_inline_links(line);

        // Assert
        assert!(
            html.contains(r#"href="http://a&quot;onmouseover=&quot;b""#),
            "Quote must not terminate attribute: {}",
            html
        );
    }

    #[test]
    fn test_rewrite_ignores_incomplete_syntax() {
        // Arrange
        let line = "[label] (url) and [empty]() and [open](close";

        // Act
        let html = rewrite_inline_links(line);

        // Assert
        assert_eq!(html, line, "Malformed links stay literal");
    }
}
