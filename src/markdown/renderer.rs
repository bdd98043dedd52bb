//! Line oriented markdown rendering.

use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

use super::links::{escape_html, rewrite_inline_links};

/// Marker that opens and closes a fenced code block.
const FENCE: &str = "```";

fn heading_pattern() -> &'static Regex {
    static RE_HEADING: OnceLock<Regex> = OnceLock::new();
    RE_HEADING.get_or_init(|| Regex::new(r"^(#{1,3})\s+(.*)$").expect("valid heading regex"))
}

/// One rendered output block.
///
/// Every input line produces exactly one block. Text is kept raw and only
/// escaped when converted to HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `#`, `##` or `###` heading with the marker stripped
    Heading { level: u8, text: String },
    /// Plain text line, inline links allowed
    Paragraph(String),
    /// Blank line acting as paragraph separator
    Blank,
    /// Opening fence
    CodeOpen,
    /// Line inside a fenced block, emitted verbatim
    CodeLine(String),
    /// Closing fence
    CodeClose,
}

impl Block {
    /// Converts block to its HTML string.
    pub fn to_html(&self) -> String {
        match self {
            Block::Heading { level, text } => {
                format!("<h{level}>{}</h{level}>", escape_html(text))
            }
            Block::Paragraph(text) => {
                format!("<p>{}</p>", rewrite_inline_links(&escape_html(text)))
            }
            Block::Blank => String::new(),
            Block::CodeOpen => "<pre><code>".to_string(),
            Block::CodeLine(text) => {
                let mut html = escape_html(text);
                html.push('\n');
                html
            }
            Block::CodeClose => "</code></pre>".to_string(),
        }
    }
}

/// Renders a small markdown subset to HTML.
///
/// Supports `#`/`##`/`###` headings, fenced code blocks, blank line
/// paragraph breaks and inline `[label](url)` links. Everything else is
/// rendered as literal paragraph text. Rendering never fails and is
/// deterministic.
///
/// An unterminated fence keeps every remaining line inside the code block.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Creates renderer.
    pub fn new() -> Self {
        Self
    }

    /// Scans markdown into one block per line.
    ///
    /// Lines are split on `\n` with an optional preceding `\r`.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown text
    ///
    /// # Returns
    ///
    /// Ordered blocks, one per input line
    pub fn blocks(&self, content: &str) -> Vec<Block> {
        let mut in_code = false;

        content
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .map(|line| {
                if line.starts_with(FENCE) {
                    in_code = !in_code;
                    return if in_code {
                        Block::CodeOpen
                    } else {
                        Block::CodeClose
                    };
                }

                if in_code {
                    return Block::CodeLine(line.to_string());
                }

                if let Some(caps) = heading_pattern().captures(line) {
                    let level = caps.get(1).map_or(1, |m| m.as_str().len()) as u8;
                    let text = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
                    return Block::Heading {
                        level,
                        text: text.to_string(),
                    };
                }

                if line.trim().is_empty() {
                    Block::Blank
                } else {
                    Block::Paragraph(line.to_string())
                }
            })
            .collect()
    }

    /// Renders markdown content to HTML string.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// HTML blocks joined with line breaks
    pub fn render(&self, content: &str) -> String {
        let blocks = self.blocks(content);
        debug!(blocks = blocks.len(), "Rendered markdown");
        blocks
            .iter()
            .map(Block::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Returns text of the first heading outside code blocks.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content
    ///
    /// # Returns
    ///
    /// Raw heading text, or None when the document has no heading
    pub fn title(&self, content: &str) -> Option<String> {
        self.blocks(content).into_iter().find_map(|block| match block {
            Block::Heading { text, .. } if !text.trim().is_empty() => Some(text.trim().to_string()),
            _ => None,
        })
    }

    /// Renders markdown file at given path.
    ///
    /// # Arguments
    ///
    /// * `path`: Path to markdown file
    ///
    /// # Returns
    ///
    /// Rendered HTML string
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown file: {}", path.display()))?;
        Ok(self.render(&content))
    }
}

/// Renders markdown with a default [`MarkdownRenderer`].
pub fn render(content: &str) -> String {
    MarkdownRenderer::new().render(content)
}
