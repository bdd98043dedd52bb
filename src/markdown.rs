//! Markdown rendering for a small, line oriented subset.
//!
//! This module turns headings, fenced code blocks, paragraphs and inline
//! links into HTML. All text content is escaped; only the recognised block
//! and link wrapping is emitted as markup.

mod links;
mod renderer;

pub use links::{escape_html, rewrite_inline_links};
pub use renderer::{Block, MarkdownRenderer, render};
