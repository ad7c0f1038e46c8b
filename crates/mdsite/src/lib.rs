//! # mdsite
//!
//! Convert Markdown documents to HTML.
//!
//! The grammar is small and fixed: six block kinds (headings, fenced code,
//! quotes, unordered and ordered lists, paragraphs) and five inline spans
//! (bold, italic, code, links, images). Inline spans never nest and there is
//! no escaping.
//!
//! ## Pipeline
//!
//! ```text
//! document ─▶ markdown_to_blocks ─▶ block_to_block_kind ─▶ block_to_html_node ─▶ <div>
//!                                                              │
//!                                                       text_to_spans
//! ```
//!
//! ## Example
//!
//! ```rust
//! use mdsite::{extract_title, markdown_to_html};
//!
//! let markdown = "# Heading 1\n\nThis is **bolded** paragraph";
//!
//! let html = markdown_to_html(markdown).unwrap();
//! assert_eq!(html, "<div><h1>Heading 1</h1><p>This is <b>bolded</b> paragraph</p></div>");
//!
//! let title = extract_title(markdown).unwrap();
//! assert_eq!(title, "Heading 1");
//! ```

mod blocks;
mod convert;
mod inline;
mod title;

pub use blocks::{block_to_block_kind, markdown_to_blocks, BlockKind};
pub use convert::{block_to_html_node, markdown_to_html_node, span_to_html_node, text_to_children};
pub use inline::{
    extract_images, extract_links, split_delimiter, split_images, split_links, text_to_spans,
    SpanKind, TextSpan,
};
pub use mdsite_core::{HtmlNode, RenderError};
pub use title::extract_title;

/// Error type for Markdown conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("Invalid syntax - unmatched delimiter `{delimiter}` in {text:?}")]
    UnmatchedDelimiter { delimiter: String, text: String },

    #[error("No level 1 heading found")]
    TitleNotFound,

    #[error("Matched {literal:?} but could not locate it in the source text")]
    SpanNotFound { literal: String },

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Convert a full Markdown document to an HTML string wrapped in a `<div>`
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    let node = markdown_to_html_node(markdown)?;
    let html = node.to_html()?;
    tracing::debug!(blocks = node.children().len(), len = html.len(), "rendered document");
    Ok(html)
}
