//! mdsite-core - HTML node tree and rendering
//!
//! This crate provides the in-memory HTML tree that the Markdown pipeline in
//! `mdsite` builds, and the serializer that turns it into an HTML string.
//!
//! # Architecture
//!
//! ```text
//! Markdown String ──blocks──▶ ┌───────────┐
//!                             │           │
//!                             │ HtmlNode  │ ──render──▶ HTML String
//! Markdown Inline ──spans───▶ │   tree    │
//!                             └───────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use mdsite_core::HtmlNode;
//!
//! let tree = HtmlNode::element(
//!     "p",
//!     vec![
//!         HtmlNode::text("This is "),
//!         HtmlNode::leaf("b", "bold"),
//!         HtmlNode::text(" text."),
//!     ],
//! );
//!
//! let html = tree.to_html().unwrap();
//! assert_eq!(html, "<p>This is <b>bold</b> text.</p>");
//! ```

mod node;
mod render;

pub use node::{Attributes, HtmlNode};
pub use render::render;

/// Error type for rendering an [`HtmlNode`] tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Leaf node <{tag}> has no value")]
    MissingValue { tag: String },

    #[error("Void element <{tag}> cannot hold a value")]
    UnexpectedValue { tag: String },

    #[error("Element node has no tag")]
    MissingTag,

    #[error("Element node <{tag}> has no children")]
    MissingChildren { tag: String },
}

pub type Result<T> = std::result::Result<T, RenderError>;
