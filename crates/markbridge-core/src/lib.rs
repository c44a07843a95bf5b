//! markbridge-core - standardized document tree and serialization
//!
//! This crate provides the format-neutral tree that both lowering paths of
//! `markbridge` produce, and the two serializers that raise it back into
//! Markdown or HTML5.
//!
//! # Architecture
//!
//! ```text
//! Markdown text ──lowering──▶ ┌───────────────┐ ──▶ Markdown string
//!                             │ Document tree │
//! HTML element tree ────────▶ └───────────────┘ ──▶ HTML5 string
//! ```
//!
//! # Example
//!
//! ```rust
//! use markbridge_core::{to_html, Document, Node, Options};
//!
//! let paragraph = Node::paragraph()
//!     .with_children([
//!         Node::text("This is "),
//!         Node::Strong(vec![Node::text("bold")]),
//!     ])
//!     .unwrap();
//! let doc = Document::from_nodes(vec![Node::header(1, "Hello"), paragraph]);
//!
//! let html = to_html(&doc, &Options::default());
//! assert_eq!(html, "<h1>Hello</h1><p>This is <strong>bold</strong></p>");
//! ```

mod ast;
mod format;
mod html;
mod markdown;
mod options;

pub use ast::{Document, ListType, Node, NodeKind, TreeError, MAX_HEADER_LEVEL};
pub use format::{Format, UnknownFormat};
pub use html::to_html;
pub use markdown::{collapse_whitespace, to_markdown};
pub use options::Options;
