//! # markbridge
//!
//! Convert between Markdown and HTML5 through one shared document tree.
//!
//! Input is *lowered* into the format-neutral [`Document`] tree from
//! `markbridge-core`, then *raised* into the requested output notation.
//! The input format is detected by trying each lowering path in a fixed
//! order (HTML first, then Markdown) and keeping the first that accepts it.
//!
//! ## Design
//!
//! HTML lowering reads element trees through the small [`DomNode`] trait:
//!
//! - **Parser agnostic**: Any HTML parser can expose its tree through `DomNode`
//! - **Bundled parser optional**: String input is parsed with `scraper` when
//!   the `html` feature (default) is enabled
//!
//! ## Example (string)
//!
//! ```rust
//! let html = markbridge::convert("# Title\n\nSome *text* here.\n", "html5").unwrap();
//! assert_eq!(html, "<h1>Title</h1><p>Some <em>text</em> here.</p>");
//!
//! let markdown = markbridge::convert("<ul><li>a</li><li>b</li></ul>", "md").unwrap();
//! assert_eq!(markdown, "- a\n- b\n");
//! ```
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use markbridge::{Converter, Format, Node};
//!
//! let mut root = Node::document_fragment();
//! let mut h1 = Node::element("h1");
//! h1.add_child(Node::text("Hello World"));
//! root.add_child(h1);
//!
//! let markdown = Converter::new().convert_dom(&root, Format::Markdown).unwrap();
//! assert_eq!(markdown, "# Hello World\n");
//! ```

#[cfg(feature = "html")]
pub mod html;
mod lowering;
pub mod node;
mod service;
mod utilities;

pub use markbridge_core::{
    to_html, to_markdown, Document, Format, ListType, Node as TreeNode, NodeKind, Options,
    TreeError,
};

#[cfg(feature = "html")]
pub use html::parse_html;
pub use lowering::{standardize, standardize_dom, standardize_markdown, Source};
pub use node::{DomKind, DomNode, Node, NodeType};
pub use service::Converter;

/// A lowering path rejected its input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{format} lowering rejected input: {reason}")]
pub struct FormatMismatch {
    pub format: Format,
    pub reason: String,
}

impl FormatMismatch {
    pub fn new(format: Format, reason: impl Into<String>) -> Self {
        Self {
            format,
            reason: reason.into(),
        }
    }
}

/// Error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Mismatch(#[from] FormatMismatch),

    #[error("input matched no known format ({} lowering paths rejected it)", .attempts.len())]
    Unrecognized { attempts: Vec<FormatMismatch> },

    #[error("document tree invariant violated: {0}")]
    Invariant(#[from] TreeError),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("unknown target format: {0:?}")]
    UnknownTarget(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Convert `input` into the format named by `target` (`"md"` or `"html5"`)
pub fn convert(input: &str, target: &str) -> Result<String> {
    let target: Format = target
        .parse()
        .map_err(|_| ConvertError::UnknownTarget(target.to_string()))?;
    Converter::new().convert(input, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_convert_markdown_to_html() {
        let result = convert("# Title\n\nSome *text* here.\n", "html5").unwrap();
        assert_eq!(result, "<h1>Title</h1><p>Some <em>text</em> here.</p>");
    }

    #[test]
    fn test_convert_list_shares_wrapper() {
        let result = convert("- a\n- b\n", "html5").unwrap();
        assert_eq!(result, "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_convert_html_to_markdown() {
        let result = convert("<h2>Sub</h2><p>Hello <strong>there</strong>.</p>", "md").unwrap();
        assert_eq!(result, "## Sub\n\nHello __there__.\n");
    }

    #[test]
    fn test_convert_html_keeps_space_between_spans() {
        let result = convert("<p><b>bold</b> <i>italic</i></p>", "md").unwrap();
        assert_eq!(result, "__bold__ _italic_\n");
    }

    #[test]
    fn test_unknown_target() {
        let err = convert("text", "docx").unwrap_err();
        assert!(matches!(err, ConvertError::UnknownTarget(ref t) if t == "docx"));
    }

    #[test]
    fn test_error_messages() {
        let mismatch = FormatMismatch::new(Format::Html5, "unsupported tag <TABLE>");
        assert_eq!(
            mismatch.to_string(),
            "html5 lowering rejected input: unsupported tag <TABLE>"
        );

        let err = ConvertError::Unrecognized {
            attempts: vec![mismatch.clone(), FormatMismatch::new(Format::Markdown, "x")],
        };
        assert_eq!(
            err.to_string(),
            "input matched no known format (2 lowering paths rejected it)"
        );
    }
}
