//! Lowering: turn input in a known notation into the standardized tree.
//!
//! Each format has one lowering path. The dispatcher in [`standardize`]
//! tries them in [`Format::DETECTION_ORDER`] and keeps the first tree that
//! is produced without a [`FormatMismatch`].

mod blocks;
mod dom;
mod inline;
mod merge;
mod syntax;

use markbridge_core::{Document, Format};
use tracing::debug;

#[cfg(feature = "html")]
use crate::node::DomKind;
use crate::node::{DomNode, Node};
use crate::{ConvertError, FormatMismatch, Result};

pub use dom::standardize_dom;

/// Input handed to the dispatcher
#[derive(Debug, Clone)]
pub enum Source<'a, D: DomNode = Node> {
    /// Raw text in an unknown notation
    Text(&'a str),
    /// An element tree produced by some HTML parser
    Dom(&'a D),
}

/// Lower Markdown text into a document tree
pub fn standardize_markdown(input: &str) -> Result<Document> {
    let lines: Vec<String> = input.lines().map(str::to_string).collect();
    let merged = merge::merge_continuations(lines);
    let nodes = blocks::segment_blocks(&merged)?;
    Ok(Document::from_nodes(nodes))
}

/// Run one format's lowering path against `source`
fn standardize_as<D: DomNode>(format: Format, source: &Source<'_, D>) -> Result<Document> {
    match (format, source) {
        (Format::Html5, Source::Dom(dom)) => standardize_dom(*dom),
        (Format::Html5, Source::Text(text)) => standardize_html_text(text),
        (Format::Markdown, Source::Text(text)) => standardize_markdown(text),
        (Format::Markdown, Source::Dom(_)) => Err(FormatMismatch::new(
            Format::Markdown,
            "markdown lowering requires text input",
        )
        .into()),
    }
}

#[cfg(feature = "html")]
fn standardize_html_text(text: &str) -> Result<Document> {
    if !text.trim_start().starts_with('<') {
        return Err(FormatMismatch::new(Format::Html5, "input does not start with markup").into());
    }
    let root = crate::html::parse_html(text);
    let has_element = root
        .child_nodes()
        .iter()
        .any(|child| matches!(child.kind(), DomKind::Element(_)));
    if !has_element {
        return Err(FormatMismatch::new(Format::Html5, "markup contains no elements").into());
    }
    standardize_dom(&root)
}

#[cfg(not(feature = "html"))]
fn standardize_html_text(_text: &str) -> Result<Document> {
    Err(FormatMismatch::new(Format::Html5, "HTML string parsing is disabled").into())
}

/// Detect the input format and lower it.
///
/// Lowering paths are tried in [`Format::DETECTION_ORDER`]; a path that
/// rejects the input with a [`FormatMismatch`] hands over to the next one.
/// Any other error ends detection. When every path rejects the input the
/// result is [`ConvertError::Unrecognized`].
pub fn standardize<D: DomNode>(source: &Source<'_, D>) -> Result<Document> {
    let mut attempts = Vec::new();

    for format in Format::DETECTION_ORDER {
        match standardize_as(format, source) {
            Ok(document) => {
                document.validate()?;
                debug!(%format, nodes = document.nodes().len(), "input lowered");
                return Ok(document);
            }
            Err(ConvertError::Mismatch(mismatch)) => {
                debug!(%format, reason = %mismatch.reason, "lowering path rejected input");
                attempts.push(mismatch);
            }
            Err(other) => return Err(other),
        }
    }

    Err(ConvertError::Unrecognized { attempts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use markbridge_core::{ListType, Node as TreeNode};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_markdown_text_falls_through_to_markdown() {
        let doc = standardize::<Node>(&Source::Text("# Title\n\nbody")).unwrap();
        assert_eq!(
            doc.nodes(),
            &[
                TreeNode::header(1, "Title"),
                TreeNode::Paragraph(vec![TreeNode::text("body")]),
            ]
        );
    }

    #[cfg(feature = "html")]
    #[test]
    fn test_markup_is_lowered_as_html() {
        let doc = standardize::<Node>(&Source::Text("<ul><li>a</li></ul>")).unwrap();
        assert_eq!(
            doc.nodes(),
            &[TreeNode::ListItem {
                list_type: ListType::Unordered,
                children: vec![TreeNode::text("a")],
            }]
        );
    }

    #[cfg(feature = "html")]
    #[test]
    fn test_unsupported_markup_falls_back_to_markdown() {
        let doc = standardize::<Node>(&Source::Text("<table><tr><td>x</td></tr></table>")).unwrap();
        assert_eq!(doc.nodes().len(), 1);
        assert!(matches!(doc.nodes()[0], TreeNode::Paragraph(_)));
    }

    #[cfg(feature = "html")]
    #[test]
    fn test_text_without_elements_is_markdown() {
        let doc = standardize::<Node>(&Source::Text("<3 love")).unwrap();
        assert_eq!(
            doc.nodes(),
            &[TreeNode::Paragraph(vec![TreeNode::text("<3 love")])]
        );
    }

    #[test]
    fn test_unrecognized_dom_reports_every_attempt() {
        let root = Node::with_children("div", vec![Node::element("table")]);
        let err = standardize(&Source::Dom(&root)).unwrap_err();
        match err {
            ConvertError::Unrecognized { attempts } => {
                let formats: Vec<Format> = attempts.iter().map(|a| a.format).collect();
                assert_eq!(formats, vec![Format::Html5, Format::Markdown]);
            }
            other => panic!("expected Unrecognized, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_text_is_an_empty_document() {
        let doc = standardize::<Node>(&Source::Text("")).unwrap();
        assert!(doc.is_empty());
    }
}
