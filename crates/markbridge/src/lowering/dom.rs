//! HTML lowering: map an element tree onto the document tree.

use markbridge_core::{collapse_whitespace, Document, Format, ListType, Node as TreeNode};

use crate::node::{DomKind, DomNode};
use crate::{FormatMismatch, Result};

/// Lower an element tree. The root acts as a container: only its children
/// are lowered.
pub fn standardize_dom<D: DomNode>(root: &D) -> Result<Document> {
    Ok(Document::from_nodes(lower_children(root, None)?))
}

fn lower_children<D: DomNode>(node: &D, list: Option<ListType>) -> Result<Vec<TreeNode>> {
    let mut lowered = Vec::new();
    for child in node.child_nodes() {
        lowered.extend(lower_node(child, list)?);
    }
    Ok(lowered)
}

fn mismatch(reason: String) -> crate::ConvertError {
    FormatMismatch::new(Format::Html5, reason).into()
}

fn header_level(tag: &str) -> Option<usize> {
    let level = tag.strip_prefix('H')?.parse::<usize>().ok()?;
    (1..=6).contains(&level).then_some(level)
}

/// The trimmed text of a node whose only child is a non-blank text node
fn collapsed_text<D: DomNode>(node: &D) -> Option<String> {
    match node.child_nodes().as_slice() {
        [only] => match only.kind() {
            DomKind::Text(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
            _ => None,
        },
        _ => None,
    }
}

/// Collapse a single text child, otherwise lower all children with the
/// list context cleared
fn collapse_or_lower<D: DomNode>(node: &D) -> Result<Vec<TreeNode>> {
    match collapsed_text(node) {
        Some(text) => Ok(vec![TreeNode::text(text)]),
        None => lower_children(node, None),
    }
}

/// Lower the children of an inline-only element. Whitespace between inline
/// siblings separates words, so it becomes a single space instead of being
/// dropped.
fn inline_container<D: DomNode>(container: TreeNode, node: &D, tag: &str) -> Result<TreeNode> {
    let mut children = Vec::new();
    for child in node.child_nodes() {
        match child.kind() {
            DomKind::Text(text) if text.trim().is_empty() && !text.is_empty() => {
                children.push(TreeNode::text(" "));
            }
            _ => children.extend(lower_node(child, None)?),
        }
    }
    if let Some(block) = children.iter().find(|child| !child.is_inline()) {
        return Err(mismatch(format!(
            "<{tag}> may only hold inline content, found {}",
            block.kind()
        )));
    }
    Ok(container.with_children(children)?)
}

fn lower_node<D: DomNode>(node: &D, list: Option<ListType>) -> Result<Vec<TreeNode>> {
    let tag = match node.kind() {
        DomKind::Text(text) if text.trim().is_empty() => return Ok(Vec::new()),
        DomKind::Text(text) => return Ok(vec![TreeNode::text(text)]),
        DomKind::Other => return Ok(Vec::new()),
        DomKind::Element(tag) => tag.to_ascii_uppercase(),
    };

    let lowered = match tag.as_str() {
        "P" => inline_container(TreeNode::paragraph(), node, &tag)?,
        "B" | "STRONG" => inline_container(TreeNode::strong(), node, &tag)?,
        "I" | "EM" => inline_container(TreeNode::emphasis(), node, &tag)?,
        "DEL" => inline_container(TreeNode::deleted(), node, &tag)?,
        "BR" => TreeNode::LineBreak,
        "OL" => return lower_children(node, Some(ListType::Ordered)),
        "UL" => return lower_children(node, Some(ListType::Unordered)),
        "DIV" => return lower_children(node, None),
        "LI" => {
            TreeNode::list_item(list.unwrap_or_default()).with_children(collapse_or_lower(node)?)?
        }
        "BLOCKQUOTE" => TreeNode::blockquote().with_children(collapse_or_lower(node)?)?,
        other => match header_level(other) {
            Some(level) => {
                let text = collapse_whitespace(&node.text_content());
                TreeNode::header(level, text.trim())
            }
            None => return Err(mismatch(format!("unsupported tag <{other}>"))),
        },
    };

    Ok(vec![lowered])
}
