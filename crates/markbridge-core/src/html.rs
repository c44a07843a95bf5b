//! HTML5 serialization
//!
//! Emits markup directly as a string. Consecutive list items of the same
//! type share one `<ol>`/`<ul>` wrapper.

use crate::ast::{Document, ListType, Node};
use crate::options::Options;

/// Serialize a document to HTML5 markup
pub fn to_html(document: &Document, options: &Options) -> String {
    let mut output = String::with_capacity(4096);

    match options.html_root_tag.as_deref() {
        Some(tag) => {
            open_tag(tag, &mut output);
            serialize_sequence(document.nodes(), &mut output);
            close_tag(tag, &mut output);
        }
        None => serialize_sequence(document.nodes(), &mut output),
    }

    output
}

/// Serialize sibling nodes, grouping runs of list items under one list element
fn serialize_sequence(nodes: &[Node], out: &mut String) {
    let mut open_list: Option<ListType> = None;

    for node in nodes {
        let list_type = match node {
            Node::ListItem { list_type, .. } => Some(*list_type),
            _ => None,
        };

        if open_list.is_some() && open_list != list_type {
            if let Some(previous) = open_list.take() {
                close_tag(previous.tag(), out);
            }
        }
        if list_type.is_some() && open_list.is_none() {
            if let Some(current) = list_type {
                open_tag(current.tag(), out);
            }
            open_list = list_type;
        }

        serialize_node(node, out);
    }

    if let Some(previous) = open_list {
        close_tag(previous.tag(), out);
    }
}

fn serialize_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&escape_text(text)),

        Node::LineBreak => out.push_str("<br/>"),

        Node::Header { level, text } => {
            let tag = format!("h{}", level);
            open_tag(&tag, out);
            out.push_str(&escape_text(text));
            close_tag(&tag, out);
        }

        Node::Paragraph(children) => serialize_wrapped("p", children, out),

        Node::ListItem { children, .. } => {
            open_tag("li", out);
            match children.as_slice() {
                [Node::Paragraph(inlines)] => serialize_children(inlines, out),
                [single] if single.is_inline() => serialize_node(single, out),
                _ => serialize_sequence(children, out),
            }
            close_tag("li", out);
        }

        Node::Blockquote(children) => serialize_wrapped("blockquote", children, out),

        Node::Strong(children) => serialize_wrapped("strong", children, out),

        Node::Emphasis(children) => serialize_wrapped("em", children, out),

        Node::Deleted(children) => serialize_wrapped("del", children, out),
    }
}

fn serialize_wrapped(tag: &str, children: &[Node], out: &mut String) {
    open_tag(tag, out);
    serialize_sequence(children, out);
    close_tag(tag, out);
}

fn serialize_children(children: &[Node], out: &mut String) {
    for child in children {
        serialize_node(child, out);
    }
}

fn open_tag(tag: &str, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Escape text content for HTML output
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(nodes: Vec<Node>) -> String {
        to_html(&Document::from_nodes(nodes), &Options::default())
    }

    fn item(list_type: ListType, text: &str) -> Node {
        Node::ListItem {
            list_type,
            children: vec![Node::Paragraph(vec![Node::text(text)])],
        }
    }

    #[test]
    fn test_header_and_paragraph() {
        let result = render(vec![
            Node::header(1, "Title"),
            Node::Paragraph(vec![
                Node::text("Some "),
                Node::Emphasis(vec![Node::text("text")]),
                Node::text(" here."),
            ]),
        ]);
        assert_eq!(result, "<h1>Title</h1><p>Some <em>text</em> here.</p>");
    }

    #[test]
    fn test_same_type_items_share_wrapper() {
        let result = render(vec![
            item(ListType::Unordered, "a"),
            item(ListType::Unordered, "b"),
        ]);
        assert_eq!(result, "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_type_change_closes_wrapper() {
        let result = render(vec![
            item(ListType::Unordered, "a"),
            item(ListType::Ordered, "b"),
            Node::Paragraph(vec![Node::text("c")]),
            item(ListType::Ordered, "d"),
        ]);
        assert_eq!(
            result,
            "<ul><li>a</li></ul><ol><li>b</li></ol><p>c</p><ol><li>d</li></ol>"
        );
    }

    #[test]
    fn test_nested_list_item() {
        let result = render(vec![Node::ListItem {
            list_type: ListType::Unordered,
            children: vec![
                Node::Paragraph(vec![Node::text("outer")]),
                item(ListType::Ordered, "inner"),
            ],
        }]);
        assert_eq!(
            result,
            "<ul><li><p>outer</p><ol><li>inner</li></ol></li></ul>"
        );
    }

    #[test]
    fn test_inline_markup_and_breaks() {
        let result = render(vec![Node::Paragraph(vec![
            Node::Strong(vec![Node::text("b")]),
            Node::LineBreak,
            Node::Deleted(vec![Node::text("d")]),
        ])]);
        assert_eq!(result, "<p><strong>b</strong><br/><del>d</del></p>");
    }

    #[test]
    fn test_blockquote_and_escaping() {
        let result = render(vec![Node::Blockquote(vec![Node::Paragraph(vec![
            Node::text("a < b & c"),
        ])])]);
        assert_eq!(
            result,
            "<blockquote><p>a &lt; b &amp; c</p></blockquote>"
        );
    }

    #[test]
    fn test_root_tag_option() {
        let options = Options {
            html_root_tag: Some("div".to_string()),
            ..Default::default()
        };
        let doc = Document::from_nodes(vec![Node::header(2, "x")]);
        assert_eq!(to_html(&doc, &options), "<div><h2>x</h2></div>");
    }
}
