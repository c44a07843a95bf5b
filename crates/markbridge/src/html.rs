//! HTML parsing support.
//!
//! This module parses HTML strings with `scraper` and converts the result
//! to the CDP-style [`Node`] structure that HTML lowering reads.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML fragment into a Node tree.
///
/// The returned root is the synthetic `html` element produced by fragment
/// parsing; its children are the top-level nodes of the input.
///
/// # Example
///
/// ```rust
/// use markbridge::{parse_html, Converter, Format};
///
/// let node = parse_html("<h1>Hello <em>World</em></h1>");
///
/// let converter = Converter::new();
/// let markdown = converter.convert_dom(&node, Format::Markdown).unwrap();
/// assert_eq!(markdown, "# Hello World\n");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    scraper_to_node(document.root_element())
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let mut node = Node::element(element.value().name());

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Comment(comment) => {
                node.add_child(Node::comment(&comment.comment));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
