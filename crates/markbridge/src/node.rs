//! DOM reading interface and a CDP-style DOM node structure.
//!
//! HTML lowering only needs three things from an element tree: the tag name
//! (or literal text) of a node, its ordered children, and the combined text
//! of a subtree. [`DomNode`] captures exactly that, so any HTML parser can
//! feed the converter. [`Node`] is the bundled implementation, shaped like
//! the Chrome DevTools Protocol `DOM.Node`.

/// What a DOM node is, as seen by the lowering pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomKind<'a> {
    /// Element with its tag name (any case)
    Element(&'a str),
    /// Text node with its literal content
    Text(&'a str),
    /// Comments, processing instructions and similar nodes
    Other,
}

/// Minimal read-only view of an element tree
pub trait DomNode {
    fn kind(&self) -> DomKind<'_>;

    fn child_nodes(&self) -> Vec<&Self>;

    /// Combined text of this node and all descendants
    fn text_content(&self) -> String {
        match self.kind() {
            DomKind::Text(text) => text.to_string(),
            DomKind::Other => String::new(),
            DomKind::Element(_) => self
                .child_nodes()
                .into_iter()
                .map(|child| child.text_content())
                .collect(),
        }
    }
}

/// Node types matching DOM nodeType values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node (nodeType = 1)
    Element = 1,
    /// Text node (nodeType = 3)
    Text = 3,
    /// Comment node (nodeType = 8)
    Comment = 8,
    /// Document fragment node (nodeType = 11)
    DocumentFragment = 11,
}

/// A DOM node following the CDP DOM.Node structure.
#[derive(Debug, Clone)]
pub struct Node {
    /// Node type (1 = Element, 3 = Text, etc.)
    pub node_type: NodeType,

    /// Node name (uppercase for elements, e.g., "DIV", "#text" for text nodes)
    pub node_name: String,

    /// Text content for text and comment nodes
    pub node_value: Option<String>,

    /// Child nodes
    pub children: Option<Vec<Node>>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            node_name: tag_name.to_uppercase(),
            node_value: None,
            children: Some(Vec::new()),
        }
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            node_name: "#text".to_string(),
            node_value: Some(content.to_string()),
            children: None,
        }
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Self {
            node_type: NodeType::Comment,
            node_name: "#comment".to_string(),
            node_value: Some(content.to_string()),
            children: None,
        }
    }

    /// Create a document fragment node
    pub fn document_fragment() -> Self {
        Self {
            node_type: NodeType::DocumentFragment,
            node_name: "#document-fragment".to_string(),
            node_value: None,
            children: Some(Vec::new()),
        }
    }

    /// Element with the given children, for building trees by hand
    pub fn with_children(tag_name: &str, children: Vec<Node>) -> Self {
        let mut node = Self::element(tag_name);
        node.children = Some(children);
        node
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Get the tag name (lowercase)
    pub fn tag_name(&self) -> String {
        self.node_name.to_lowercase()
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().flat_map(|c| c.iter())
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        if let Some(ref mut children) = self.children {
            children.push(child);
        } else {
            self.children = Some(vec![child]);
        }
    }
}

impl DomNode for Node {
    fn kind(&self) -> DomKind<'_> {
        match self.node_type {
            NodeType::Element => DomKind::Element(&self.node_name),
            NodeType::Text => DomKind::Text(self.node_value.as_deref().unwrap_or("")),
            // a fragment behaves like a transparent container
            NodeType::DocumentFragment => DomKind::Element("DIV"),
            NodeType::Comment => DomKind::Other,
        }
    }

    fn child_nodes(&self) -> Vec<&Self> {
        self.children().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element() {
        let node = Node::element("div");
        assert!(node.is_element());
        assert_eq!(node.tag_name(), "div");
        assert_eq!(node.node_name, "DIV");
        assert_eq!(node.kind(), DomKind::Element("DIV"));
    }

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert!(node.is_text());
        assert_eq!(node.kind(), DomKind::Text("Hello World"));
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_children() {
        let mut parent = Node::element("div");
        parent.add_child(Node::text("Hello"));
        parent.add_child(Node::element("span"));
        parent.add_child(Node::comment("ignored"));

        assert_eq!(parent.child_nodes().len(), 3);
        assert_eq!(parent.child_nodes()[2].kind(), DomKind::Other);
    }

    #[test]
    fn test_text_content() {
        let mut div = Node::element("div");
        div.add_child(Node::text("Hello "));
        div.add_child(Node::with_children("span", vec![Node::text("World")]));
        div.add_child(Node::comment("not text"));

        assert_eq!(div.text_content(), "Hello World");
    }

    #[test]
    fn test_fragment_reads_as_container() {
        let fragment = Node::document_fragment();
        assert_eq!(fragment.kind(), DomKind::Element("DIV"));
    }
}
