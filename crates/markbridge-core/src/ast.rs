//! Standardized document tree
//!
//! Both lowering paths (Markdown text and HTML element trees) produce this
//! tree and both serializers consume it. Node kinds form a closed set; the
//! content rules of each kind are enforced by [`Node::push`] while a tree is
//! built and can be re-checked with [`Document::validate`].

use std::fmt;

/// Highest header level representable in both output formats
pub const MAX_HEADER_LEVEL: u8 = 6;

/// Errors raised when a node is given content its kind does not allow
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("{kind} cannot contain other nodes")]
    LeafContent { kind: NodeKind },

    #[error("{parent} may only contain inline content, got {child}")]
    NotInline { parent: NodeKind, child: NodeKind },
}

/// List flavour carried by every list item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListType {
    Ordered,
    #[default]
    Unordered,
}

impl ListType {
    /// HTML tag name of the enclosing list element
    pub const fn tag(&self) -> &'static str {
        match self {
            ListType::Ordered => "ol",
            ListType::Unordered => "ul",
        }
    }
}

/// Discriminant of [`Node`], used in error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Text,
    LineBreak,
    Header,
    Paragraph,
    ListItem,
    Blockquote,
    Strong,
    Emphasis,
    Deleted,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Text => "text node",
            NodeKind::LineBreak => "line break",
            NodeKind::Header => "header",
            NodeKind::Paragraph => "paragraph",
            NodeKind::ListItem => "list item",
            NodeKind::Blockquote => "blockquote",
            NodeKind::Strong => "strong text",
            NodeKind::Emphasis => "emphasized text",
            NodeKind::Deleted => "deleted text",
        };
        f.write_str(name)
    }
}

/// A node of the standardized tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text
    Text(String),

    /// Explicit line break
    LineBreak,

    /// Header with level (1-6) and literal text
    Header { level: u8, text: String },

    /// Paragraph of inline content
    Paragraph(Vec<Node>),

    /// List item holding block or inline content
    ListItem {
        list_type: ListType,
        children: Vec<Node>,
    },

    /// Block quote
    Blockquote(Vec<Node>),

    /// Strong emphasis (bold)
    Strong(Vec<Node>),

    /// Emphasis (italic)
    Emphasis(Vec<Node>),

    /// Struck-through text
    Deleted(Vec<Node>),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Create a header, clamping the level into `1..=MAX_HEADER_LEVEL`
    pub fn header(level: usize, text: impl Into<String>) -> Self {
        let clamped = level.clamp(1, MAX_HEADER_LEVEL as usize) as u8;
        Node::Header {
            level: clamped,
            text: text.into(),
        }
    }

    pub fn paragraph() -> Self {
        Node::Paragraph(Vec::new())
    }

    pub fn list_item(list_type: ListType) -> Self {
        Node::ListItem {
            list_type,
            children: Vec::new(),
        }
    }

    pub fn blockquote() -> Self {
        Node::Blockquote(Vec::new())
    }

    pub fn strong() -> Self {
        Node::Strong(Vec::new())
    }

    pub fn emphasis() -> Self {
        Node::Emphasis(Vec::new())
    }

    pub fn deleted() -> Self {
        Node::Deleted(Vec::new())
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Text(_) => NodeKind::Text,
            Node::LineBreak => NodeKind::LineBreak,
            Node::Header { .. } => NodeKind::Header,
            Node::Paragraph(_) => NodeKind::Paragraph,
            Node::ListItem { .. } => NodeKind::ListItem,
            Node::Blockquote(_) => NodeKind::Blockquote,
            Node::Strong(_) => NodeKind::Strong,
            Node::Emphasis(_) => NodeKind::Emphasis,
            Node::Deleted(_) => NodeKind::Deleted,
        }
    }

    /// Check if this node may appear inside a paragraph
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            Node::Text(_) | Node::LineBreak | Node::Strong(_) | Node::Emphasis(_) | Node::Deleted(_)
        )
    }

    /// Check if this node kind never holds children
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Text(_) | Node::LineBreak | Node::Header { .. })
    }

    /// Literal text payload, if this kind carries one
    pub fn text_payload(&self) -> Option<&str> {
        match self {
            Node::Text(text) | Node::Header { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Child nodes (empty for leaves)
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Paragraph(children)
            | Node::ListItem { children, .. }
            | Node::Blockquote(children)
            | Node::Strong(children)
            | Node::Emphasis(children)
            | Node::Deleted(children) => children,
            Node::Text(_) | Node::LineBreak | Node::Header { .. } => &[],
        }
    }

    /// Append a child, enforcing the content rules of this node's kind
    pub fn push(&mut self, child: Node) -> Result<(), TreeError> {
        let parent = self.kind();
        match self {
            Node::Text(_) | Node::LineBreak | Node::Header { .. } => {
                Err(TreeError::LeafContent { kind: parent })
            }
            Node::Paragraph(children)
            | Node::Strong(children)
            | Node::Emphasis(children)
            | Node::Deleted(children) => {
                if !child.is_inline() {
                    return Err(TreeError::NotInline {
                        parent,
                        child: child.kind(),
                    });
                }
                children.push(child);
                Ok(())
            }
            Node::ListItem { children, .. } | Node::Blockquote(children) => {
                children.push(child);
                Ok(())
            }
        }
    }

    /// Builder form of [`Node::push`]
    pub fn with_children<I>(mut self, children: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = Node>,
    {
        for child in children {
            self.push(child)?;
        }
        Ok(self)
    }

    /// Re-check the content rules of this node and all descendants
    pub fn validate(&self) -> Result<(), TreeError> {
        let parent = self.kind();
        let inline_only = matches!(
            self,
            Node::Paragraph(_) | Node::Strong(_) | Node::Emphasis(_) | Node::Deleted(_)
        );
        for child in self.children() {
            if inline_only && !child.is_inline() {
                return Err(TreeError::NotInline {
                    parent,
                    child: child.kind(),
                });
            }
            child.validate()?;
        }
        Ok(())
    }
}

/// Root of a standardized tree
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// The root accepts any node kind
    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn validate(&self) -> Result<(), TreeError> {
        self.nodes.iter().try_for_each(Node::validate)
    }
}

impl Extend<Node> for Document {
    fn extend<I: IntoIterator<Item = Node>>(&mut self, iter: I) {
        self.nodes.extend(iter);
    }
}
