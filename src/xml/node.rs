//! XML data model

use std::fmt;

/// Name reported by [`Node::name`] for text nodes
pub const TEXT_NODE_NAME: &str = "CDATA";

/// A node of a parsed document
///
/// Every child is owned by exactly one parent and nodes carry no back
/// reference, so a tree is acyclic by construction.
#[derive(Clone, Debug)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// A named element and its children in document order
///
/// Fields are read-only outside the crate; a parsed tree is never mutated.
///
/// ```compile_fail
/// let mut node = xpathlite::parse_document("<a></a>").unwrap();
/// if let xpathlite::Node::Element(el) = &mut node {
///     el.name.push('b');
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) children: Vec<Node>,
}

impl Element {
    pub fn with_children(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

impl Node {
    pub fn element(name: impl Into<String>, children: Vec<Self>) -> Self {
        Self::Element(Element::with_children(name, children))
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Element name, or [`TEXT_NODE_NAME`] for a text node
    pub fn name(&self) -> &str {
        match self {
            Self::Element(el) => el.name(),
            Self::Text(_) => TEXT_NODE_NAME,
        }
    }

    /// Direct children; always empty for a text node
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Element(el) => el.children(),
            Self::Text(_) => &[],
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Element(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// First direct text child. A text node is its own text node.
    pub fn text_node(&self) -> Option<&Self> {
        match self {
            Self::Text(_) => Some(self),
            Self::Element(el) => el.children.iter().find(|child| child.is_text()),
        }
    }

    /// First direct child with the given name
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children().iter().find(|child| child.name() == name)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Element(left), Self::Element(right)) => left == right,
            (Self::Text(left), Self::Text(right)) => left == right,
            _ => false,
        }
    }
}

// Children compare as a multiset only in one direction: equal counts and
// every child of `other` present somewhere in `self`.
impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.children.len() == other.children.len()
            && other
                .children
                .iter()
                .all(|child| self.children.contains(child))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(el) => write!(f, "{el}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.name)?;
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.name)
    }
}
