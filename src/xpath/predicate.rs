//! Predicates attached to a path segment

use std::fmt;

use crate::error::{XPathError, XPathErrorKind};
use crate::xml::Node;

pub const PREDICATE_START: char = '[';
pub const PREDICATE_END: char = ']';
pub const EQUALITY_SYMBOL: char = '=';

/// A test applied to the node matched by a segment
///
/// New predicate kinds are added as variants plus an arm in [`Predicate::parse`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Predicate {
    Equality(Equality),
}

impl Predicate {
    /// Parse the text found between `[` and `]`
    pub fn parse(s: &str) -> Result<Self, XPathError> {
        if s.contains(EQUALITY_SYMBOL) {
            return Equality::parse(s).map(Self::Equality);
        }
        Err(XPathError::new(XPathErrorKind::UnknownPredicate {
            text: s.to_string(),
        }))
    }

    pub fn evaluate(&self, node: &Node) -> bool {
        match self {
            Self::Equality(eq) => eq.evaluate(node),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equality(eq) => write!(f, "{eq}"),
        }
    }
}

/// `left=right`: the first child named `left` has a first text child equal
/// to `right`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Equality {
    left: String,
    right: String,
}

impl Equality {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn parse(s: &str) -> Result<Self, XPathError> {
        let malformed = || {
            XPathError::new(XPathErrorKind::MalformedEquality {
                text: s.to_string(),
            })
        };
        let (left, right) = s.split_once(EQUALITY_SYMBOL).ok_or_else(malformed)?;
        if left.is_empty() || right.is_empty() || right.contains(EQUALITY_SYMBOL) {
            return Err(malformed());
        }
        Ok(Self::new(left, right))
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn right(&self) -> &str {
        &self.right
    }

    /// Text compared against the literal, if the lookup finds one
    pub fn find_value<'a>(&self, node: &'a Node) -> Option<&'a str> {
        node.child(&self.left)?.text_node()?.as_text()
    }

    pub fn evaluate(&self, node: &Node) -> bool {
        self.find_value(node) == Some(self.right.as_str())
    }
}

impl fmt::Display for Equality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{PREDICATE_START}{}{EQUALITY_SYMBOL}{}{PREDICATE_END}",
            self.left, self.right
        )
    }
}
