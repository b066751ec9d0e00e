//! Error types for xpathlite
//!
//! Both grammars fail the same way: a single "parse failed" error carrying a
//! human readable reason. Document errors and path errors are kept apart so a
//! caller can tell which input to fix.

use std::fmt;
use thiserror::Error;

/// Reason a document failed to parse
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum XmlErrorKind {
    /// No input was supplied at all
    MissingInput,
    /// A `<` without a following `>`
    UnclosedBracket,
    /// No literal `</name>` for an opened element
    MissingClosingTag { name: String },
    MaxDepthExceeded { max: usize },
    MaxSizeExceeded { max: usize },
}

impl fmt::Display for XmlErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput => write!(f, "input missing"),
            Self::UnclosedBracket => write!(f, "closing bracket not found"),
            Self::MissingClosingTag { name } => {
                write!(f, "closing element {name} not found")
            }
            Self::MaxDepthExceeded { max } => write!(f, "max depth exceeded: {max}"),
            Self::MaxSizeExceeded { max } => write!(f, "max size exceeded: {max}"),
        }
    }
}

/// Reason a path expression failed to compile
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum XPathErrorKind {
    /// No input was supplied at all
    MissingInput,
    /// An element name containing `]`
    BracketInName { name: String },
    /// Text after the element name that does not open with `[`
    PredicateStart,
    /// A `[` with no matching `]`
    PredicateEnd,
    /// Predicate text that no predicate kind accepts
    UnknownPredicate { text: String },
    /// An equality without exactly two non-empty members
    MalformedEquality { text: String },
}

impl fmt::Display for XPathErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput => write!(f, "input missing"),
            Self::BracketInName { name } => write!(f, "element name {name} contains ]"),
            Self::PredicateStart => write!(f, "predicate does not start with ["),
            Self::PredicateEnd => write!(f, "predicate does not end with ]"),
            Self::UnknownPredicate { text } => write!(f, "could not parse predicate {text}"),
            Self::MalformedEquality { text } => {
                write!(f, "equality must have exactly two non-empty members: {text}")
            }
        }
    }
}

/// Error raised while parsing a document
#[derive(Error, Clone, Debug, PartialEq)]
#[error("xml parse error: {message}")]
pub struct XmlError {
    kind: XmlErrorKind,
    message: String,
}

impl XmlError {
    pub fn new(kind: XmlErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    pub fn kind(&self) -> &XmlErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error raised while compiling a path expression
#[derive(Error, Clone, Debug, PartialEq)]
#[error("xpath parse error: {message}")]
pub struct XPathError {
    kind: XPathErrorKind,
    message: String,
}

impl XPathError {
    pub fn new(kind: XPathErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    pub fn kind(&self) -> &XPathErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Any error the library can raise
#[derive(Error, Clone, Debug, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Xml(#[from] XmlError),
    #[error(transparent)]
    XPath(#[from] XPathError),
}

/// Result type alias for xpathlite
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_error_display() {
        let err = XmlError::new(XmlErrorKind::MissingClosingTag {
            name: "b".to_string(),
        });
        assert_eq!(err.to_string(), "xml parse error: closing element b not found");
        assert_eq!(err.message(), "closing element b not found");
    }

    #[test]
    fn test_xpath_error_kind() {
        let err = XPathError::new(XPathErrorKind::PredicateEnd);
        assert_eq!(err.kind(), &XPathErrorKind::PredicateEnd);
        assert!(err.to_string().starts_with("xpath parse error"));
    }

    #[test]
    fn test_umbrella_conversion() {
        let err: Error = XPathError::new(XPathErrorKind::MissingInput).into();
        assert!(matches!(err, Error::XPath(_)));
        assert_eq!(err.to_string(), "xpath parse error: input missing");
    }
}
