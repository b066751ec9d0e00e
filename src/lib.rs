//! xpathlite: query small XML documents with simple path expressions
//!
//! This crate provides functionality to:
//! - Parse a restricted subset of XML (elements and text only) into a tree
//! - Compile a restricted subset of XPath (child steps, `text()` and
//!   `[child=value]` predicates)
//! - Evaluate compiled paths against a tree, with typed extraction
//! - Serialize trees and paths back to their textual form
//!
//! Attributes, namespaces, entities, CDATA sections, processing instructions,
//! self-closing tags and XML declarations are not recognized. An element must
//! not contain, at any depth, another element with the same name.
//!
//! # Examples
//! ```
//! use xpathlite::{compile_path, parse_document};
//! # fn main() -> Result<(), xpathlite::Error> {
//! let doc = parse_document("<root><foo><bar>0</bar></foo><foo><bar>1</bar></foo></root>")?;
//! let path = compile_path("root/foo[bar=1]/bar/text()")?;
//! assert_eq!(path.evaluate_number(&doc), Some(1.0));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

use tracing::{debug, instrument};

pub mod error;
pub mod xml;
pub mod xpath;

// Re-exports
pub use error::{Error, Result, XPathError, XPathErrorKind, XmlError, XmlErrorKind};
pub use xml::{Element, FormatConfig, Formatter, Node, Parser, ParserConfig, PrettyFormatter};
pub use xpath::{Equality, PathCache, Predicate, Segment, XPathExpression};

/// Parse a document; `None` stands for absent input
///
/// Uses [`ParserConfig::default`], which rejects documents nested deeper
/// than [`xml::DEFAULT_MAX_DEPTH`] elements or larger than
/// [`xml::DEFAULT_MAX_SIZE`] bytes. Use [`Parser::with_config`] to change
/// either limit.
#[instrument(level = "debug", skip_all)]
pub fn parse_document<'a>(
    input: impl Into<Option<&'a str>>,
) -> std::result::Result<Node, XmlError> {
    Parser::new(input).parse()
}

/// Compile a path expression; `None` stands for absent input
#[instrument(level = "debug", skip_all)]
pub fn compile_path<'a>(
    path: impl Into<Option<&'a str>>,
) -> std::result::Result<XPathExpression, XPathError> {
    XPathExpression::parse(path)
}

/// Parse `document`, evaluate `path` on it and return owned copies of the
/// matches
#[instrument(level = "debug", skip(document))]
pub fn query(document: &str, path: &str) -> Result<Vec<Node>> {
    let root = parse_document(document)?;
    let path = compile_path(path)?;
    let matches: Vec<Node> = path.evaluate(&root).into_iter().cloned().collect();
    debug!(matches = matches.len(), "query evaluated");
    Ok(matches)
}
