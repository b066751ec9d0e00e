//! Compiled path expressions and their evaluation
//!
//! A path is evaluated against a root node one tree level per segment. There
//! is no descendant search, so a path of `k` element segments only matches
//! nodes exactly `k - 1` levels below the root it is evaluated on.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{XPathError, XPathErrorKind};
use crate::xml::Node;
use crate::xpath::segment::Segment;

pub const PATH_SEPARATOR: char = '/';

/// A compiled path: a non-empty sequence of segments
///
/// Immutable once compiled. `Clone` is a deep copy that shares nothing with
/// its source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XPathExpression {
    segments: Vec<Segment>,
}

impl XPathExpression {
    /// Compile a path; `None` stands for absent input
    ///
    /// The path is split on every `/`. Trailing separators are dropped, but
    /// inner and leading empty parts become segments with an empty element
    /// name. A path with no other parts (`""`, `"/"`) compiles to one such
    /// segment.
    pub fn parse<'a>(s: impl Into<Option<&'a str>>) -> Result<Self, XPathError> {
        let s = s
            .into()
            .ok_or_else(|| XPathError::new(XPathErrorKind::MissingInput))?;
        let segments = s
            .trim_end_matches(PATH_SEPARATOR)
            .split(PATH_SEPARATOR)
            .map(Segment::parse)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(path = s, segments = segments.len(), "compiled path");
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Every node matched by the path, duplicates collapsed by node equality
    pub fn evaluate<'a>(&self, root: &'a Node) -> Vec<&'a Node> {
        let mut result = Vec::new();
        evaluate_segments(&self.segments, root, &mut result);
        result
    }

    /// One arbitrary match (the first found), if any
    pub fn evaluate_any<'a>(&self, root: &'a Node) -> Option<&'a Node> {
        self.evaluate(root).into_iter().next()
    }

    /// Text of [`evaluate_any`](Self::evaluate_any), or `""` when that is
    /// absent or not a text node
    pub fn evaluate_string<'a>(&self, root: &'a Node) -> &'a str {
        self.evaluate_any(root)
            .and_then(Node::as_text)
            .unwrap_or_default()
    }

    /// Numeric value of [`evaluate_any`](Self::evaluate_any)
    pub fn evaluate_number(&self, root: &Node) -> Option<f64> {
        self.evaluate_any(root)
            .and_then(Node::as_text)
            .and_then(parse_number)
    }

    /// Text of every text node matched; other nodes are skipped
    pub fn evaluate_strings<'a>(&self, root: &'a Node) -> Vec<&'a str> {
        self.evaluate(root)
            .into_iter()
            .filter_map(Node::as_text)
            .collect()
    }

    /// Numeric value of every matched text node that holds a number
    pub fn evaluate_numbers(&self, root: &Node) -> Vec<f64> {
        self.evaluate(root)
            .into_iter()
            .filter_map(Node::as_text)
            .filter_map(parse_number)
            .collect()
    }
}

fn evaluate_segments<'a>(segments: &[Segment], node: &'a Node, result: &mut Vec<&'a Node>) {
    let Some((first, rest)) = segments.split_first() else {
        return;
    };

    let (name, predicates) = match first {
        Segment::Text => {
            if node.is_text() {
                insert(result, node);
            }
            return;
        }
        Segment::Named { name, predicates } => (name, predicates),
    };

    if name != node.name() {
        return;
    }
    if let Some(failed) = predicates.iter().find(|p| !p.evaluate(node)) {
        trace!(node = node.name(), predicate = %failed, "branch pruned");
        return;
    }
    if rest.is_empty() {
        insert(result, node);
        return;
    }
    for child in node.children() {
        evaluate_segments(rest, child, result);
    }
}

fn insert<'a>(result: &mut Vec<&'a Node>, node: &'a Node) {
    if !result.iter().any(|seen| *seen == node) {
        result.push(node);
    }
}

/// Parse a number the way an English locale reads it: surrounding
/// whitespace is ignored and `,` may group the digits before the decimal
/// point. Non-finite values are not numbers.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    let value: f64 = if text.contains(',') {
        let (int_part, fraction) = text.split_once('.').unwrap_or((text, ""));
        if fraction.contains([',', '.']) {
            return None;
        }
        let digits = int_part.trim_start_matches(['-', '+']);
        let mut groups = digits.split(',');
        let head_ok = groups
            .next()
            .is_some_and(|g| (1..=3).contains(&g.len()));
        if !head_ok || !groups.all(|g| g.len() == 3) {
            return None;
        }
        text.replace(',', "").parse().ok()?
    } else {
        text.parse().ok()?
    };
    value.is_finite().then_some(value)
}

impl FromStr for XPathExpression {
    type Err = XPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for XPathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{PATH_SEPARATOR}")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::Parser;
    use std::error::Error;

    fn doc(s: &str) -> Result<Node, Box<dyn Error>> {
        Ok(Parser::new(s).parse()?)
    }

    #[test]
    fn test_empty_path() -> Result<(), Box<dyn Error>> {
        let path = XPathExpression::parse("")?;
        assert_eq!(path.segments(), &[Segment::named("", vec![])]);
        assert!(path.evaluate(&doc("<a></a>")?).is_empty());
        Ok(())
    }

    #[test]
    fn test_trailing_separators_dropped() -> Result<(), Box<dyn Error>> {
        let root = doc("<a><b>1</b></a>")?;
        let path = XPathExpression::parse("a/b/")?;
        assert_eq!(path.segments().len(), 2);
        assert_eq!(path, XPathExpression::parse("a/b")?);
        assert_eq!(path.evaluate(&root).len(), 1);

        let path = XPathExpression::parse("/")?;
        assert_eq!(path.segments(), &[Segment::named("", vec![])]);
        assert_eq!(XPathExpression::parse("/a")?.segments().len(), 2);
        Ok(())
    }

    #[test]
    fn test_missing_input() {
        assert_eq!(
            XPathExpression::parse(None).map_err(|e| e.kind().clone()),
            Err(XPathErrorKind::MissingInput)
        );
    }

    #[test]
    fn test_root_match() -> Result<(), Box<dyn Error>> {
        let root = doc("<a></a>")?;
        let path = XPathExpression::parse("a")?;
        assert_eq!(path.evaluate(&root), vec![&root]);
        Ok(())
    }

    #[test]
    fn test_text_step_stops_recursion() -> Result<(), Box<dyn Error>> {
        let root = doc("<a>1</a>")?;
        let path = XPathExpression::parse("a/text()/b")?;
        assert_eq!(path.evaluate_strings(&root), vec!["1"]);
        Ok(())
    }

    #[test]
    fn test_duplicates_collapse() -> Result<(), Box<dyn Error>> {
        let root = doc("<root><a>1</a><a>1</a><a>2</a></root>")?;
        let path = XPathExpression::parse("root/a")?;
        assert_eq!(path.evaluate(&root).len(), 2);
        Ok(())
    }

    #[test]
    fn test_no_level_skipping() -> Result<(), Box<dyn Error>> {
        let root = doc("<root><x><a>1</a></x></root>")?;
        assert!(XPathExpression::parse("root/a")?.evaluate(&root).is_empty());
        assert_eq!(XPathExpression::parse("root/x/a")?.evaluate(&root).len(), 1);
        Ok(())
    }

    #[test]
    fn test_typed_extraction() -> Result<(), Box<dyn Error>> {
        let root = doc("<root><a>1</a><a>x</a><a>2.5</a><b><c></c></b></root>")?;
        let text = XPathExpression::parse("root/a/text()")?;
        assert_eq!(text.evaluate_strings(&root), vec!["1", "x", "2.5"]);
        assert_eq!(text.evaluate_numbers(&root), vec![1.0, 2.5]);
        assert_eq!(text.evaluate_string(&root), "1");
        assert_eq!(text.evaluate_number(&root), Some(1.0));

        let element = XPathExpression::parse("root/b")?;
        assert_eq!(element.evaluate_string(&root), "");
        assert_eq!(element.evaluate_number(&root), None);
        assert!(element.evaluate_strings(&root).is_empty());

        let missing = XPathExpression::parse("root/zzz")?;
        assert!(missing.evaluate_any(&root).is_none());
        assert_eq!(missing.evaluate_string(&root), "");
        Ok(())
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 42 "), Some(42.0));
        assert_eq!(parse_number("-3.5"), Some(-3.5));
        assert_eq!(parse_number("1,234.5"), Some(1234.5));
        assert_eq!(parse_number("1,23"), None);
        assert_eq!(parse_number("1,234.5,6"), None);
        assert_eq!(parse_number("1,234.5.6"), None);
        assert_eq!(parse_number("1.5,6"), None);
        assert_eq!(parse_number("12,345,678.25"), Some(12_345_678.25));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_display() -> Result<(), XPathError> {
        for s in ["a/b/text()", "root/foo[bar=0][baz=1]/x", "", "[a=0]", "a//b"] {
            assert_eq!(XPathExpression::parse(s)?.to_string(), s);
        }
        Ok(())
    }

    #[test]
    fn test_clone_is_independent() -> Result<(), Box<dyn Error>> {
        let root = doc("<r><a>1</a></r>")?;
        let path = XPathExpression::parse("r/a")?;
        let copy = path.clone();
        drop(path);
        assert_eq!(copy.evaluate(&root).len(), 1);
        Ok(())
    }
}
