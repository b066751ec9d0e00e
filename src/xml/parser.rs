//! XML parser implementation
//!
//! A single pass recursive descent over the input string. There is no
//! tokenizer: an element is read by locating the first `>` after its `<` and
//! then searching for the literal closing tag `</name>`. This is why nested
//! elements may not reuse the name of an enclosing element.

use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{XmlError, XmlErrorKind};
use crate::xml::config::{ParserConfig, ParsingContext};
use crate::xml::node::{Element, Node};

/// XML parser
#[derive(Debug)]
pub struct Parser<'a> {
    input: Option<&'a str>,
    config: ParserConfig,
    context: ParsingContext,
}

impl<'a> Parser<'a> {
    /// Create a new XML parser; `None` stands for absent input
    pub fn new(input: impl Into<Option<&'a str>>) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    pub fn with_config(input: impl Into<Option<&'a str>>, config: ParserConfig) -> Self {
        Self {
            input: input.into(),
            config,
            context: ParsingContext::new(),
        }
    }

    /// Parse the whole input into a single node
    ///
    /// Input that does not start with `<` once trimmed is one text node.
    /// Otherwise the trimmed input must be exactly one element, ending with
    /// the closing tag of its opening tag.
    pub fn parse(&mut self) -> Result<Node, XmlError> {
        let input = self
            .input
            .ok_or_else(|| XmlError::new(XmlErrorKind::MissingInput))?;
        self.config.validate_size(input.len())?;
        debug!(len = input.len(), "parsing document");

        let input = input.trim();
        if !input.starts_with('<') {
            return Ok(Node::Text(input.to_string()));
        }

        let (name, body_start) = opening_tag(input)?;
        let closing = closing_tag(name);
        if !input.ends_with(&closing) {
            return Err(missing_closing_tag(name));
        }
        let body = input
            .len()
            .checked_sub(closing.len())
            .and_then(|body_end| input.get(body_start..body_end))
            .ok_or_else(|| missing_closing_tag(name))?;

        let root = self.parse_element(name, body)?;
        debug!(root = %root.name, "document parsed");
        Ok(Node::Element(root))
    }

    fn parse_element(&mut self, name: &str, body: &str) -> Result<Element, XmlError> {
        self.context.enter_nested(&self.config)?;
        trace!(element = name, depth = self.context.depth(), "entering element");
        let children = self.parse_content(body.trim())?;
        self.context.exit_nested();
        Ok(Element::with_children(name, children))
    }

    /// Consume element content left to right: text runs up to the next `<`
    /// and whole nested elements, re-trimming after each child.
    fn parse_content(&mut self, content: &str) -> Result<Vec<Node>, XmlError> {
        let mut children = Vec::new();
        let mut rest = content;

        while !rest.is_empty() {
            let consumed = if rest.starts_with('<') {
                let (name, body_start) = opening_tag(rest)?;
                let closing = closing_tag(name);
                let close_pos = rest
                    .get(body_start..)
                    .and_then(|tail| tail.find(&closing))
                    .map(|pos| pos + body_start)
                    .ok_or_else(|| missing_closing_tag(name))?;
                let body = rest
                    .get(body_start..close_pos)
                    .ok_or_else(|| missing_closing_tag(name))?;
                let child = self.parse_element(name, body)?;
                children.push(Node::Element(child));
                close_pos + closing.len()
            } else {
                let end = rest.find('<').unwrap_or(rest.len());
                let (text, _) = rest.split_at(end);
                children.push(Node::Text(text.to_string()));
                end
            };
            rest = rest.get(consumed..).unwrap_or_default().trim();
        }

        Ok(children)
    }
}

/// Read `<name>` at the start of `s`, returning the name and the offset just
/// past the `>`
fn opening_tag(s: &str) -> Result<(&str, usize), XmlError> {
    let gt = s
        .find('>')
        .ok_or_else(|| XmlError::new(XmlErrorKind::UnclosedBracket))?;
    let name = s
        .get(1..gt)
        .ok_or_else(|| XmlError::new(XmlErrorKind::UnclosedBracket))?;
    Ok((name, gt + 1))
}

fn closing_tag(name: &str) -> String {
    format!("</{name}>")
}

fn missing_closing_tag(name: &str) -> XmlError {
    XmlError::new(XmlErrorKind::MissingClosingTag {
        name: name.to_string(),
    })
}

impl FromStr for Node {
    type Err = XmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::new(s).parse()
    }
}
