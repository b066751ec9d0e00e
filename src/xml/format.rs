use crate::xml::node::{Element, Node};

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Number of spaces for indentation
    pub indent_spaces: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self { indent_spaces: 2 }
    }
}

/// Trait for rendering a node as a string
pub trait Formatter {
    fn format(&self, node: &Node, config: &FormatConfig) -> String;
}

/// Single line output, identical to `Display`
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactFormatter;

impl Formatter for CompactFormatter {
    fn format(&self, node: &Node, _config: &FormatConfig) -> String {
        node.to_string()
    }
}

/// Indented output
///
/// Elements holding any text child stay on one line, since breaking them
/// would change their text once reparsed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyFormatter;

impl Formatter for PrettyFormatter {
    fn format(&self, node: &Node, config: &FormatConfig) -> String {
        let mut lines = Vec::new();
        Self::collect_lines(node, 0, config, &mut lines);
        lines.join("\n")
    }
}

impl PrettyFormatter {
    fn collect_lines(node: &Node, indent: usize, config: &FormatConfig, lines: &mut Vec<String>) {
        let pad = " ".repeat(indent * config.indent_spaces);
        match node {
            Node::Element(el) if !Self::is_inline(el) => {
                lines.push(format!("{pad}<{}>", el.name));
                for child in &el.children {
                    Self::collect_lines(child, indent + 1, config, lines);
                }
                lines.push(format!("{pad}</{}>", el.name));
            }
            _ => lines.push(format!("{pad}{node}")),
        }
    }

    fn is_inline(el: &Element) -> bool {
        el.children.is_empty() || el.children.iter().any(Node::is_text)
    }
}
