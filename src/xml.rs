//! Document model and parser

pub mod config;
pub mod format;
pub mod node;
pub mod parser;

pub use config::{ParserConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_SIZE};
pub use format::{CompactFormatter, FormatConfig, Formatter, PrettyFormatter};
pub use node::{Element, Node, TEXT_NODE_NAME};
pub use parser::Parser;
