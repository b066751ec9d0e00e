use crate::error::{XmlError, XmlErrorKind};

/// Element nesting accepted by [`ParserConfig::default`]. Deeper documents
/// are rejected with [`XmlErrorKind::MaxDepthExceeded`] unless the limit is
/// raised through [`ParserConfig::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 512;
pub const DEFAULT_MAX_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Configuration for document parser limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum element nesting depth
    pub max_depth: usize,
    /// Maximum input size in bytes
    pub max_size: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl ParserConfig {
    pub fn validate_size(&self, size: usize) -> Result<(), XmlError> {
        if size > self.max_size {
            return Err(XmlError::new(XmlErrorKind::MaxSizeExceeded {
                max: self.max_size,
            }));
        }
        Ok(())
    }
}

/// Tracks nesting depth during parsing
#[derive(Debug, Default)]
pub struct ParsingContext {
    current_depth: usize,
}

impl ParsingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter_nested(&mut self, config: &ParserConfig) -> Result<(), XmlError> {
        self.current_depth += 1;
        if self.current_depth > config.max_depth {
            return Err(XmlError::new(XmlErrorKind::MaxDepthExceeded {
                max: config.max_depth,
            }));
        }
        Ok(())
    }

    pub fn exit_nested(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }

    pub fn depth(&self) -> usize {
        self.current_depth
    }
}
