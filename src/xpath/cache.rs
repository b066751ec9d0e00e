use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use tracing::trace;

use crate::error::XPathError;
use crate::xpath::expression::XPathExpression;

/// Compiled paths keyed by their source text, shareable across threads
///
/// Failed compilations are not cached.
#[derive(Debug)]
pub struct PathCache {
    paths: RwLock<HashMap<String, Arc<XPathExpression>>>,
}

impl Default for PathCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PathCache {
    pub fn new() -> Self {
        Self {
            paths: RwLock::new(HashMap::new()),
        }
    }

    pub fn get_or_compile(&self, path: &str) -> Result<Arc<XPathExpression>, XPathError> {
        if let Some(compiled) = self.paths.read().get(path) {
            trace!(path, "path cache hit");
            return Ok(Arc::clone(compiled));
        }

        let compiled = Arc::new(XPathExpression::parse(path)?);
        let mut write_guard = self.paths.write();
        let compiled = write_guard
            .entry(path.to_string())
            .or_insert(compiled)
            .clone();

        Ok(compiled)
    }

    pub fn len(&self) -> usize {
        self.paths.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.read().is_empty()
    }

    pub fn clear(&self) {
        self.paths.write().clear();
    }
}
