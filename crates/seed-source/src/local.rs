//! Local filesystem line source.

use crate::{parse_lines, LineSource, SourceError};
use std::path::PathBuf;

/// Reads resources as files relative to a root directory.
#[derive(Debug, Clone)]
pub struct LocalLineSource {
    root: PathBuf,
}

impl LocalLineSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path a resource name resolves to.
    pub fn resolve(&self, resource: &str) -> PathBuf {
        self.root.join(resource)
    }
}

impl LineSource for LocalLineSource {
    fn read_lines(&self, resource: &str) -> Result<Vec<String>, SourceError> {
        let path = self.resolve(resource);
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| SourceError::unavailable(path.display().to_string(), e))?;
        let lines = parse_lines(&contents);

        tracing::debug!("Read {} lines from {}", lines.len(), path.display());

        Ok(lines)
    }
}
