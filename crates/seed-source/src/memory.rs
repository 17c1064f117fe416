//! In-memory line source.

use crate::{LineSource, SourceError};
use std::collections::HashMap;

/// Serves resources from memory.
#[derive(Debug, Clone, Default)]
pub struct StaticLineSource {
    resources: HashMap<String, Vec<String>>,
}

impl StaticLineSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a resource.
    pub fn with_resource<I, S>(mut self, name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resources
            .insert(name.into(), lines.into_iter().map(Into::into).collect());
        self
    }
}

impl LineSource for StaticLineSource {
    fn read_lines(&self, resource: &str) -> Result<Vec<String>, SourceError> {
        self.resources
            .get(resource)
            .cloned()
            .ok_or_else(|| SourceError::unavailable(resource, "no such resource"))
    }
}
