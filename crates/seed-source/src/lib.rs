//! Line sources for seed resources.
//!
//! A resource is a named list of text lines: first names, last names,
//! course names, course descriptions. Sources materialize the whole list up
//! front so generation never performs I/O.
//!
//! # Source Types
//!
//! - **Local**: files under a root directory, one entry per line
//! - **Static**: an in-memory map of resource name to lines
//!
//! # Example
//!
//! ```ignore
//! use seed_source::{LineSource, LocalLineSource};
//!
//! let source = LocalLineSource::new("resources");
//! let first_names = source.read_lines("first_names.txt")?;
//! ```

mod local;
mod memory;

pub use local::LocalLineSource;
pub use memory::StaticLineSource;

use thiserror::Error;

/// Errors raised by a line source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The resource could not be located or read.
    #[error("Source unavailable: {resource}: {reason}")]
    SourceUnavailable { resource: String, reason: String },
}

impl SourceError {
    pub fn unavailable(resource: impl Into<String>, reason: impl ToString) -> Self {
        SourceError::SourceUnavailable {
            resource: resource.into(),
            reason: reason.to_string(),
        }
    }
}

/// Supplies ordered lines for named resources.
pub trait LineSource {
    /// Read every entry of `resource`, in order.
    fn read_lines(&self, resource: &str) -> Result<Vec<String>, SourceError>;
}

impl<T: LineSource + ?Sized> LineSource for &T {
    fn read_lines(&self, resource: &str) -> Result<Vec<String>, SourceError> {
        (**self).read_lines(resource)
    }
}

/// Split text into entries: one per line, trimmed, blank lines dropped.
pub fn parse_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
