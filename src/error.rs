//! Error type for the seeding pipeline.

use crate::config::ConfigError;
use seed_export::ExportError;
use seed_generator::{GenerationError, Violation};
use seed_source::SourceError;
use thiserror::Error;

/// Errors surfaced by a seed run.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Export(#[from] ExportError),

    /// Generated data broke an invariant.
    #[error("Dataset failed verification: {}", format_violations(.0))]
    Verification(Vec<Violation>),
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
