//! Error types for the seed generators.

use thiserror::Error;

/// Errors that can occur while generating a seed dataset.
///
/// Every variant is raised by a precondition check at the top of a
/// generator, except `GenerationExhausted` which may also come from a
/// sampling loop running out of its attempt budget.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// A source pool is too small or mismatched in size.
    #[error("Insufficient source data: {0}")]
    InsufficientSourceData(String),

    /// The request cannot be satisfied by the universe of candidates.
    #[error("Generation exhausted: {0}")]
    GenerationExhausted(String),

    /// No partition satisfies the requested group bounds.
    #[error(
        "Infeasible capacity: {students} students cannot fill {groups} groups of size [{min}, {max}]"
    )]
    InfeasibleCapacity {
        students: usize,
        groups: usize,
        min: usize,
        max: usize,
    },

    /// A structurally invalid argument.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
