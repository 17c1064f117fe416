//! school-seed library
//!
//! Seeds a school database with synthetic but internally consistent data:
//! groups, students, courses and the enrollments linking students to
//! courses.
//!
//! # Pipeline
//!
//! 1. Load a [`SeedConfig`] (YAML, every field optional)
//! 2. Validate the generation plan before touching any resource
//! 3. Read name and course lists through a [`seed_source::LineSource`]
//! 4. Generate the dataset with [`seed_generator::DatasetGenerator`]
//! 5. Verify every invariant of the result
//! 6. Hand the dataset to a sink such as [`seed_export::export_dataset`]
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate CSV files from the bundled resources
//! school-seed generate --resources resources --output-dir out --seed 42
//!
//! # Check a configuration without generating anything
//! school-seed check --config seed.yaml
//! ```

pub mod config;
mod error;
pub mod pipeline;

pub use config::{ConfigError, ResourceNames, SeedConfig};
pub use error::SeedError;
pub use pipeline::{check_plan, generate_dataset, read_sources, resolve_seed};

// Re-export workspace crates for convenience
pub use seed_export as export;
pub use seed_generator as generator;
pub use seed_source as source;
