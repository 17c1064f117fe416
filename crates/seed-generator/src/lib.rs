//! Constrained random data generator for school-seed.
//!
//! This crate produces the synthetic rows used to seed a school database:
//! groups, students, courses and enrollments. Every generator takes an
//! explicit RNG, so results are reproducible for a fixed seed, and every
//! precondition is checked before any sampling starts.
//!
//! # Architecture
//!
//! ```text
//!   SeedSources (lines)          GenerationPlan
//!          │                           │
//!          ▼                           ▼
//! ┌───────────────────────────────────────────────┐
//! │               DatasetGenerator                │
//! │                                               │
//! │  stream 1: group_names   -> Vec<GroupName>    │
//! │  stream 2: name_pairs    -> Vec<StudentName>  │
//! │  stream 3: partition     -> Vec<u32> group id │
//! │  stream 4: enrollment    -> Enrollments       │
//! └───────────────────────┬───────────────────────┘
//!                         │
//!                         ▼
//!                    SeedDataset ──► verify_dataset
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_generator::{DatasetGenerator, GenerationPlan, SeedSources};
//!
//! let lines = |prefix: &str, n: usize| -> Vec<String> {
//!     (1..=n).map(|i| format!("{prefix}{i}")).collect()
//! };
//! let sources = SeedSources {
//!     first_names: lines("First", 20),
//!     last_names: lines("Last", 20),
//!     course_names: lines("Course", 10),
//!     course_descriptions: lines("About course ", 10),
//! };
//!
//! let generator = DatasetGenerator::new(GenerationPlan::default(), 42);
//! let dataset = generator.generate(&sources).unwrap();
//! assert_eq!(dataset.students.len(), 200);
//! ```

pub mod courses;
pub mod dataset;
pub mod enrollment;
mod error;
pub mod group_names;
pub mod name_pairs;
pub mod partition;
pub mod sampling;
pub mod verify;

// Re-exports for convenience
pub use courses::{build_courses, Course};
pub use dataset::{DatasetGenerator, GenerationPlan, Group, SeedDataset, SeedSources, Student};
pub use enrollment::{assign_enrollments, Enrollments};
pub use error::GenerationError;
pub use group_names::{generate_group_names, GroupName};
pub use name_pairs::{generate_name_pairs, StudentName};
pub use partition::{assign_groups, GroupCapacity, PartitionStrategy};
pub use verify::{verify_dataset, Violation};
