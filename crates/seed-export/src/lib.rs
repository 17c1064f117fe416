//! CSV and JSONL export for generated seed datasets.
//!
//! A [`SeedDataset`](seed_generator::SeedDataset) is written as four files,
//! one per table: `groups`, `students`, `courses` and `student_courses`.
//!
//! # Example
//!
//! ```ignore
//! use seed_export::{export_dataset, ExportFormat};
//!
//! let summary = export_dataset(&dataset, "out/", ExportFormat::Csv)?;
//! println!("{} rows written", summary.rows_written());
//! ```

mod error;
mod writer;

pub use error::ExportError;
pub use writer::{export_dataset, EnrollmentRow, ExportSummary, TableRow, TableSummary, TABLES};

use clap::ValueEnum;

/// Output file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values with a header row
    #[default]
    Csv,
    /// One JSON object per line
    Jsonl,
}

impl ExportFormat {
    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Jsonl => "jsonl",
        }
    }
}
