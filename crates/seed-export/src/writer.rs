//! Table writers for dataset export.

use crate::error::ExportError;
use crate::ExportFormat;
use seed_generator::{Course, Group, SeedDataset, Student};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for file writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Exported table names, in write order.
pub const TABLES: [&str; 4] = ["groups", "students", "courses", "student_courses"];

/// One row of the `student_courses` join table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnrollmentRow {
    pub student_id: u32,
    pub course_id: u32,
}

/// A row type with a fixed CSV header.
pub trait TableRow: Serialize {
    /// Column names, in serialization order.
    const HEADERS: &'static [&'static str];
}

impl TableRow for Group {
    const HEADERS: &'static [&'static str] = &["id", "name"];
}

impl TableRow for Student {
    const HEADERS: &'static [&'static str] = &["id", "group_id", "first_name", "last_name"];
}

impl TableRow for Course {
    const HEADERS: &'static [&'static str] = &["id", "name", "description"];
}

impl TableRow for EnrollmentRow {
    const HEADERS: &'static [&'static str] = &["student_id", "course_id"];
}

impl<T: TableRow> TableRow for &T {
    const HEADERS: &'static [&'static str] = T::HEADERS;
}

/// Result of writing one table.
#[derive(Debug, Clone)]
pub struct TableSummary {
    pub table: &'static str,
    pub path: PathBuf,
    pub rows_written: u64,
    pub file_size_bytes: u64,
}

/// Result of exporting a whole dataset.
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    pub tables: Vec<TableSummary>,
    pub total_duration: Duration,
}

impl ExportSummary {
    /// Rows written across all tables.
    pub fn rows_written(&self) -> u64 {
        self.tables.iter().map(|t| t.rows_written).sum()
    }

    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written() as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    pub fn table(&self, name: &str) -> Option<&TableSummary> {
        self.tables.iter().find(|t| t.table == name)
    }
}

/// Write every table of `dataset` into `output_dir`.
///
/// The directory is created if missing; existing files are overwritten.
pub fn export_dataset<P: AsRef<Path>>(
    dataset: &SeedDataset,
    output_dir: P,
    format: ExportFormat,
) -> Result<ExportSummary, ExportError> {
    let start_time = Instant::now();
    let output_dir = output_dir.as_ref();
    std::fs::create_dir_all(output_dir)?;

    info!(
        "Exporting dataset to '{}' as {:?}",
        output_dir.display(),
        format
    );

    let enrollments = dataset
        .enrollments
        .iter()
        .flat_map(|(&student_id, courses)| {
            courses.iter().map(move |&course_id| EnrollmentRow {
                student_id,
                course_id,
            })
        });

    let tables = vec![
        write_table(output_dir, TABLES[0], format, &dataset.groups)?,
        write_table(output_dir, TABLES[1], format, &dataset.students)?,
        write_table(output_dir, TABLES[2], format, &dataset.courses)?,
        write_table(output_dir, TABLES[3], format, enrollments)?,
    ];

    let summary = ExportSummary {
        tables,
        total_duration: start_time.elapsed(),
    };

    info!(
        "Export complete: {} rows in {:?} ({:.2} rows/sec)",
        summary.rows_written(),
        summary.total_duration,
        summary.rows_per_second()
    );

    Ok(summary)
}

fn write_table<I>(
    output_dir: &Path,
    table: &'static str,
    format: ExportFormat,
    rows: I,
) -> Result<TableSummary, ExportError>
where
    I: IntoIterator,
    I::Item: TableRow,
{
    let path = output_dir.join(format!("{table}.{}", format.extension()));
    let file = File::create(&path)?;
    let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);

    let rows_written = match format {
        ExportFormat::Csv => write_csv(buf_writer, rows)?,
        ExportFormat::Jsonl => write_jsonl(buf_writer, rows)?,
    };

    let file_size_bytes = std::fs::metadata(&path)?.len();
    debug!(
        "Wrote {} rows ({} bytes) to {}",
        rows_written,
        file_size_bytes,
        path.display()
    );

    Ok(TableSummary {
        table,
        path,
        rows_written,
        file_size_bytes,
    })
}

fn write_csv<W, I>(inner: W, rows: I) -> Result<u64, ExportError>
where
    W: Write,
    I: IntoIterator,
    I::Item: TableRow,
{
    // Header is written up front so empty tables still carry one.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(inner);
    writer.write_record(<I::Item as TableRow>::HEADERS)?;

    let mut rows_written = 0;
    for row in rows {
        writer.serialize(row)?;
        rows_written += 1;
    }
    writer.flush()?;
    Ok(rows_written)
}

fn write_jsonl<W, I>(mut writer: W, rows: I) -> Result<u64, ExportError>
where
    W: Write,
    I: IntoIterator,
    I::Item: Serialize,
{
    let mut rows_written = 0;
    for row in rows {
        serde_json::to_writer(&mut writer, &row)?;
        writeln!(writer)?;
        rows_written += 1;
    }
    writer.flush()?;
    Ok(rows_written)
}
