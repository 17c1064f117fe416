//! CLI argument definitions.

use clap::Args;
use seed_export::ExportFormat;
use std::path::PathBuf;

/// Arguments shared by every command.
#[derive(Args, Clone, Debug)]
pub struct CommonArgs {
    /// Path to seed configuration YAML file (defaults apply when omitted)
    #[arg(long, short = 'c', env = "SCHOOL_SEED_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Arguments for `school-seed generate`.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory holding the name and course line files
    #[arg(long, short = 'r', default_value = "resources", env = "SCHOOL_SEED_RESOURCES")]
    pub resources: PathBuf,

    /// Output directory for exported tables (one file per table)
    #[arg(long, short = 'o', default_value = "seed-output")]
    pub output_dir: PathBuf,

    /// Output file format
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Random seed for deterministic generation (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Dry-run mode: generate and verify without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for `school-seed check`.
#[derive(Args, Clone, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}
