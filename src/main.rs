//! Command-line interface for school-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate CSV tables with a fixed seed
//! school-seed generate \
//!   --config seed.yaml \
//!   --resources resources \
//!   --output-dir out \
//!   --seed 42
//!
//! # Generate JSONL tables, random seed (logged)
//! school-seed generate --format jsonl --output-dir out
//!
//! # Generate and verify only
//! school-seed generate --dry-run
//!
//! # Check that a configuration is feasible
//! school-seed check --config seed.yaml
//! ```
//!
//! Set `RUST_LOG=info` (or `debug`) to see progress.

mod args;

use anyhow::Context;
use args::{CheckArgs, CommonArgs, GenerateArgs};
use clap::{Parser, Subcommand};
use school_seed::export::export_dataset;
use school_seed::source::LocalLineSource;
use school_seed::{check_plan, generate_dataset, resolve_seed, SeedConfig};

#[derive(Parser)]
#[command(name = "school-seed")]
#[command(about = "Seed a school database with synthetic groups, students, courses and enrollments")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a dataset and export it as one file per table
    Generate(GenerateArgs),

    /// Validate a configuration without reading resources or generating data
    Check(CheckArgs),
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => run_generate(args)?,
        Commands::Check(args) => run_check(args)?,
    }

    Ok(())
}

fn load_config(common: &CommonArgs) -> anyhow::Result<SeedConfig> {
    match &common.config {
        Some(path) => SeedConfig::from_file(path)
            .with_context(|| format!("Failed to load seed config from {path:?}")),
        None => Ok(SeedConfig::default()),
    }
}

fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let config = load_config(&args.common)?;
    let seed = resolve_seed(args.seed.or(config.seed));
    tracing::info!("Using seed {}", seed);

    let source = LocalLineSource::new(&args.resources);
    let dataset = generate_dataset(&config, seed, &source).with_context(|| {
        format!(
            "Failed to generate dataset from resources in {:?}",
            args.resources
        )
    })?;

    if args.dry_run {
        tracing::info!(
            "Dry run: {} groups, {} students, {} courses, {} enrollments verified, nothing written",
            dataset.groups.len(),
            dataset.students.len(),
            dataset.courses.len(),
            dataset.enrollment_count()
        );
        return Ok(());
    }

    let summary = export_dataset(&dataset, &args.output_dir, args.format)
        .with_context(|| format!("Failed to export dataset to {:?}", args.output_dir))?;
    for table in &summary.tables {
        tracing::info!(
            "{}: {} rows -> {}",
            table.table,
            table.rows_written,
            table.path.display()
        );
    }

    Ok(())
}

fn run_check(args: CheckArgs) -> anyhow::Result<()> {
    let config = load_config(&args.common)?;
    let plan = check_plan(&config).context("Seed configuration is not feasible")?;

    println!(
        "Plan OK: {} students into {} groups of [{}, {}] ({:?}), up to {} courses each",
        plan.student_count,
        plan.group_count,
        plan.group_capacity.min,
        plan.group_capacity.max,
        plan.partition_strategy,
        plan.max_courses_per_student
    );

    Ok(())
}
