//! Read, generate and verify a seed dataset.

use crate::config::{ResourceNames, SeedConfig};
use crate::error::SeedError;
use seed_generator::{verify_dataset, DatasetGenerator, GenerationPlan, SeedDataset, SeedSources};
use seed_source::{LineSource, SourceError};
use tracing::{info, warn};

/// Read the four line resources named by `names`.
pub fn read_sources<S: LineSource>(
    source: &S,
    names: &ResourceNames,
) -> Result<SeedSources, SourceError> {
    let sources = SeedSources {
        first_names: source.read_lines(&names.first_names)?,
        last_names: source.read_lines(&names.last_names)?,
        course_names: source.read_lines(&names.courses)?,
        course_descriptions: source.read_lines(&names.course_descriptions)?,
    };

    info!(
        "Read {} first names, {} last names, {} courses, {} course descriptions",
        sources.first_names.len(),
        sources.last_names.len(),
        sources.course_names.len(),
        sources.course_descriptions.len()
    );

    Ok(sources)
}

/// The seed to use for a run: the configured one, or a fresh random one.
pub fn resolve_seed(configured: Option<u64>) -> u64 {
    configured.unwrap_or_else(rand::random)
}

/// Validate the plan a configuration describes without touching any source.
pub fn check_plan(config: &SeedConfig) -> Result<GenerationPlan, SeedError> {
    let plan = config.plan();
    plan.validate()?;
    Ok(plan)
}

/// Generate and verify a dataset for `config` using lines from `source`.
///
/// The plan is validated before any resource is read.
pub fn generate_dataset<S: LineSource>(
    config: &SeedConfig,
    seed: u64,
    source: &S,
) -> Result<SeedDataset, SeedError> {
    let plan = check_plan(config)?;
    let sources = read_sources(source, &config.resources)?;

    let generator = DatasetGenerator::new(plan, seed);
    let dataset = generator.generate(&sources)?;

    let violations = verify_dataset(&dataset, generator.plan());
    if !violations.is_empty() {
        for violation in &violations {
            warn!("{}", violation);
        }
        return Err(SeedError::Verification(violations));
    }

    Ok(dataset)
}
