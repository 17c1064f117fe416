//! Shared sampling utilities.
//!
//! All generators draw through [`sample_distinct`], which performs
//! rejection sampling under an explicit attempt budget, and obtain their RNG
//! through [`stream_rng`] when driven by a [`DatasetGenerator`].
//!
//! [`DatasetGenerator`]: crate::DatasetGenerator

use crate::error::GenerationError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::hash::Hash;

/// Draws allowed per requested value before a sampling loop gives up.
///
/// Collecting every value of a universe of size n takes about n·ln(n)
/// draws, so 32 per value covers universes far larger than any seed batch.
pub const ATTEMPTS_PER_VALUE: usize = 32;

/// Lower bound on the attempt budget for small requests.
pub const MIN_ATTEMPT_BUDGET: usize = 1024;

/// Odd 64-bit constant used to spread stream numbers over the seed space.
const STREAM_SPREAD: u64 = 0x9E3779B97F4A7C15;

/// Maximum number of draws allowed when collecting `count` distinct values.
pub fn attempt_budget(count: usize) -> usize {
    count
        .saturating_mul(ATTEMPTS_PER_VALUE)
        .max(MIN_ATTEMPT_BUDGET)
}

/// Create an independent RNG for one component of a run.
///
/// The same `(seed, stream)` always yields the same sequence, and different
/// streams of one seed do not share state.
pub fn stream_rng(seed: u64, stream: u64) -> StdRng {
    StdRng::seed_from_u64(seed.wrapping_add(stream.wrapping_mul(STREAM_SPREAD)))
}

/// Collect `count` distinct values produced by `draw`, in first-seen order.
///
/// `universe` is the number of distinct values `draw` can produce. A request
/// larger than the universe fails before any draw is made; otherwise the
/// loop runs until `count` values are seen or [`attempt_budget`] draws have
/// been spent, whichever comes first.
pub fn sample_distinct<T, R, F>(
    rng: &mut R,
    count: usize,
    universe: usize,
    what: &str,
    mut draw: F,
) -> Result<Vec<T>, GenerationError>
where
    T: Eq + Hash + Clone,
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> T,
{
    if count > universe {
        return Err(GenerationError::GenerationExhausted(format!(
            "requested {count} distinct {what} but only {universe} exist"
        )));
    }

    let budget = attempt_budget(count);
    let mut seen = HashSet::with_capacity(count);
    let mut values = Vec::with_capacity(count);
    let mut attempts = 0usize;

    while values.len() < count {
        if attempts == budget {
            return Err(GenerationError::GenerationExhausted(format!(
                "collected {} of {count} distinct {what} within {budget} attempts",
                values.len()
            )));
        }
        attempts += 1;

        let candidate = draw(&mut *rng);
        if seen.insert(candidate.clone()) {
            values.push(candidate);
        }
    }

    tracing::debug!(
        "Sampled {} distinct {} in {} attempts",
        values.len(),
        what,
        attempts
    );

    Ok(values)
}
