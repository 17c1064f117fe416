//! Student name pair generator.

use crate::error::GenerationError;
use crate::sampling::sample_distinct;
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;

/// Smallest first/last name pool accepted by default.
pub const DEFAULT_MIN_POOL_SIZE: usize = 20;

/// A (first name, last name) pair for one student.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StudentName {
    pub first_name: String,
    pub last_name: String,
}

impl StudentName {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Generate `count` distinct name pairs by sampling both pools with replacement.
///
/// Both pools must hold at least `min_pool_size` entries and be the same
/// length. The request must also fit in the number of distinct pairs the
/// pools can form; both checks run before any sampling. Duplicate entries
/// are collapsed, so every distinct pair is drawn with equal probability.
pub fn generate_name_pairs<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    first_names: &[String],
    last_names: &[String],
    min_pool_size: usize,
) -> Result<Vec<StudentName>, GenerationError> {
    if first_names.len() < min_pool_size {
        return Err(GenerationError::InsufficientSourceData(format!(
            "first name pool has {} entries, at least {min_pool_size} required",
            first_names.len()
        )));
    }
    if last_names.len() != first_names.len() {
        return Err(GenerationError::InsufficientSourceData(format!(
            "last name pool has {} entries but first name pool has {}",
            last_names.len(),
            first_names.len()
        )));
    }

    let first_names = distinct(first_names);
    let last_names = distinct(last_names);
    let universe = first_names.len().saturating_mul(last_names.len());

    sample_distinct(rng, count, universe, "student name pairs", |rng| {
        let first = first_names[rng.random_range(0..first_names.len())];
        let last = last_names[rng.random_range(0..last_names.len())];
        StudentName::new(first, last)
    })
}

/// Pool entries with duplicates removed, in first-seen order.
fn distinct(pool: &[String]) -> Vec<&str> {
    let mut seen = HashSet::with_capacity(pool.len());
    pool.iter()
        .map(String::as_str)
        .filter(|name| seen.insert(*name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::{Duration, Instant};

    fn pool(prefix: &str, size: usize) -> Vec<String> {
        (0..size).map(|i| format!("{prefix}{i}")).collect()
    }

    #[test]
    fn test_generate_name_pairs() {
        let mut rng = StdRng::seed_from_u64(42);
        let first = pool("First", 20);
        let last = pool("Last", 20);

        let pairs = generate_name_pairs(&mut rng, 200, &first, &last, 20).unwrap();

        assert_eq!(pairs.len(), 200);
        assert_eq!(pairs.iter().collect::<HashSet<_>>().len(), 200);
        for pair in &pairs {
            assert!(first.contains(&pair.first_name));
            assert!(last.contains(&pair.last_name));
        }
    }

    #[test]
    fn test_generate_every_pair() {
        let mut rng = StdRng::seed_from_u64(7);
        let first = pool("F", 20);
        let last = pool("L", 20);

        let pairs = generate_name_pairs(&mut rng, 400, &first, &last, 20).unwrap();
        assert_eq!(pairs.iter().collect::<HashSet<_>>().len(), 400);
    }

    #[test]
    fn test_generate_name_pairs_exceeding_combinations_fails_fast() {
        let mut rng = StdRng::seed_from_u64(42);
        let first = pool("F", 20);
        let last = pool("L", 20);

        let start = Instant::now();
        let result = generate_name_pairs(&mut rng, 401, &first, &last, 20);

        assert!(matches!(
            result,
            Err(GenerationError::GenerationExhausted(_))
        ));
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_duplicate_pool_entries_shrink_universe() {
        let mut rng = StdRng::seed_from_u64(42);
        let first = vec!["Ann".to_string(); 20];
        let last = pool("L", 20);

        assert!(generate_name_pairs(&mut rng, 20, &first, &last, 20).is_ok());
        assert!(matches!(
            generate_name_pairs(&mut rng, 21, &first, &last, 20),
            Err(GenerationError::GenerationExhausted(_))
        ));
    }

    #[test]
    fn test_skewed_pool_samples_every_pair() {
        let mut first = vec!["A".to_string(); 19];
        first.push("B".to_string());
        let last = pool("L", 20);

        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pairs = generate_name_pairs(&mut rng, 40, &first, &last, 20).unwrap();
            assert_eq!(pairs.iter().collect::<HashSet<_>>().len(), 40);
        }
    }

    #[test]
    fn test_small_pool_rejected() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = generate_name_pairs(&mut rng, 5, &pool("F", 19), &pool("L", 19), 20);

        assert!(matches!(
            result,
            Err(GenerationError::InsufficientSourceData(_))
        ));
    }

    #[test]
    fn test_mismatched_pools_rejected() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = generate_name_pairs(&mut rng, 5, &pool("F", 20), &pool("L", 21), 20);

        assert!(matches!(
            result,
            Err(GenerationError::InsufficientSourceData(_))
        ));
    }

    #[test]
    fn test_deterministic_generation() {
        let first = pool("F", 20);
        let last = pool("L", 20);

        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            generate_name_pairs(&mut rng1, 50, &first, &last, 20).unwrap(),
            generate_name_pairs(&mut rng2, 50, &first, &last, 20).unwrap()
        );
    }
}
