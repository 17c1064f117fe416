//! Capacity-constrained partition of students into groups.
//!
//! A partition is computed in two steps: an occupancy vector giving the
//! number of students per group, then a shuffled labelling that assigns a
//! group id to every student index. Both steps terminate in time linear in
//! the number of students.

use crate::error::GenerationError;
use rand::seq::{index, SliceRandom};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How students are spread over groups within the `[min, max]` bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartitionStrategy {
    /// Group sizes differ by at most one; the larger groups are chosen at random.
    #[default]
    Balanced,
    /// Every group starts at `min`, the rest go one by one to random groups below `max`.
    Scattered,
}

/// Closed interval of allowed students per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupCapacity {
    pub min: usize,
    pub max: usize,
}

impl GroupCapacity {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Check that `students` can be split into `groups` groups within bounds.
    pub fn check(&self, students: usize, groups: usize) -> Result<(), GenerationError> {
        let infeasible = || GenerationError::InfeasibleCapacity {
            students,
            groups,
            min: self.min,
            max: self.max,
        };

        if self.min > self.max {
            return Err(infeasible());
        }
        let lower = groups.checked_mul(self.min).ok_or_else(infeasible)?;
        let upper = groups.saturating_mul(self.max);
        if students < lower || students > upper {
            return Err(infeasible());
        }
        Ok(())
    }

    pub fn contains(&self, occupancy: usize) -> bool {
        (self.min..=self.max).contains(&occupancy)
    }
}

/// Number of students per group, indexed by `group_id - 1`.
pub fn occupancy<R: Rng + ?Sized>(
    rng: &mut R,
    students: usize,
    groups: usize,
    capacity: GroupCapacity,
    strategy: PartitionStrategy,
) -> Result<Vec<usize>, GenerationError> {
    capacity.check(students, groups)?;
    if groups == 0 {
        return Ok(Vec::new());
    }

    let counts = match strategy {
        PartitionStrategy::Balanced => balanced_occupancy(rng, students, groups),
        PartitionStrategy::Scattered => scattered_occupancy(rng, students, groups, capacity),
    };

    tracing::debug!("Group occupancy ({:?}): {:?}", strategy, counts);
    Ok(counts)
}

fn balanced_occupancy<R: Rng + ?Sized>(rng: &mut R, students: usize, groups: usize) -> Vec<usize> {
    let base = students / groups;
    let remainder = students % groups;

    // Feasibility guarantees base >= min and, when remainder > 0, base < max.
    let mut counts = vec![base; groups];
    for group in index::sample(rng, groups, remainder) {
        counts[group] += 1;
    }
    counts
}

fn scattered_occupancy<R: Rng + ?Sized>(
    rng: &mut R,
    students: usize,
    groups: usize,
    capacity: GroupCapacity,
) -> Vec<usize> {
    let mut counts = vec![capacity.min; groups];
    let mut open: Vec<usize> = (0..groups).filter(|&g| counts[g] < capacity.max).collect();

    // students <= groups * max, so a group is open while any student remains.
    for _ in 0..students - groups * capacity.min {
        let slot = rng.random_range(0..open.len());
        let group = open[slot];
        counts[group] += 1;
        if counts[group] == capacity.max {
            open.swap_remove(slot);
        }
    }
    counts
}

/// Expand an occupancy vector into a shuffled per-student list of 1-based group ids.
pub fn label<R: Rng + ?Sized>(rng: &mut R, counts: &[usize]) -> Vec<u32> {
    let mut labels: Vec<u32> = counts
        .iter()
        .enumerate()
        .flat_map(|(group, &count)| std::iter::repeat(group as u32 + 1).take(count))
        .collect();
    labels.shuffle(rng);
    labels
}

/// Assign each of `students` students a group id in `1..=groups`.
///
/// Every group receives between `capacity.min` and `capacity.max` students.
/// Requests no partition can satisfy fail with
/// [`GenerationError::InfeasibleCapacity`] before any randomness is used.
pub fn assign_groups<R: Rng + ?Sized>(
    rng: &mut R,
    students: usize,
    groups: usize,
    capacity: GroupCapacity,
    strategy: PartitionStrategy,
) -> Result<Vec<u32>, GenerationError> {
    let counts = occupancy(rng, students, groups, capacity, strategy)?;
    Ok(label(rng, &counts))
}

/// Count students per group id for a labelling produced by [`assign_groups`].
pub fn count_by_group(labels: &[u32], groups: usize) -> Vec<usize> {
    let mut counts = vec![0; groups];
    for &group in labels {
        if let Some(count) = (group as usize).checked_sub(1).and_then(|g| counts.get_mut(g)) {
            *count += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_valid(labels: &[u32], students: usize, groups: usize, capacity: GroupCapacity) {
        assert_eq!(labels.len(), students);
        assert!(labels.iter().all(|&g| (1..=groups as u32).contains(&g)));
        let counts = count_by_group(labels, groups);
        assert_eq!(counts.iter().sum::<usize>(), students);
        assert!(counts.iter().all(|&c| capacity.contains(c)), "{counts:?}");
    }

    #[test]
    fn test_assign_balanced() {
        let mut rng = StdRng::seed_from_u64(42);
        let capacity = GroupCapacity::new(10, 30);
        let labels =
            assign_groups(&mut rng, 200, 10, capacity, PartitionStrategy::Balanced).unwrap();

        assert_valid(&labels, 200, 10, capacity);
        assert!(count_by_group(&labels, 10).iter().all(|&c| c == 20));
    }

    #[test]
    fn test_assign_scattered() {
        let mut rng = StdRng::seed_from_u64(42);
        let capacity = GroupCapacity::new(10, 30);
        let labels =
            assign_groups(&mut rng, 200, 10, capacity, PartitionStrategy::Scattered).unwrap();

        assert_valid(&labels, 200, 10, capacity);
    }

    #[test]
    fn test_balanced_remainder_spread() {
        let mut rng = StdRng::seed_from_u64(42);
        let counts = occupancy(
            &mut rng,
            23,
            10,
            GroupCapacity::new(2, 3),
            PartitionStrategy::Balanced,
        )
        .unwrap();

        assert_eq!(counts.iter().filter(|&&c| c == 3).count(), 3);
        assert_eq!(counts.iter().filter(|&&c| c == 2).count(), 7);
    }

    #[test]
    fn test_infeasible_below_minimum() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = assign_groups(
            &mut rng,
            50,
            10,
            GroupCapacity::new(10, 30),
            PartitionStrategy::Balanced,
        );

        assert_eq!(
            result,
            Err(GenerationError::InfeasibleCapacity {
                students: 50,
                groups: 10,
                min: 10,
                max: 30,
            })
        );
    }

    #[test]
    fn test_infeasible_above_maximum() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = assign_groups(
            &mut rng,
            301,
            10,
            GroupCapacity::new(10, 30),
            PartitionStrategy::Scattered,
        );

        assert!(matches!(
            result,
            Err(GenerationError::InfeasibleCapacity { .. })
        ));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let capacity = GroupCapacity::new(5, 4);
        assert!(capacity.check(45, 10).is_err());
    }

    #[test]
    fn test_zero_groups() {
        let mut rng = StdRng::seed_from_u64(42);
        let capacity = GroupCapacity::new(1, 5);

        assert_eq!(
            assign_groups(&mut rng, 0, 0, capacity, PartitionStrategy::Balanced),
            Ok(Vec::new())
        );
        assert!(assign_groups(&mut rng, 3, 0, capacity, PartitionStrategy::Balanced).is_err());
    }

    #[test]
    fn test_exact_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let capacity = GroupCapacity::new(10, 30);

        for strategy in [PartitionStrategy::Balanced, PartitionStrategy::Scattered] {
            let low = assign_groups(&mut rng, 100, 10, capacity, strategy).unwrap();
            assert_valid(&low, 100, 10, capacity);
            let high = assign_groups(&mut rng, 300, 10, capacity, strategy).unwrap();
            assert_valid(&high, 300, 10, capacity);
        }
    }

    #[test]
    fn test_label_matches_counts() {
        let mut rng = StdRng::seed_from_u64(42);
        let labels = label(&mut rng, &[2, 0, 3]);

        assert_eq!(count_by_group(&labels, 3), vec![2, 0, 3]);
    }

    #[test]
    fn test_deterministic_assignment() {
        let capacity = GroupCapacity::new(10, 30);
        for strategy in [PartitionStrategy::Balanced, PartitionStrategy::Scattered] {
            let mut rng1 = StdRng::seed_from_u64(42);
            let mut rng2 = StdRng::seed_from_u64(42);
            assert_eq!(
                assign_groups(&mut rng1, 200, 10, capacity, strategy),
                assign_groups(&mut rng2, 200, 10, capacity, strategy)
            );
        }
    }

    proptest! {
        #[test]
        fn prop_partition_respects_bounds(
            seed in any::<u64>(),
            groups in 1usize..20,
            min in 0usize..15,
            spread in 0usize..15,
            fill in 0.0f64..=1.0,
            scattered in any::<bool>(),
        ) {
            let max = min + spread;
            let lower = groups * min;
            let upper = groups * max;
            let students = lower + ((upper - lower) as f64 * fill) as usize;
            let capacity = GroupCapacity::new(min, max);
            let strategy = if scattered {
                PartitionStrategy::Scattered
            } else {
                PartitionStrategy::Balanced
            };

            let mut rng = StdRng::seed_from_u64(seed);
            let labels = assign_groups(&mut rng, students, groups, capacity, strategy).unwrap();

            prop_assert_eq!(labels.len(), students);
            let counts = count_by_group(&labels, groups);
            prop_assert_eq!(counts.iter().sum::<usize>(), students);
            prop_assert!(counts.iter().all(|&c| capacity.contains(c)));
        }
    }
}
