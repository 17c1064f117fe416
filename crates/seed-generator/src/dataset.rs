//! Seed dataset generation.

use crate::courses::{build_courses, Course};
use crate::enrollment::{assign_enrollments, Enrollments, DEFAULT_MAX_COURSES_PER_STUDENT};
use crate::error::GenerationError;
use crate::group_names::{generate_group_names, GroupName, GROUP_NAME_UNIVERSE};
use crate::name_pairs::{generate_name_pairs, DEFAULT_MIN_POOL_SIZE};
use crate::partition::{assign_groups, GroupCapacity, PartitionStrategy};
use crate::sampling::stream_rng;
use serde::Serialize;
use tracing::info;

/// RNG stream numbers, one per component.
const GROUP_NAME_STREAM: u64 = 1;
const STUDENT_NAME_STREAM: u64 = 2;
const PARTITION_STREAM: u64 = 3;
const ENROLLMENT_STREAM: u64 = 4;

/// Counts and bounds for one seed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub group_count: usize,
    pub student_count: usize,
    pub group_capacity: GroupCapacity,
    pub partition_strategy: PartitionStrategy,
    pub min_pool_size: usize,
    pub max_courses_per_student: usize,
}

impl Default for GenerationPlan {
    fn default() -> Self {
        Self {
            group_count: 10,
            student_count: 200,
            group_capacity: GroupCapacity::new(10, 30),
            partition_strategy: PartitionStrategy::Balanced,
            min_pool_size: DEFAULT_MIN_POOL_SIZE,
            max_courses_per_student: DEFAULT_MAX_COURSES_PER_STUDENT,
        }
    }
}

impl GenerationPlan {
    /// Check every precondition that does not depend on source data.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.group_count > GROUP_NAME_UNIVERSE {
            return Err(GenerationError::GenerationExhausted(format!(
                "requested {} groups but only {GROUP_NAME_UNIVERSE} group names exist",
                self.group_count
            )));
        }
        if u32::try_from(self.student_count).is_err() {
            return Err(GenerationError::InvalidParameter(format!(
                "student count {} exceeds u32",
                self.student_count
            )));
        }
        if self.max_courses_per_student == 0 {
            return Err(GenerationError::InvalidParameter(
                "max courses per student must be at least 1".to_string(),
            ));
        }
        self.group_capacity
            .check(self.student_count, self.group_count)
    }
}

/// Line lists read from the source collaborator.
#[derive(Debug, Clone, Default)]
pub struct SeedSources {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
    pub course_names: Vec<String>,
    pub course_descriptions: Vec<String>,
}

/// A group row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub id: u32,
    pub name: GroupName,
}

/// A student row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub id: u32,
    pub group_id: u32,
    pub first_name: String,
    pub last_name: String,
}

/// Everything produced by one seed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDataset {
    pub groups: Vec<Group>,
    pub students: Vec<Student>,
    pub courses: Vec<Course>,
    pub enrollments: Enrollments,
}

impl SeedDataset {
    /// Total number of (student, course) pairs.
    pub fn enrollment_count(&self) -> usize {
        self.enrollments.values().map(|c| c.len()).sum()
    }
}

/// Generates a complete [`SeedDataset`] from a plan and a seed.
///
/// Each component draws from its own RNG stream derived from the seed, so
/// the output of one component does not depend on how much randomness the
/// others consumed.
pub struct DatasetGenerator {
    plan: GenerationPlan,
    seed: u64,
}

impl DatasetGenerator {
    pub fn new(plan: GenerationPlan, seed: u64) -> Self {
        Self { plan, seed }
    }

    pub fn plan(&self) -> &GenerationPlan {
        &self.plan
    }

    /// Generate groups, students, courses and enrollments.
    pub fn generate(&self, sources: &SeedSources) -> Result<SeedDataset, GenerationError> {
        let plan = &self.plan;
        plan.validate()?;

        let courses = build_courses(&sources.course_names, &sources.course_descriptions)?;
        if courses.len() < plan.max_courses_per_student {
            return Err(GenerationError::GenerationExhausted(format!(
                "{} courses cannot supply {} distinct courses per student",
                courses.len(),
                plan.max_courses_per_student
            )));
        }

        info!(
            "Generating {} groups, {} students, {} courses (seed={})",
            plan.group_count,
            plan.student_count,
            courses.len(),
            self.seed
        );

        let mut rng = stream_rng(self.seed, GROUP_NAME_STREAM);
        let groups: Vec<Group> = generate_group_names(&mut rng, plan.group_count)?
            .into_iter()
            .zip(1..)
            .map(|(name, id)| Group { id, name })
            .collect();

        let mut rng = stream_rng(self.seed, STUDENT_NAME_STREAM);
        let names = generate_name_pairs(
            &mut rng,
            plan.student_count,
            &sources.first_names,
            &sources.last_names,
            plan.min_pool_size,
        )?;

        let mut rng = stream_rng(self.seed, PARTITION_STREAM);
        let group_ids = assign_groups(
            &mut rng,
            plan.student_count,
            plan.group_count,
            plan.group_capacity,
            plan.partition_strategy,
        )?;

        let students: Vec<Student> = names
            .into_iter()
            .zip(group_ids)
            .zip(1..)
            .map(|((name, group_id), id)| Student {
                id,
                group_id,
                first_name: name.first_name,
                last_name: name.last_name,
            })
            .collect();

        let student_ids: Vec<u32> = students.iter().map(|s| s.id).collect();
        let mut rng = stream_rng(self.seed, ENROLLMENT_STREAM);
        let enrollments = assign_enrollments(
            &mut rng,
            &student_ids,
            courses.len(),
            plan.max_courses_per_student,
        )?;

        let dataset = SeedDataset {
            groups,
            students,
            courses,
            enrollments,
        };

        info!(
            "Generated {} groups, {} students, {} courses, {} enrollments",
            dataset.groups.len(),
            dataset.students.len(),
            dataset.courses.len(),
            dataset.enrollment_count()
        );

        Ok(dataset)
    }
}
