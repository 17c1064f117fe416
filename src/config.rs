//! Seed configuration loaded from YAML.
//!
//! Every field has a default, so an empty document (or no file at all)
//! describes the standard school: 10 groups of 10-30 students, 200
//! students, up to 3 courses each.
//!
//! ```yaml
//! seed: 42
//! groups:
//!   count: 10
//!   min_size: 10
//!   max_size: 30
//!   strategy: balanced
//! students:
//!   count: 200
//!   min_pool_size: 20
//! enrollment:
//!   max_courses_per_student: 3
//! resources:
//!   first_names: first_names.txt
//!   last_names: last_names.txt
//!   courses: courses.txt
//!   course_descriptions: course_descriptions.txt
//! ```

use seed_generator::name_pairs::DEFAULT_MIN_POOL_SIZE;
use seed_generator::{GenerationPlan, GroupCapacity, PartitionStrategy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Top-level seed configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedConfig {
    /// Fixed seed; a random one is chosen and logged when absent
    pub seed: Option<u64>,
    pub groups: GroupsConfig,
    pub students: StudentsConfig,
    pub enrollment: EnrollmentConfig,
    pub resources: ResourceNames,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GroupsConfig {
    pub count: usize,
    pub min_size: usize,
    pub max_size: usize,
    pub strategy: PartitionStrategy,
}

impl Default for GroupsConfig {
    fn default() -> Self {
        Self {
            count: 10,
            min_size: 10,
            max_size: 30,
            strategy: PartitionStrategy::Balanced,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StudentsConfig {
    pub count: usize,
    /// Minimum size of each of the first and last name pools
    pub min_pool_size: usize,
}

impl Default for StudentsConfig {
    fn default() -> Self {
        Self {
            count: 200,
            min_pool_size: DEFAULT_MIN_POOL_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnrollmentConfig {
    pub max_courses_per_student: usize,
}

impl Default for EnrollmentConfig {
    fn default() -> Self {
        Self {
            max_courses_per_student: 3,
        }
    }
}

/// Resource names passed to the line source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourceNames {
    pub first_names: String,
    pub last_names: String,
    pub courses: String,
    pub course_descriptions: String,
}

impl Default for ResourceNames {
    fn default() -> Self {
        Self {
            first_names: "first_names.txt".to_string(),
            last_names: "last_names.txt".to_string(),
            courses: "courses.txt".to_string(),
            course_descriptions: "course_descriptions.txt".to_string(),
        }
    }
}

impl SeedConfig {
    /// Parse a configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// The generation plan this configuration describes.
    pub fn plan(&self) -> GenerationPlan {
        GenerationPlan {
            group_count: self.groups.count,
            student_count: self.students.count,
            group_capacity: GroupCapacity::new(self.groups.min_size, self.groups.max_size),
            partition_strategy: self.groups.strategy,
            min_pool_size: self.students.min_pool_size,
            max_courses_per_student: self.enrollment.max_courses_per_student,
        }
    }
}
