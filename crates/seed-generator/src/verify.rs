//! Invariant checks for a generated dataset.

use crate::dataset::{GenerationPlan, SeedDataset};
use crate::group_names::is_group_name;
use crate::partition::count_by_group;
use std::collections::HashSet;
use thiserror::Error;

/// One broken invariant found in a dataset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("expected {expected} {table}, found {actual}")]
    RowCount {
        table: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{table} row {position} has id {id}, expected {}", .position + 1)]
    IdOutOfSequence {
        table: &'static str,
        position: usize,
        id: u32,
    },

    #[error("group {id} has malformed name '{name}'")]
    MalformedGroupName { id: u32, name: String },

    #[error("group name '{0}' is used more than once")]
    DuplicateGroupName(String),

    #[error("student name pair '{first_name} {last_name}' is used more than once")]
    DuplicateStudentName {
        first_name: String,
        last_name: String,
    },

    #[error("student {student_id} references unknown group {group_id}")]
    UnknownGroup { student_id: u32, group_id: u32 },

    #[error("group {group_id} has {occupancy} students, allowed [{min}, {max}]")]
    GroupOccupancy {
        group_id: u32,
        occupancy: usize,
        min: usize,
        max: usize,
    },

    #[error("student {0} has no enrollments")]
    NotEnrolled(u32),

    #[error("enrollments reference unknown student {0}")]
    UnknownStudent(u32),

    #[error("student {student_id} is enrolled in {courses} courses, allowed [1, {max}]")]
    EnrollmentSize {
        student_id: u32,
        courses: usize,
        max: usize,
    },

    #[error("student {student_id} is enrolled in unknown course {course_id}")]
    UnknownCourse { student_id: u32, course_id: u32 },
}

/// Check a dataset against the plan it was generated from.
///
/// Returns every violation found; an empty vector means the dataset is valid.
pub fn verify_dataset(dataset: &SeedDataset, plan: &GenerationPlan) -> Vec<Violation> {
    let mut violations = Vec::new();

    check_count(&mut violations, "groups", plan.group_count, dataset.groups.len());
    check_count(
        &mut violations,
        "students",
        plan.student_count,
        dataset.students.len(),
    );

    check_ids(&mut violations, "groups", dataset.groups.iter().map(|g| g.id));
    check_ids(&mut violations, "students", dataset.students.iter().map(|s| s.id));
    check_ids(&mut violations, "courses", dataset.courses.iter().map(|c| c.id));

    let mut group_names = HashSet::new();
    for group in &dataset.groups {
        if !is_group_name(group.name.as_str()) {
            violations.push(Violation::MalformedGroupName {
                id: group.id,
                name: group.name.to_string(),
            });
        }
        if !group_names.insert(group.name.as_str()) {
            violations.push(Violation::DuplicateGroupName(group.name.to_string()));
        }
    }

    let group_count = dataset.groups.len();
    let mut student_names = HashSet::new();
    for student in &dataset.students {
        if !student_names.insert((&student.first_name, &student.last_name)) {
            violations.push(Violation::DuplicateStudentName {
                first_name: student.first_name.clone(),
                last_name: student.last_name.clone(),
            });
        }
        if student.group_id == 0 || student.group_id as usize > group_count {
            violations.push(Violation::UnknownGroup {
                student_id: student.id,
                group_id: student.group_id,
            });
        }
    }

    let labels: Vec<u32> = dataset.students.iter().map(|s| s.group_id).collect();
    let capacity = plan.group_capacity;
    for (group_id, occupancy) in (1..).zip(count_by_group(&labels, group_count)) {
        if !capacity.contains(occupancy) {
            violations.push(Violation::GroupOccupancy {
                group_id,
                occupancy,
                min: capacity.min,
                max: capacity.max,
            });
        }
    }

    let student_ids: HashSet<u32> = dataset.students.iter().map(|s| s.id).collect();
    for student in &dataset.students {
        if !dataset.enrollments.contains_key(&student.id) {
            violations.push(Violation::NotEnrolled(student.id));
        }
    }

    let course_count = dataset.courses.len();
    let max = plan.max_courses_per_student;
    for (&student_id, courses) in &dataset.enrollments {
        if !student_ids.contains(&student_id) {
            violations.push(Violation::UnknownStudent(student_id));
        }
        if courses.is_empty() || courses.len() > max {
            violations.push(Violation::EnrollmentSize {
                student_id,
                courses: courses.len(),
                max,
            });
        }
        for &course_id in courses {
            if course_id == 0 || course_id as usize > course_count {
                violations.push(Violation::UnknownCourse {
                    student_id,
                    course_id,
                });
            }
        }
    }

    violations
}

/// Row ids must run 1..=n in row order; group and course references rely on it.
fn check_ids(
    violations: &mut Vec<Violation>,
    table: &'static str,
    ids: impl Iterator<Item = u32>,
) {
    for (position, id) in ids.enumerate() {
        if id as usize != position + 1 {
            violations.push(Violation::IdOutOfSequence {
                table,
                position,
                id,
            });
        }
    }
}

fn check_count(
    violations: &mut Vec<Violation>,
    table: &'static str,
    expected: usize,
    actual: usize,
) {
    if expected != actual {
        violations.push(Violation::RowCount {
            table,
            expected,
            actual,
        });
    }
}
