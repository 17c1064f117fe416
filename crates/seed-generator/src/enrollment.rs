//! Student to course enrollment assignment.
//!
//! Enrollment sets are drawn independently per student. Courses have no
//! capacity limit, so a course may end up with any number of students.

use crate::error::GenerationError;
use crate::sampling::sample_distinct;
use rand::Rng;
use std::collections::{BTreeMap, BTreeSet};

/// Course ids per student id.
pub type Enrollments = BTreeMap<u32, BTreeSet<u32>>;

/// Default upper bound on courses per student.
pub const DEFAULT_MAX_COURSES_PER_STUDENT: usize = 3;

/// Enroll every student in between 1 and `max_per_student` distinct courses.
///
/// Course ids are drawn from `1..=course_count`.
pub fn assign_enrollments<R: Rng + ?Sized>(
    rng: &mut R,
    student_ids: &[u32],
    course_count: usize,
    max_per_student: usize,
) -> Result<Enrollments, GenerationError> {
    if max_per_student == 0 {
        return Err(GenerationError::InvalidParameter(
            "max courses per student must be at least 1".to_string(),
        ));
    }
    if course_count < max_per_student {
        return Err(GenerationError::GenerationExhausted(format!(
            "{course_count} courses cannot supply {max_per_student} distinct courses per student"
        )));
    }
    let course_upper = u32::try_from(course_count).map_err(|_| {
        GenerationError::InvalidParameter(format!("course count {course_count} exceeds u32"))
    })?;

    let mut enrollments = Enrollments::new();
    for &student_id in student_ids {
        if enrollments.contains_key(&student_id) {
            return Err(GenerationError::InvalidParameter(format!(
                "duplicate student id {student_id}"
            )));
        }

        let take = rng.random_range(1..=max_per_student);
        let courses = sample_distinct(rng, take, course_count, "course ids", |rng| {
            rng.random_range(1..=course_upper)
        })?;
        enrollments.insert(student_id, courses.into_iter().collect());
    }

    tracing::debug!(
        "Assigned {} enrollments across {} students",
        enrollments.values().map(BTreeSet::len).sum::<usize>(),
        enrollments.len()
    );

    Ok(enrollments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_assign_enrollments() {
        let mut rng = StdRng::seed_from_u64(42);
        let students: Vec<u32> = (1..=200).collect();

        let enrollments = assign_enrollments(&mut rng, &students, 10, 3).unwrap();

        assert_eq!(enrollments.len(), 200);
        for id in &students {
            let courses = &enrollments[id];
            assert!((1..=3).contains(&courses.len()));
            assert!(courses.iter().all(|c| (1..=10).contains(c)));
        }
    }

    #[test]
    fn test_set_sizes_cover_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let students: Vec<u32> = (1..=200).collect();
        let enrollments = assign_enrollments(&mut rng, &students, 10, 3).unwrap();

        let sizes: BTreeSet<usize> = enrollments.values().map(BTreeSet::len).collect();
        assert_eq!(sizes, BTreeSet::from([1, 2, 3]));
    }

    #[test]
    fn test_every_course_taken_when_max_equals_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let students: Vec<u32> = (1..=50).collect();
        let enrollments = assign_enrollments(&mut rng, &students, 3, 3).unwrap();

        assert!(enrollments.values().all(|c| c.len() <= 3));
        assert!(enrollments
            .values()
            .flatten()
            .all(|c| (1..=3).contains(c)));
    }

    #[test]
    fn test_too_few_courses() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = assign_enrollments(&mut rng, &[1, 2], 2, 3);

        assert!(matches!(
            result,
            Err(GenerationError::GenerationExhausted(_))
        ));
    }

    #[test]
    fn test_zero_max_rejected() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = assign_enrollments(&mut rng, &[1], 10, 0);

        assert!(matches!(result, Err(GenerationError::InvalidParameter(_))));
    }

    #[test]
    fn test_duplicate_student_rejected() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = assign_enrollments(&mut rng, &[1, 2, 1], 10, 3);

        assert!(matches!(result, Err(GenerationError::InvalidParameter(_))));
    }

    #[test]
    fn test_no_students() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(assign_enrollments(&mut rng, &[], 10, 3).unwrap().is_empty());
    }

    #[test]
    fn test_deterministic_assignment() {
        let students: Vec<u32> = (1..=100).collect();
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            assign_enrollments(&mut rng1, &students, 10, 3).unwrap(),
            assign_enrollments(&mut rng2, &students, 10, 3).unwrap()
        );
    }
}
