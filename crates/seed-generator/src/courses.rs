//! Course catalog built from name and description line lists.

use crate::error::GenerationError;
use serde::Serialize;

/// A course row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    pub id: u32,
    pub name: String,
    pub description: String,
}

/// Pair each course name with the description on the same line.
///
/// Ids are assigned from 1 in source order.
pub fn build_courses(
    names: &[String],
    descriptions: &[String],
) -> Result<Vec<Course>, GenerationError> {
    if names.is_empty() {
        return Err(GenerationError::InsufficientSourceData(
            "course name list is empty".to_string(),
        ));
    }
    if names.len() != descriptions.len() {
        return Err(GenerationError::InsufficientSourceData(format!(
            "{} course names but {} course descriptions",
            names.len(),
            descriptions.len()
        )));
    }

    names
        .iter()
        .zip(descriptions)
        .enumerate()
        .map(|(index, (name, description))| {
            let id = u32::try_from(index + 1).map_err(|_| {
                GenerationError::InvalidParameter(format!("too many courses: {}", names.len()))
            })?;
            Ok(Course {
                id,
                name: name.clone(),
                description: description.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_courses() {
        let courses = build_courses(
            &lines(&["Math", "Biology"]),
            &lines(&["Numbers and shapes", "Living things"]),
        )
        .unwrap();

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].id, 1);
        assert_eq!(courses[0].name, "Math");
        assert_eq!(courses[1].id, 2);
        assert_eq!(courses[1].description, "Living things");
    }

    #[test]
    fn test_mismatched_lists() {
        let result = build_courses(&lines(&["Math", "Art"]), &lines(&["Numbers"]));
        assert!(matches!(
            result,
            Err(GenerationError::InsufficientSourceData(_))
        ));
    }

    #[test]
    fn test_empty_lists() {
        assert!(build_courses(&[], &[]).is_err());
    }
}
