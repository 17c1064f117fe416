//! Group name generator.
//!
//! Group names have the shape `AB-12`: two uppercase ASCII letters, a
//! hyphen, and two ASCII digits.

use crate::error::GenerationError;
use crate::sampling::sample_distinct;
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Separator between the letter and digit halves of a group name.
pub const SEPARATOR: char = '-';

/// Number of distinct group names that can exist (26·26·10·10).
pub const GROUP_NAME_UNIVERSE: usize = 26 * 26 * 10 * 10;

/// A validated group name such as `XK-07`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GroupName(String);

impl GroupName {
    /// Parse a group name, returning `None` if it does not match `[A-Z]{2}-[0-9]{2}`.
    pub fn parse(value: &str) -> Option<Self> {
        is_group_name(value).then(|| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut name = String::with_capacity(5);
        name.push(char::from(rng.random_range(b'A'..=b'Z')));
        name.push(char::from(rng.random_range(b'A'..=b'Z')));
        name.push(SEPARATOR);
        name.push(char::from(rng.random_range(b'0'..=b'9')));
        name.push(char::from(rng.random_range(b'0'..=b'9')));
        Self(name)
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check whether `value` matches `[A-Z]{2}-[0-9]{2}`.
pub fn is_group_name(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 5
        && bytes[0].is_ascii_uppercase()
        && bytes[1].is_ascii_uppercase()
        && bytes[2] == SEPARATOR as u8
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit()
}

/// Generate `count` distinct group names in generation order.
pub fn generate_group_names<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
) -> Result<Vec<GroupName>, GenerationError> {
    sample_distinct(rng, count, GROUP_NAME_UNIVERSE, "group names", GroupName::random)
}
