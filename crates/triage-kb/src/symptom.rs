//! Symptom Vocabulary Entries

use serde::{Deserialize, Serialize};

/// A reportable symptom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    /// Identifier, e.g. `chest_pain`
    pub id: String,
    /// Human-readable description
    pub description: String,
}

impl Symptom {
    /// Create a new symptom entry
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }
}

/// Check the identifier convention: lowercase ASCII words joined by single
/// underscores, starting with a letter (`chest_pain`, `left_arm_pain`).
pub fn is_valid_identifier(id: &str) -> bool {
    let mut words = id.split('_');
    let starts_with_letter = id.chars().next().is_some_and(|c| c.is_ascii_lowercase());

    starts_with_letter
        && words.all(|word| {
            !word.is_empty()
                && word
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}
