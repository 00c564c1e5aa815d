//! Knowledge Base Error Types

use thiserror::Error;

/// Errors raised while loading or checking the knowledge base.
///
/// All of these are fatal at startup; a catalog that loads is internally
/// consistent for the rest of the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Knowledge base file does not exist
    #[error("Knowledge base not found: {0}")]
    Missing(String),

    /// Knowledge base could not be read or parsed
    #[error("Failed to read knowledge base: {0}")]
    Unreadable(String),

    /// Knowledge base has no symptoms
    #[error("Knowledge base defines no symptoms")]
    NoSymptoms,

    /// Knowledge base has no rules
    #[error("Knowledge base defines no rules")]
    NoRules,

    /// Identifier does not follow the lowercase_underscore convention
    #[error("Invalid identifier '{0}': expected lowercase words separated by underscores")]
    InvalidIdentifier(String),

    /// Same symptom identifier listed twice in the vocabulary
    #[error("Duplicate symptom identifier: {0}")]
    DuplicateSymptom(String),

    /// Symptom without a description
    #[error("Symptom '{0}' has an empty description")]
    EmptyDescription(String),

    /// Same rule name used twice
    #[error("Duplicate rule name: {0}")]
    DuplicateRule(String),

    /// Rule tier is not one of critical, urgent, moderate, low
    #[error("Rule '{rule}' has invalid tier '{tier}'")]
    InvalidTier { rule: String, tier: String },

    /// Rule with no required symptoms
    #[error("Rule '{0}' has an empty condition set")]
    EmptyCondition(String),

    /// Rule condition refers to a symptom outside the vocabulary
    #[error("Rule '{rule}' references unknown symptom '{symptom}'")]
    UnknownConditionSymptom { rule: String, symptom: String },

    /// Rule condition lists a symptom more than once
    #[error("Rule '{rule}' lists symptom '{symptom}' more than once")]
    DuplicateConditionSymptom { rule: String, symptom: String },

    /// Rule without an explanation
    #[error("Rule '{0}' has an empty explanation")]
    EmptyExplanation(String),
}
