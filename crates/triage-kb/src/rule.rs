//! Triage Rules

use crate::tier::Tier;
use serde::Serialize;

/// A conjunctive triage rule.
///
/// Only constructed by the catalog loader, so the tier is never
/// [`Tier::None`] and the condition is non-empty and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    name: String,
    tier: Tier,
    conditions: Vec<String>,
    explanation: String,
}

impl Rule {
    pub(crate) fn new(
        name: String,
        tier: Tier,
        conditions: Vec<String>,
        explanation: String,
    ) -> Self {
        Self {
            name,
            tier,
            conditions,
            explanation,
        }
    }

    /// Unique rule name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tier reached when the rule fires
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Required symptoms, in source order
    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    /// Clinical rationale shown when the rule fires
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Whether every required symptom is present.
    ///
    /// `is_present` answers membership in the working symptom set. There is
    /// no partial matching.
    pub fn is_satisfied_by<F>(&self, is_present: F) -> bool
    where
        F: Fn(&str) -> bool,
    {
        self.conditions.iter().all(|symptom| is_present(symptom))
    }
}
