//! Triage Report

use crate::evaluation::EvaluationResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use triage_kb::Tier;

/// Serializable result of the programmatic entry point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageReport {
    /// Primary tier
    pub level: Tier,
    /// Explanations for the primary tier
    pub explanations: Vec<String>,
    /// Explanations for every tier with at least one fired rule
    pub all_levels: BTreeMap<Tier, Vec<String>>,
    /// Symptoms as given by the caller
    pub symptoms: Vec<String>,
}

impl TriageReport {
    /// Build a report from an evaluation and the caller's input
    pub fn new(result: &EvaluationResult, symptoms: Vec<String>) -> Self {
        Self {
            level: result.level(),
            explanations: result.explanations().to_vec(),
            all_levels: result
                .breakdown()
                .iter()
                .map(|findings| (findings.tier, findings.explanations()))
                .collect(),
            symptoms,
        }
    }

    /// Recommended action for the primary tier
    pub fn recommended_action(&self) -> &'static str {
        self.level.recommended_action()
    }
}
