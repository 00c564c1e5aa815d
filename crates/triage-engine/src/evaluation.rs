//! Rule Evaluation

use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;
use triage_kb::{RuleCatalog, Tier};

/// Primary explanation when no rule fires
pub const NO_MATCH_EXPLANATION: &str = "Unable to determine triage level.";

/// A rule that fired during evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FiredRule {
    /// Rule name from the knowledge base
    pub name: String,
    /// Clinical rationale
    pub explanation: String,
}

/// Fired rules of a single tier, in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierFindings {
    pub tier: Tier,
    pub fired: Vec<FiredRule>,
}

impl TierFindings {
    /// Explanations of the fired rules
    pub fn explanations(&self) -> Vec<String> {
        self.fired.iter().map(|rule| rule.explanation.clone()).collect()
    }
}

/// Outcome of one evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    level: Tier,
    explanations: Vec<String>,
    breakdown: Vec<TierFindings>,
}

impl EvaluationResult {
    /// Primary tier: highest tier with a fired rule, or [`Tier::None`]
    pub fn level(&self) -> Tier {
        self.level
    }

    /// Explanations for the primary tier
    pub fn explanations(&self) -> &[String] {
        &self.explanations
    }

    /// Every tier with at least one fired rule, highest first
    pub fn breakdown(&self) -> &[TierFindings] {
        &self.breakdown
    }

    /// Findings for one tier, if any of its rules fired
    pub fn findings(&self, tier: Tier) -> Option<&TierFindings> {
        self.breakdown.iter().find(|findings| findings.tier == tier)
    }

    /// Tiers below the primary one that also fired
    pub fn lower_findings(&self) -> impl Iterator<Item = &TierFindings> + '_ {
        self.breakdown
            .iter()
            .filter(move |findings| findings.tier != self.level)
    }

    /// Whether any rule fired
    pub fn is_match(&self) -> bool {
        !self.breakdown.is_empty()
    }

    /// Recommended action for the primary tier
    pub fn recommended_action(&self) -> &'static str {
        self.level.recommended_action()
    }
}

/// Evaluate a symptom set against the catalog.
///
/// Every rule tier is scanned, highest first, so the breakdown reports all
/// satisfied tiers and not only the primary one.
pub fn evaluate<S: AsRef<str>>(catalog: &RuleCatalog, symptoms: &[S]) -> EvaluationResult {
    let present: HashSet<&str> = symptoms.iter().map(|s| s.as_ref()).collect();

    let breakdown: Vec<TierFindings> = Tier::RULE_TIERS
        .iter()
        .filter_map(|&tier| {
            let fired: Vec<FiredRule> = catalog
                .rules_for_tier(tier)
                .filter(|rule| rule.is_satisfied_by(|id| present.contains(id)))
                .map(|rule| FiredRule {
                    name: rule.name().to_string(),
                    explanation: rule.explanation().to_string(),
                })
                .collect();

            (!fired.is_empty()).then_some(TierFindings { tier, fired })
        })
        .collect();

    // RULE_TIERS is descending, so the first entry is the highest tier reached
    let (level, explanations) = match breakdown.first() {
        Some(primary) => (primary.tier, primary.explanations()),
        None => (Tier::None, vec![NO_MATCH_EXPLANATION.to_string()]),
    };

    debug!(
        "Evaluated {} symptoms: level={}, tiers fired={}",
        present.len(),
        level,
        breakdown.len()
    );

    EvaluationResult {
        level,
        explanations,
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KB: &str = r#"
        [[symptoms]]
        id = "chest_pain"
        description = "Chest pain"

        [[symptoms]]
        id = "shortness_of_breath"
        description = "Shortness of breath"

        [[symptoms]]
        id = "fever"
        description = "Fever"

        [[symptoms]]
        id = "cough"
        description = "Cough"

        [[rules]]
        name = "cardiopulmonary"
        tier = "critical"
        conditions = ["chest_pain", "shortness_of_breath"]
        explanation = "cardiac"

        [[rules]]
        name = "chest_pain"
        tier = "urgent"
        conditions = ["chest_pain"]
        explanation = "chest"

        [[rules]]
        name = "fever"
        tier = "low"
        conditions = ["fever"]
        explanation = "fever"

        [[rules]]
        name = "cough"
        tier = "low"
        conditions = ["cough"]
        explanation = "cough"
    "#;

    fn catalog() -> RuleCatalog {
        RuleCatalog::from_toml_str(KB).unwrap()
    }

    #[test]
    fn test_empty_set_is_none() {
        let result = evaluate::<&str>(&catalog(), &[]);
        assert_eq!(result.level(), Tier::None);
        assert_eq!(result.explanations(), [NO_MATCH_EXPLANATION]);
        assert!(result.breakdown().is_empty());
        assert!(!result.is_match());
    }

    #[test]
    fn test_partial_match_falls_to_smaller_rule() {
        let result = evaluate(&catalog(), &["chest_pain"]);
        assert_eq!(result.level(), Tier::Urgent);
        assert_eq!(result.explanations(), ["chest"]);
    }

    #[test]
    fn test_breakdown_spans_tiers() {
        let result = evaluate(&catalog(), &["chest_pain", "shortness_of_breath", "fever"]);
        assert_eq!(result.level(), Tier::Critical);
        assert_eq!(result.explanations(), ["cardiac"]);

        let tiers: Vec<_> = result.breakdown().iter().map(|f| f.tier).collect();
        assert_eq!(tiers, [Tier::Critical, Tier::Urgent, Tier::Low]);
        assert!(result.findings(Tier::Moderate).is_none());

        let lower: Vec<_> = result.lower_findings().map(|f| f.tier).collect();
        assert_eq!(lower, [Tier::Urgent, Tier::Low]);
    }

    #[test]
    fn test_catalog_order_within_tier() {
        let result = evaluate(&catalog(), &["cough", "fever"]);
        assert_eq!(result.level(), Tier::Low);
        // Catalog order, not input order
        assert_eq!(result.explanations(), ["fever", "cough"]);
        let names: Vec<_> = result.breakdown()[0]
            .fired
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["fever", "cough"]);
    }

    #[test]
    fn test_recommended_action_follows_level() {
        let result = evaluate(&catalog(), &["fever"]);
        assert_eq!(result.recommended_action(), Tier::Low.recommended_action());
    }
}
