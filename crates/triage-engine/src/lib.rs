//! Triage Engine
//!
//! Evaluates a working set of reported symptoms against the rule catalog:
//! - Session-scoped working symptom set (add / remove / clear)
//! - Evaluation into a primary tier and a per-tier breakdown
//! - Stateless programmatic entry point returning a [`TriageReport`]

mod evaluation;
mod report;
mod session;

pub use evaluation::{EvaluationResult, FiredRule, TierFindings, NO_MATCH_EXPLANATION};
pub use report::TriageReport;
pub use session::TriageEngine;

pub use triage_kb::{ConfigurationError, RuleCatalog, Symptom, Tier};

use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced to triage callers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriageError {
    /// Symptom identifier is not in the catalog vocabulary
    #[error("Unknown symptom: {0}")]
    UnknownSymptom(String),

    /// Knowledge base failed to load
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Run a one-shot triage against the built-in catalog.
///
/// Builds a fresh engine, adds every symptom in order, evaluates once.
pub fn run_triage_for_symptoms<S: AsRef<str>>(symptoms: &[S]) -> Result<TriageReport, TriageError> {
    let catalog = RuleCatalog::builtin()?;
    run_triage_with_catalog(catalog, symptoms)
}

/// Run a one-shot triage against a caller-provided catalog
pub fn run_triage_with_catalog<S: AsRef<str>>(
    catalog: Arc<RuleCatalog>,
    symptoms: &[S],
) -> Result<TriageReport, TriageError> {
    let mut engine = TriageEngine::new(catalog);
    for symptom in symptoms {
        engine.add_symptom(symptom.as_ref())?;
    }

    let result = engine.evaluate();
    let echo = symptoms.iter().map(|s| s.as_ref().to_string()).collect();
    Ok(TriageReport::new(&result, echo))
}
