//! Triage Session

use crate::evaluation::{self, EvaluationResult};
use crate::TriageError;
use std::sync::Arc;
use tracing::{debug, warn};
use triage_kb::RuleCatalog;

/// One triage session: a working symptom set over a shared catalog.
///
/// The working set belongs to this session alone; concurrent sessions each
/// hold their own engine while sharing the catalog.
#[derive(Debug, Clone)]
pub struct TriageEngine {
    /// Shared read-only rule catalog
    catalog: Arc<RuleCatalog>,
    /// Working symptom set, in insertion order
    symptoms: Vec<String>,
}

impl TriageEngine {
    /// Create an empty session over a catalog
    pub fn new(catalog: Arc<RuleCatalog>) -> Self {
        Self {
            catalog,
            symptoms: Vec::new(),
        }
    }

    /// Create an empty session over the built-in catalog
    pub fn with_builtin() -> Result<Self, TriageError> {
        Ok(Self::new(RuleCatalog::builtin()?))
    }

    /// Add a symptom to the working set.
    ///
    /// Returns `Ok(false)` if it was already present.
    pub fn add_symptom(&mut self, id: &str) -> Result<bool, TriageError> {
        if !self.catalog.contains_symptom(id) {
            warn!("Rejected unknown symptom: {}", id);
            return Err(TriageError::UnknownSymptom(id.to_string()));
        }

        if self.contains(id) {
            debug!("Symptom already selected: {}", id);
            return Ok(false);
        }

        self.symptoms.push(id.to_string());
        debug!("Added symptom: {} ({} selected)", id, self.symptoms.len());
        Ok(true)
    }

    /// Remove a symptom; returns `false` if it was not present
    pub fn remove_symptom(&mut self, id: &str) -> bool {
        match self.symptoms.iter().position(|s| s == id) {
            Some(pos) => {
                self.symptoms.remove(pos);
                debug!("Removed symptom: {} ({} selected)", id, self.symptoms.len());
                true
            }
            None => {
                debug!("Symptom not selected, nothing to remove: {}", id);
                false
            }
        }
    }

    /// Reset the working set
    pub fn clear_symptoms(&mut self) {
        self.symptoms.clear();
        debug!("Cleared all symptoms");
    }

    /// Working set in insertion order
    pub fn current_symptoms(&self) -> &[String] {
        &self.symptoms
    }

    /// Whether a symptom is selected
    pub fn contains(&self, id: &str) -> bool {
        self.symptoms.iter().any(|s| s == id)
    }

    /// Whether the working set is empty
    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }

    /// Catalog this session evaluates against
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Evaluate the working set
    pub fn evaluate(&self) -> EvaluationResult {
        evaluation::evaluate(&self.catalog, self.symptoms.as_slice())
    }
}
