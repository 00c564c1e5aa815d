//! Triage Knowledge Base
//!
//! The rule catalog behind the triage engine:
//! - Symptom vocabulary (identifier + description, in menu order)
//! - Urgency tiers and their recommended actions
//! - Conjunctive triage rules with their explanations
//!
//! The default knowledge base is embedded from `kb/triage_kb.toml`. An
//! external file with the same layout can be loaded instead.

mod catalog;
mod error;
mod loader;
mod rule;
mod symptom;
mod tier;

pub use catalog::RuleCatalog;
pub use error::ConfigurationError;
pub use loader::KnowledgeBaseConfig;
pub use rule::Rule;
pub use symptom::{is_valid_identifier, Symptom};
pub use tier::{ParseTierError, Tier};

/// Embedded default knowledge base (TOML)
pub const EMBEDDED_KNOWLEDGE_BASE: &str = include_str!("../kb/triage_kb.toml");

/// Disclaimer shown alongside every assessment
pub const DISCLAIMER: &str = "Neutral Minds is a demonstration rule-based triage system. \
It is NOT a medical diagnostic tool and does NOT replace professional medical advice, \
diagnosis, or treatment. If you are experiencing a medical emergency, call your local \
emergency services.";
