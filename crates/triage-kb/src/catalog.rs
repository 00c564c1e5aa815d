//! Rule Catalog

use crate::error::ConfigurationError;
use crate::loader::{KnowledgeBaseDef, RuleDef, SymptomDef};
use crate::rule::Rule;
use crate::symptom::{is_valid_identifier, Symptom};
use crate::tier::Tier;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::{Arc, OnceLock};
use tracing::info;

static BUILTIN: OnceLock<Result<Arc<RuleCatalog>, ConfigurationError>> = OnceLock::new();

/// Immutable table of symptoms and triage rules.
///
/// Once loaded the catalog never changes, so it can be shared between
/// sessions behind an [`Arc`] without locking.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    /// Vocabulary in source order
    symptoms: Vec<Symptom>,
    /// Symptom id -> position in `symptoms`
    index: HashMap<String, usize>,
    /// Rules in source order
    rules: Vec<Rule>,
}

impl RuleCatalog {
    /// Load the embedded knowledge base
    pub fn load() -> Result<Self, ConfigurationError> {
        let def = KnowledgeBaseDef::from_toml(crate::EMBEDDED_KNOWLEDGE_BASE)?;
        Self::from_definition(def)
    }

    /// Load a knowledge base from a TOML file
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let def = KnowledgeBaseDef::from_path(path.as_ref())?;
        Self::from_definition(def)
    }

    /// Load a knowledge base from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigurationError> {
        let def = KnowledgeBaseDef::from_toml(source)?;
        Self::from_definition(def)
    }

    /// Process-wide embedded catalog, loaded on first use
    pub fn builtin() -> Result<Arc<RuleCatalog>, ConfigurationError> {
        BUILTIN
            .get_or_init(|| Self::load().map(Arc::new))
            .clone()
    }

    fn from_definition(def: KnowledgeBaseDef) -> Result<Self, ConfigurationError> {
        if def.symptoms.is_empty() {
            return Err(ConfigurationError::NoSymptoms);
        }
        if def.rules.is_empty() {
            return Err(ConfigurationError::NoRules);
        }

        let mut symptoms = Vec::with_capacity(def.symptoms.len());
        let mut index = HashMap::with_capacity(def.symptoms.len());
        for SymptomDef { id, description } in def.symptoms {
            if !is_valid_identifier(&id) {
                return Err(ConfigurationError::InvalidIdentifier(id));
            }
            if description.trim().is_empty() {
                return Err(ConfigurationError::EmptyDescription(id));
            }
            if index.insert(id.clone(), symptoms.len()).is_some() {
                return Err(ConfigurationError::DuplicateSymptom(id));
            }
            symptoms.push(Symptom::new(id, description));
        }

        let mut names = HashSet::with_capacity(def.rules.len());
        let mut rules = Vec::with_capacity(def.rules.len());
        for rule_def in def.rules {
            let rule = Self::check_rule(rule_def, &index)?;
            if !names.insert(rule.name().to_string()) {
                return Err(ConfigurationError::DuplicateRule(rule.name().to_string()));
            }
            rules.push(rule);
        }

        let catalog = Self {
            symptoms,
            index,
            rules,
        };

        info!(
            "Loaded triage catalog: {} symptoms, {} rules ({} critical, {} urgent, {} moderate, {} low)",
            catalog.symptom_count(),
            catalog.rule_count(),
            catalog.rules_for_tier(Tier::Critical).count(),
            catalog.rules_for_tier(Tier::Urgent).count(),
            catalog.rules_for_tier(Tier::Moderate).count(),
            catalog.rules_for_tier(Tier::Low).count(),
        );

        Ok(catalog)
    }

    fn check_rule(def: RuleDef, index: &HashMap<String, usize>) -> Result<Rule, ConfigurationError> {
        let RuleDef {
            name,
            tier,
            conditions,
            explanation,
        } = def;

        if !is_valid_identifier(&name) {
            return Err(ConfigurationError::InvalidIdentifier(name));
        }

        let tier = match tier.parse::<Tier>() {
            Ok(tier) if tier.is_rule_tier() => tier,
            _ => return Err(ConfigurationError::InvalidTier { rule: name, tier }),
        };

        if conditions.is_empty() {
            return Err(ConfigurationError::EmptyCondition(name));
        }

        let mut seen = HashSet::with_capacity(conditions.len());
        for symptom in &conditions {
            if !index.contains_key(symptom) {
                return Err(ConfigurationError::UnknownConditionSymptom {
                    rule: name,
                    symptom: symptom.clone(),
                });
            }
            if !seen.insert(symptom.as_str()) {
                return Err(ConfigurationError::DuplicateConditionSymptom {
                    rule: name,
                    symptom: symptom.clone(),
                });
            }
        }

        if explanation.trim().is_empty() {
            return Err(ConfigurationError::EmptyExplanation(name));
        }

        Ok(Rule::new(name, tier, conditions, explanation))
    }

    /// Full vocabulary, in menu order
    pub fn all_symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    /// Look up a symptom by identifier
    pub fn symptom(&self, id: &str) -> Option<&Symptom> {
        self.index.get(id).map(|&i| &self.symptoms[i])
    }

    /// Whether `id` is part of the vocabulary
    pub fn contains_symptom(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Description for a symptom identifier
    pub fn description_of(&self, id: &str) -> Option<&str> {
        self.symptom(id).map(|s| s.description.as_str())
    }

    /// Symptom at a 1-based menu position
    pub fn symptom_at(&self, position: usize) -> Option<&Symptom> {
        position.checked_sub(1).and_then(|i| self.symptoms.get(i))
    }

    /// All rules, in source order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules of one tier, in source order
    pub fn rules_for_tier(&self, tier: Tier) -> impl Iterator<Item = &Rule> + '_ {
        self.rules.iter().filter(move |rule| rule.tier() == tier)
    }

    /// Number of symptoms in the vocabulary
    pub fn symptom_count(&self) -> usize {
        self.symptoms.len()
    }

    /// Number of rules
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}
