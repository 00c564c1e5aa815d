//! Urgency Tiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Urgency tier, ordered `None < Low < Moderate < Urgent < Critical`
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// No rule fired
    #[default]
    None,
    /// Self-care, monitor symptoms
    Low,
    /// See a provider within 24-48 hours
    Moderate,
    /// See a provider within hours
    Urgent,
    /// Emergency
    Critical,
}

/// Error parsing a tier name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown tier: {0}")]
pub struct ParseTierError(pub String);

impl Tier {
    /// Tiers a rule may belong to, highest priority first
    pub const RULE_TIERS: [Tier; 4] = [Tier::Critical, Tier::Urgent, Tier::Moderate, Tier::Low];

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::None => "none",
            Tier::Low => "low",
            Tier::Moderate => "moderate",
            Tier::Urgent => "urgent",
            Tier::Critical => "critical",
        }
    }

    /// Get recommended action
    pub fn recommended_action(&self) -> &'static str {
        match self {
            Tier::Critical => {
                "Seek IMMEDIATE emergency medical attention. Call emergency services NOW."
            }
            Tier::Urgent => "Seek medical attention as soon as possible (within hours).",
            Tier::Moderate => "Schedule a medical appointment soon (within 24-48 hours).",
            Tier::Low => {
                "Monitor symptoms. Visit a healthcare provider if they persist or worsen."
            }
            Tier::None => {
                "No matching rules. Consider consulting a healthcare provider if concerned."
            }
        }
    }

    /// Whether rules may be assigned to this tier
    pub fn is_rule_tier(&self) -> bool {
        !matches!(self, Tier::None)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Tier::None),
            "low" => Ok(Tier::Low),
            "moderate" => Ok(Tier::Moderate),
            "urgent" => Ok(Tier::Urgent),
            "critical" => Ok(Tier::Critical),
            other => Err(ParseTierError(other.to_string())),
        }
    }
}
