//! Knowledge Base Loading
//!
//! Reads the declarative TOML knowledge base through the `config` crate
//! into raw definitions. Integrity checks happen in the catalog.

use crate::catalog::RuleCatalog;
use crate::error::ConfigurationError;
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Raw symptom entry as written in the knowledge base
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SymptomDef {
    pub id: String,
    pub description: String,
}

/// Raw rule entry as written in the knowledge base
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RuleDef {
    pub name: String,
    /// Kept as text so an invalid tier is reported with the rule name
    pub tier: String,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub explanation: String,
}

/// Whole knowledge base document
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct KnowledgeBaseDef {
    #[serde(default)]
    pub symptoms: Vec<SymptomDef>,
    #[serde(default)]
    pub rules: Vec<RuleDef>,
}

impl KnowledgeBaseDef {
    /// Parse a TOML document
    pub fn from_toml(source: &str) -> Result<Self, ConfigurationError> {
        Self::build(Config::builder().add_source(File::from_str(source, FileFormat::Toml)))
    }

    /// Read a TOML file
    pub fn from_path(path: &Path) -> Result<Self, ConfigurationError> {
        if !path.is_file() {
            return Err(ConfigurationError::Missing(path.display().to_string()));
        }

        debug!("Reading knowledge base from {}", path.display());
        Self::build(
            Config::builder().add_source(File::from(path).format(FileFormat::Toml).required(true)),
        )
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigurationError> {
        builder
            .build()
            .and_then(|raw| raw.try_deserialize::<KnowledgeBaseDef>())
            .map_err(|e| ConfigurationError::Unreadable(e.to_string()))
    }
}

/// Where the knowledge base comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBaseConfig {
    /// External knowledge base file; the embedded one is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl KnowledgeBaseConfig {
    /// Use an external knowledge base file
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Load the configured catalog
    pub fn load(&self) -> Result<RuleCatalog, ConfigurationError> {
        match &self.path {
            Some(path) => {
                info!("Loading knowledge base from {}", path.display());
                RuleCatalog::load_from_path(path)
            }
            None => RuleCatalog::load(),
        }
    }
}
