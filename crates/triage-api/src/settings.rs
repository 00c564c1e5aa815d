//! API settings

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use triage_kb::KnowledgeBaseConfig;

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Listen address (default: 0.0.0.0:8080)
    pub bind_addr: String,
    /// Emit logs as JSON lines
    pub json_logs: bool,
    /// Knowledge base source
    #[serde(default)]
    pub kb: KnowledgeBaseConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            json_logs: false,
            kb: KnowledgeBaseConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Layer defaults, an optional `triage-api.toml` and `TRIAGE_API__*`
    /// environment variables (e.g. `TRIAGE_API__KB__PATH`).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(File::with_name("triage-api").required(false))
    }

    fn load_from<S>(file: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = Self::default();
        Config::builder()
            .set_default("bind_addr", defaults.bind_addr)?
            .set_default("json_logs", defaults.json_logs)?
            .add_source(file)
            .add_source(Environment::with_prefix("TRIAGE_API").separator("__"))
            .build()?
            .try_deserialize()
    }
}
