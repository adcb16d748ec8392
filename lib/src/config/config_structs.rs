// lib/src/config/config_structs.rs

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use triage_models::PainPolicy;

use crate::config::config_defaults::*;
use crate::errors::{Result, TriageError};

/// Where the HTTP service listens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestConfig {
    pub host: String,
    pub port: u16,
}

impl Default for RestConfig {
    fn default() -> Self {
        RestConfig { host: default_rest_host(), port: default_rest_port() }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// What to do with integer pain scores outside 0..=10.
    pub pain_policy: PainPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacilitiesConfig {
    /// YAML or JSON registry file; the built-in Philadelphia list when unset.
    pub registry_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub seed: Option<u64>,
}

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    pub rest: RestConfig,
    pub engine: EngineConfig,
    pub facilities: FacilitiesConfig,
    pub classifier: ClassifierConfig,
}

impl TriageConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rest.port == 0 {
            return Err(TriageError::ConfigurationError("rest.port must be non-zero".to_string()));
        }
        if self.rest.host.trim().is_empty() {
            return Err(TriageError::ConfigurationError("rest.host must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.rest.host, self.rest.port)
    }
}
