// lib/src/config/mod.rs

pub mod config_defaults;
pub mod config_structs;

use std::path::Path;
use std::sync::Arc;

use config::{Config, Environment, File};
use dotenv::dotenv;
use log::{debug, info};

pub use config_defaults::*;
pub use config_structs::{ClassifierConfig, EngineConfig, FacilitiesConfig, RestConfig, TriageConfig};

use crate::classifier::RandomStubClassifier;
use crate::errors::Result;
use crate::facilities::FacilityRegistry;
use crate::triage::TriageEngine;

/// Builds the configuration from, lowest precedence first: built-in defaults,
/// the config file, then `TRIAGE__SECTION__KEY` environment variables.
/// An explicit `path` must exist; the default `triage_config.*` is optional.
pub fn load_triage_config(path: Option<&Path>) -> Result<TriageConfig> {
    dotenv().ok();

    let file_source = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_CONFIG_FILE_STEM).required(false),
    };
    let config: TriageConfig = Config::builder()
        .add_source(file_source)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    config.validate()?;
    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

pub fn load_registry(config: &TriageConfig) -> Result<FacilityRegistry> {
    match &config.facilities.registry_path {
        Some(path) => FacilityRegistry::from_path(path),
        None => {
            info!("Using built-in facility registry");
            Ok(FacilityRegistry::builtin())
        }
    }
}

pub fn build_engine(config: &TriageConfig) -> Result<TriageEngine> {
    let registry = load_registry(config)?;
    let classifier = RandomStubClassifier::new(config.classifier.seed);
    Ok(TriageEngine::new(registry, Arc::new(classifier)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use triage_models::PainPolicy;

    #[test]
    fn defaults_are_sensible() {
        let config = TriageConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:8082");
        assert_eq!(config.engine.pain_policy, PainPolicy::Clamp);
        assert!(config.facilities.registry_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "rest:\n  port: 9191\nengine:\n  pain_policy: reject\nclassifier:\n  seed: 11"
        )
        .unwrap();
        let config = load_triage_config(Some(file.path())).unwrap();
        assert_eq!(config.rest.port, 9191);
        assert_eq!(config.rest.host, DEFAULT_REST_API_HOST);
        assert_eq!(config.engine.pain_policy, PainPolicy::Reject);
        assert_eq!(config.classifier.seed, Some(11));
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "rest:\n  port: 0").unwrap();
        assert!(load_triage_config(Some(file.path())).is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.yaml");
        assert!(load_triage_config(Some(&missing)).is_err());
    }

    #[test]
    fn engine_uses_configured_registry() {
        let mut registry = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            registry,
            r#"{{"facilities": [{{"name": "Solo UC", "type": "UrgentCare", "lat": 40.0, "lng": -75.0}}]}}"#
        )
        .unwrap();
        let mut config = TriageConfig::default();
        config.facilities.registry_path = Some(registry.path().to_path_buf());
        let engine = build_engine(&config).unwrap();
        assert_eq!(engine.registry().len(), 1);

        config.facilities.registry_path = None;
        assert_eq!(build_engine(&config).unwrap().registry().len(), 8);
    }
}
