// lib/src/config/config_defaults.rs

use std::path::PathBuf;

pub const DEFAULT_REST_API_HOST: &str = "127.0.0.1";
pub const DEFAULT_REST_API_PORT: u16 = 8082;
/// Looked up in the working directory when no `--config` is given. Any
/// extension the config crate understands is accepted.
pub const DEFAULT_CONFIG_FILE_STEM: &str = "triage_config";
pub const ENV_PREFIX: &str = "TRIAGE";
pub const ENV_SEPARATOR: &str = "__";

pub fn default_rest_host() -> String {
    DEFAULT_REST_API_HOST.to_string()
}

pub fn default_rest_port() -> u16 {
    DEFAULT_REST_API_PORT
}

pub fn default_registry_path() -> Option<PathBuf> {
    None
}

pub fn default_classifier_seed() -> Option<u64> {
    None
}
