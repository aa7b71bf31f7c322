//! Run configuration types.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};

/// Options forwarded to terraform's state-locking flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InitOptions {
    /// State locking; `None` leaves the tool default in place
    pub lock: Option<bool>,
    /// Lock timeout as a duration string (e.g. "30s")
    pub lock_timeout: Option<String>,
}

/// Options for the fmt sub-command.
///
/// Each field is tri-state: `None` emits no flag at all, while an
/// explicit `Some(false)` still emits `-<name>=false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FmtOptions {
    pub list: Option<bool>,
    pub write: Option<bool>,
    pub diff: Option<bool>,
    pub check: Option<bool>,
}

/// Run configuration.
///
/// Consumed by reference by the command builders; a builder call never
/// mutates it. All fields are optional in descriptor files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Concurrent operation limit; 0 leaves the tool default in place
    pub parallelism: u32,
    /// Resource addresses to limit the run to, in order
    pub targets: Vec<String>,
    /// Input variables; emission order is imposed at build time
    pub vars: HashMap<String, String>,
    /// Variable files, in order
    pub var_files: Vec<String>,
    /// State-locking options
    pub init_options: InitOptions,
    /// fmt sub-command options
    pub fmt_options: FmtOptions,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parallelism(mut self, n: u32) -> Self {
        self.parallelism = n;
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.targets.push(target.into());
        self
    }

    pub fn var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn var_file(mut self, path: impl Into<String>) -> Self {
        self.var_files.push(path.into());
        self
    }

    pub fn lock(mut self, lock: bool) -> Self {
        self.init_options.lock = Some(lock);
        self
    }

    pub fn lock_timeout(mut self, timeout: impl Into<String>) -> Self {
        self.init_options.lock_timeout = Some(timeout.into());
        self
    }

    pub fn fmt_options(mut self, options: FmtOptions) -> Self {
        self.fmt_options = options;
        self
    }

    /// Load a configuration descriptor from a YAML or JSON file.
    ///
    /// The format is chosen by file extension; anything else is an
    /// [`ConfigError::UnsupportedFormat`].
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("Reading configuration from {:?}", path);

        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
            "json" => Ok(serde_json::from_str(&content)?),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = Config::new()
            .parallelism(5)
            .target("module.network")
            .var("region", "eu-west-1")
            .var_file("common.tfvars");

        assert_eq!(config.parallelism, 5);
        assert_eq!(config.targets, vec!["module.network".to_string()]);
        assert_eq!(config.vars.get("region"), Some(&"eu-west-1".to_string()));
        assert_eq!(config.var_files, vec!["common.tfvars".to_string()]);
    }

    #[test]
    fn test_default_config_is_empty() {
        let config = Config::default();

        assert_eq!(config.parallelism, 0);
        assert!(config.targets.is_empty());
        assert!(config.vars.is_empty());
        assert!(config.var_files.is_empty());
        assert!(config.init_options.lock.is_none());
        assert!(config.init_options.lock_timeout.is_none());
        assert!(config.fmt_options.list.is_none());
    }

    #[test]
    fn test_partial_yaml_descriptor() {
        let config: Config = serde_yaml::from_str("parallelism: 3\ntargets:\n  - target1\n").unwrap();

        assert_eq!(config.parallelism, 3);
        assert_eq!(config.targets, vec!["target1".to_string()]);
        assert!(config.vars.is_empty());
    }

    #[test]
    fn test_tri_state_false_survives_deserialization() {
        let config: Config =
            serde_yaml::from_str("fmt_options:\n  list: false\n  check: true\n").unwrap();

        assert_eq!(config.fmt_options.list, Some(false));
        assert_eq!(config.fmt_options.check, Some(true));
        assert_eq!(config.fmt_options.write, None);
    }
}
