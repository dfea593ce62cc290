//! Configuration file support for depster.
//!
//! `depster.config.yml` in the working directory can point lookups at a
//! different registry (a mirror or a private registry) and bound how long a
//! single lookup may take.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::adapters::outbound::network::{DEFAULT_REGISTRY_URL, DEFAULT_TIMEOUT};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "depster.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub registry_url: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    pub fn registry_url(&self) -> &str {
        self.registry_url.as_deref().unwrap_or(DEFAULT_REGISTRY_URL)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to YAML null
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref url) = config.registry_url {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            bail!(
                "Invalid config: registry_url must be an http(s) URL, got '{}'.\n\n\
                 💡 Hint: Use a full URL such as \"https://registry.npmjs.org\".",
                url
            );
        }
    }

    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be greater than 0.\n\n\
             💡 Hint: Omit timeout_secs to use the default of {} seconds.",
            DEFAULT_TIMEOUT.as_secs()
        );
    }

    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
registry_url: https://registry.example.com/
timeout_secs: 5
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.registry_url(), "https://registry.example.com/");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_defaults_without_fields() {
        let config = ConfigFile::default();
        assert_eq!(config.registry_url(), "https://registry.npmjs.org");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_load_empty_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.registry_url.is_none());
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "retries: 3\ntimeout_secs: 10\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.unknown_fields.contains_key("retries"));
        assert_eq!(config.timeout_secs, Some(10));
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "timeout_secs: [unclosed").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "timeout_secs: 0\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("timeout_secs must be greater than 0"));
    }

    #[test]
    fn test_non_http_registry_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "registry_url: ftp://example.com\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("registry_url must be an http(s) URL"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_config_from_path(&dir.path().join("missing.yml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_discover_config_absent() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_discover_config_present() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "timeout_secs: 7\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(7));
    }
}
