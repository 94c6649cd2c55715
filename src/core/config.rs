use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{fs, path::PathBuf};
use tracing::debug;

use super::request::ConversionRequest;
use crate::providers::DEFAULT_BASE_URL;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProviderConfig {
    pub base_url: String,
    pub timeout_secs: Option<u64>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl ProviderConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Request values used when the command line leaves them out.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct DefaultsConfig {
    pub base: Option<String>,
    pub symbols: Option<String>,
    pub amount: Option<f64>,
    pub places: Option<i64>,
    pub source: Option<String>,
}

impl DefaultsConfig {
    pub fn to_request(&self) -> ConversionRequest {
        let fallback = ConversionRequest::default();
        ConversionRequest {
            base: self.base.clone().unwrap_or(fallback.base),
            symbols: self.symbols.clone().unwrap_or(fallback.symbols),
            amount: self.amount.unwrap_or(fallback.amount),
            places: self.places.unwrap_or(fallback.places),
            source: self.source.clone().unwrap_or(fallback.source),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl AppConfig {
    /// Loads the config from the default location, falling back to built-in
    /// values when no file exists yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("in", "codito", "fxconv")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
provider:
  base_url: "http://example.com/latest"
  timeout_secs: 10
defaults:
  base: "JPY"
  amount: 250.5
  source: "imf"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.provider.base_url, "http://example.com/latest");
        assert_eq!(config.provider.timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.defaults.base.as_deref(), Some("JPY"));
        assert!(config.defaults.symbols.is_none());

        let request = config.defaults.to_request();
        assert_eq!(request.base, "JPY");
        assert_eq!(request.symbols, "EUR");
        assert_eq!(request.amount, 250.5);
        assert_eq!(request.places, 2);
        assert_eq!(request.source, "imf");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").expect("Failed to deserialize");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.provider.base_url, DEFAULT_BASE_URL);
        assert!(config.provider.timeout().is_none());
        assert_eq!(config.defaults.to_request(), ConversionRequest::default());
    }

    #[test]
    fn test_load_from_path_reports_file() -> Result<()> {
        let temp_dir = tempfile::TempDir::new()?;
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "provider: [not, a, map]")?;

        let err = AppConfig::load_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));

        let missing = temp_dir.path().join("missing.yaml");
        let err = AppConfig::load_from_path(&missing).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));

        Ok(())
    }
}
