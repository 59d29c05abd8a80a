use crate::error::{BabelpostError, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Translation backend URL. Must be http or https.
    pub endpoint: Option<String>,
    pub default_source: String,
    pub default_target: String,
    /// Per-request timeout. No timeout when unset.
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            default_source: "en".to_string(),
            default_target: "fr".to_string(),
            timeout_secs: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        // Load from config file if it exists
        if let Some(config_path) = Self::config_file_path() {
            if config_path.exists() {
                match Self::from_file(&config_path) {
                    Ok(file_config) => config = file_config,
                    Err(e) => warn!("Ignoring {}: {}", config_path.display(), e),
                }
            }
        }

        config.apply_env();
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str::<Config>(&contents)?)
    }

    /// Override fields with `BABELPOST_*` environment variables.
    pub fn apply_env(&mut self) {
        if let Ok(endpoint) = std::env::var("BABELPOST_ENDPOINT") {
            self.endpoint = Some(endpoint);
        }
        if let Ok(source) = std::env::var("BABELPOST_SOURCE") {
            self.default_source = source;
        }
        if let Ok(target) = std::env::var("BABELPOST_TARGET") {
            self.default_target = target;
        }
        if let Ok(timeout) = std::env::var("BABELPOST_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(t) => self.timeout_secs = Some(t),
                Err(e) => warn!("Ignoring BABELPOST_TIMEOUT_SECS={:?}: {}", timeout, e),
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.endpoint()?;

        if self.timeout_secs == Some(0) {
            return Err(BabelpostError::Config(
                "Timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Parsed backend endpoint.
    pub fn endpoint(&self) -> Result<Url> {
        let raw = self.endpoint.as_deref().ok_or_else(|| {
            BabelpostError::Config(
                "No endpoint set. Export it with: export BABELPOST_ENDPOINT=http://127.0.0.1:5000/translate"
                    .to_string(),
            )
        })?;

        let url = Url::parse(raw.trim())
            .map_err(|e| BabelpostError::Config(format!("Invalid endpoint '{}': {}", raw, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(BabelpostError::Config(format!(
                "Endpoint '{}' uses unsupported scheme '{}'. Use http or https",
                raw, scheme
            ))),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path().ok_or_else(|| {
            BabelpostError::Config("Could not determine config directory".to_string())
        })?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    pub fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("babelpost").join("config.toml"))
    }
}
