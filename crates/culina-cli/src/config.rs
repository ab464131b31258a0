use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use culina_llm::GeminiConfig;

/// CLI configuration, loaded from TOML with serde defaults so a missing or
/// partial file behaves like the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Provider configuration
    #[serde(default)]
    pub provider: ProviderSection,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageSection,
}

/// `[provider]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSection {
    /// API key; the GEMINI_API_KEY environment variable takes precedence
    pub api_key: Option<String>,

    /// API base URL override (proxies, self-hosted gateways)
    pub base_url: Option<String>,

    /// Model used for full recipe generation
    pub recipe_model: Option<String>,

    /// Model used for suggestion queries
    pub suggestion_model: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: Option<u64>,
}

/// `[storage]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageSection {
    /// Directory holding the saved-recipes file
    pub data_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from `path`, or from the default location if none
    /// is given. A missing file is not an error; it loads as defaults.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => match Self::default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Default config file location: `~/.config/culina/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("culina").join("config.toml"))
    }

    /// Resolve the provider configuration, with the environment taking
    /// precedence over the file for the API key.
    pub fn gemini_config(&self) -> GeminiConfig {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.provider.api_key.clone())
            .unwrap_or_default();

        let mut config = GeminiConfig::new(api_key);
        if let Some(base_url) = &self.provider.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(model) = &self.provider.recipe_model {
            config.recipe_model = model.clone();
        }
        if let Some(model) = &self.provider.suggestion_model {
            config.suggestion_model = model.clone();
        }
        if let Some(timeout) = self.provider.timeout_secs {
            config.timeout_secs = timeout;
        }
        config
    }

    /// Resolve the data directory: CLI override, then config file, then
    /// `<platform data dir>/culina`, then the current directory.
    pub fn data_dir(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.storage.data_dir.clone())
            .or_else(|| dirs::data_dir().map(|dir| dir.join("culina")))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_as_defaults() {
        let config = CliConfig::load(Some(PathBuf::from("/definitely/not/here.toml"))).unwrap();
        assert!(config.provider.api_key.is_none());
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[provider]\nrecipe_model = \"gemini-exp\"\n").unwrap();

        let config = CliConfig::load(Some(path)).unwrap();
        assert_eq!(config.provider.recipe_model.as_deref(), Some("gemini-exp"));
        assert!(config.provider.api_key.is_none());

        let gemini = config.gemini_config();
        assert_eq!(gemini.recipe_model, "gemini-exp");
        assert_eq!(gemini.suggestion_model, "gemini-2.5-flash");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "provider = not toml").unwrap();
        assert!(CliConfig::load(Some(path)).is_err());
    }

    #[test]
    fn data_dir_prefers_the_cli_override() {
        let config = CliConfig {
            storage: StorageSection {
                data_dir: Some(PathBuf::from("/from/config")),
            },
            ..Default::default()
        };
        assert_eq!(
            config.data_dir(Some(PathBuf::from("/from/cli"))),
            PathBuf::from("/from/cli")
        );
        assert_eq!(config.data_dir(None), PathBuf::from("/from/config"));
    }
}
