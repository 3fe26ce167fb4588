//! CLI configuration at ~/.config/dashify/config.toml.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, File};
use serde::{Deserialize, Serialize};

static DEFAULT_API_URL: &str = "http://localhost:5000/api";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn is_default_api_url(url: &String) -> bool {
    url == DEFAULT_API_URL
}

/// User configuration for the terminal client.
#[derive(Serialize, Deserialize, Clone)]
pub struct PortalConfig {
    #[serde(default = "default_api_url", skip_serializing_if = "is_default_api_url")]
    pub api_url: String,

    /// Bearer token for the portal API. Absent means anonymous mode
    /// (sample data only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        PortalConfig {
            api_url: default_api_url(),
            token: None,
        }
    }
}

impl PortalConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("dashify");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let cfg: PortalConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .context("Could not read config")?
            .try_deserialize()
            .context("Invalid config")?;

        Ok(cfg)
    }

    /// Save the current config to ~/.config/dashify/config.toml
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Could not create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Could not serialize config")?;
        std::fs::write(&config_path, content).context("Could not write config file")?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    fn create_default_config(path: &Path) -> Result<()> {
        let contents = format!(
            "\
# dashify configuration

# Portal API base URL:
# api_url = \"{}\"

# API token (stored by `dashify auth`):
# token = \"...\"
",
            DEFAULT_API_URL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Could not create config directory")?;
        }

        std::fs::write(path, contents).context("Could not write config file")?;

        Ok(())
    }
}
