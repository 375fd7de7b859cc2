use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::core::pricing::Pricing;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Gemini API key. `GEMINI_API_KEY` in the environment overrides the
    /// file value.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Directory scanned for images; outputs are written next to them.
    #[serde(default = "default_image_dir")]
    pub image_dir: PathBuf,
    #[serde(default)]
    pub pricing: Pricing,
}

fn default_model() -> String {
    "gemini-2.5-flash-preview-05-20".to_string()
}

fn default_image_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ocr_images")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            image_dir: default_image_dir(),
            pricing: Pricing::default(),
        }
    }
}

fn apply_env_override(config: &mut AppConfig, env_key: Option<String>) {
    if let Some(key) = env_key {
        if !key.is_empty() {
            config.api_key = key;
        }
    }
}

impl AppConfig {
    /// Get the config file path, respecting XDG_CONFIG_HOME
    pub fn config_path() -> PathBuf {
        let config_dir = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".config")
            });
        config_dir.join("ocrbatch").join("config.toml")
    }

    /// Load config from the default path, falling back to defaults if not found
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            toml::from_str::<AppConfig>(&content)?
        } else {
            Self::default()
        };
        apply_env_override(&mut config, std::env::var("GEMINI_API_KEY").ok());
        Ok(config)
    }

    /// Serialize and write this config to the config file path.
    pub fn save(&self) -> Result<PathBuf, std::io::Error> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).expect("Failed to serialize config");
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Validate the config
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.api_key.is_empty() {
            issues.push(
                "No API key configured (set api_key or the GEMINI_API_KEY environment variable)"
                    .to_string(),
            );
        }
        if self.model.is_empty() {
            issues.push("Empty model identifier".to_string());
        }
        if self.image_dir.as_os_str().is_empty() {
            issues.push("Empty image_dir".to_string());
        }
        if self.pricing.input_per_million_usd < 0.0 {
            issues.push(format!(
                "Negative input price: {}",
                self.pricing.input_per_million_usd
            ));
        }
        if self.pricing.output_per_million_usd < 0.0 {
            issues.push(format!(
                "Negative output price: {}",
                self.pricing.output_per_million_usd
            ));
        }
        if self.pricing.usd_to_inr_rate <= 0.0 {
            issues.push(format!(
                "Conversion rate must be positive, got {}",
                self.pricing.usd_to_inr_rate
            ));
        }
        issues
    }
}
