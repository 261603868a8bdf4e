//! Site-wide configuration shared by every page.
//!
//! The frontend embeds a `site.json` file and parses it with
//! [`SiteConfig::from_json`]. Any field may be omitted.

use crate::enums::Theme;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Length of the tab/subsection transition window in milliseconds.
pub const DEFAULT_TRANSITION_MS: u32 = 350;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("transition_ms must be greater than zero")]
    ZeroTransition,
    #[error("storage key `{0}` must not be empty")]
    EmptyStorageKey(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub company_name: String,
    pub transition_ms: u32,
    pub default_theme: Theme,
    pub theme_storage_key: String,
    pub consent_storage_key: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            company_name: "Northwind Holdings".to_string(),
            transition_ms: DEFAULT_TRANSITION_MS,
            default_theme: Theme::default(),
            theme_storage_key: "showcase-theme".to_string(),
            consent_storage_key: "showcase-cookie-consent".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.transition_ms == 0 {
            return Err(ConfigError::ZeroTransition);
        }
        if self.theme_storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey("theme_storage_key"));
        }
        if self.consent_storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey("consent_storage_key"));
        }
        Ok(())
    }
}
