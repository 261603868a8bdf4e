//! Загрузка конфигурации сайта.
//!
//! `site.json` встраивается в wasm на этапе сборки; при ошибке используется
//! `SiteConfig::default()`.

use contracts::config::SiteConfig;
use leptos::prelude::*;

const EMBEDDED_SITE_CONFIG: &str = include_str!("../site.json");

pub fn load_site_config() -> SiteConfig {
    parse_site_config(EMBEDDED_SITE_CONFIG)
}

fn parse_site_config(raw: &str) -> SiteConfig {
    match SiteConfig::from_json(raw) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Invalid site.json, falling back to defaults: {}", err);
            SiteConfig::default()
        }
    }
}

/// Хук чтения конфигурации, которую предоставляет `App`.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = SiteConfig::from_json(EMBEDDED_SITE_CONFIG).unwrap();
        assert_eq!(config.transition_ms, 350);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        assert_eq!(parse_site_config("not json"), SiteConfig::default());
        assert_eq!(
            parse_site_config(r#"{"transition_ms": 0}"#),
            SiteConfig::default()
        );
    }
}
