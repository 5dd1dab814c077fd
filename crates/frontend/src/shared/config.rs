//! Конфигурация клиента: адреса API и медиафайлов.
//!
//! Значения по умолчанию встроены из `config.toml`, переменные окружения
//! `ONE_ERP_API_URL` / `ONE_ERP_MEDIA_URL` на этапе сборки их переопределяют.

use contracts::shared::media::media_url;
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: OriginConfig,
    pub media: OriginConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OriginConfig {
    pub origin: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

const FALLBACK_ORIGIN: &str = "http://localhost:1337";

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    match load_config(
        DEFAULT_CONFIG,
        option_env!("ONE_ERP_API_URL"),
        option_env!("ONE_ERP_MEDIA_URL"),
    ) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to parse embedded config.toml: {}", e);
            AppConfig::fallback()
        }
    }
});

/// Разобрать конфигурацию и применить переопределения
pub fn load_config(
    source: &str,
    api_override: Option<&str>,
    media_override: Option<&str>,
) -> Result<AppConfig, toml::de::Error> {
    let mut config: AppConfig = toml::from_str(source)?;
    if let Some(api) = api_override.filter(|s| !s.trim().is_empty()) {
        config.api.origin = api.trim().to_string();
    }
    if let Some(media) = media_override.filter(|s| !s.trim().is_empty()) {
        config.media.origin = media.trim().to_string();
    }
    Ok(config)
}

pub fn app_config() -> &'static AppConfig {
    &CONFIG
}

impl AppConfig {
    fn fallback() -> Self {
        Self {
            api: OriginConfig {
                origin: FALLBACK_ORIGIN.to_string(),
            },
            media: OriginConfig {
                origin: FALLBACK_ORIGIN.to_string(),
            },
        }
    }

    /// Полный URL эндпоинта, `path` начинается с `/api/`
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api.origin.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Полный URL медиафайла по относительному пути
    pub fn media_url(&self, path: &str) -> String {
        media_url(&self.media.origin, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(DEFAULT_CONFIG, None, None);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.origin, "http://localhost:1337");
        assert_eq!(config.media.origin, "http://localhost:1337");
    }

    #[test]
    fn test_overrides_win() {
        let config = load_config(
            DEFAULT_CONFIG,
            Some("https://api.one-erp.cl/"),
            Some("  "),
        )
        .unwrap();
        assert_eq!(config.api.origin, "https://api.one-erp.cl/");
        assert_eq!(config.media.origin, "http://localhost:1337");
        assert_eq!(
            config.api_url("/api/categories"),
            "https://api.one-erp.cl/api/categories"
        );
    }

    #[test]
    fn test_media_url_is_prefixed() {
        let config = AppConfig::fallback();
        assert_eq!(
            config.media_url("/uploads/thumbnail_a.png"),
            "http://localhost:1337/uploads/thumbnail_a.png"
        );
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(load_config("[api]\norigin = 5", None, None).is_err());
    }
}
