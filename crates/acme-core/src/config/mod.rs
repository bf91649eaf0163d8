mod defaults;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::AcmeError;
use defaults::*;

/// Environment variable that overrides `router.base_url` (set by the
/// build/deploy tooling).
pub const BASE_URL_ENV: &str = "ACME_BASE_URL";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
    #[serde(default)]
    pub router: RouterConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name, used as the document title prefix.
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
        }
    }
}

/// Locale catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Active locale code.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Locale consulted when a key is missing from the active one.
    #[serde(default = "default_fallback_locale")]
    pub fallback_locale: String,
    /// Expose the resolved strings as template bindings.
    #[serde(default = "default_true")]
    pub global_injection: bool,
    /// Directory of `<code>.json` dictionaries. Empty = bundled dictionaries.
    #[serde(default)]
    pub locales_dir: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            fallback_locale: default_fallback_locale(),
            global_injection: true,
            locales_dir: String::new(),
        }
    }
}

/// Router and history settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    /// URL prefix for history-based routing.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Separator between the app name and the page title.
    #[serde(default = "default_title_separator")]
    pub title_separator: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            title_separator: default_title_separator(),
        }
    }
}

impl Config {
    /// Apply overrides from the process environment.
    ///
    /// Only `ACME_BASE_URL` is recognised; an empty value is ignored.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(base) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            info!("config: router.base_url overridden by {BASE_URL_ENV}={base}");
            self.router.base_url = base;
        }
    }

    /// Check cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<(), AcmeError> {
        if self.i18n.locale.trim().is_empty() {
            return Err(AcmeError::Config("i18n.locale must not be empty".into()));
        }
        if self.i18n.fallback_locale.trim().is_empty() {
            return Err(AcmeError::Config(
                "i18n.fallback_locale must not be empty".into(),
            ));
        }
        if !self.router.base_url.starts_with('/') && !self.router.base_url.contains("://") {
            return Err(AcmeError::Config(format!(
                "router.base_url must be absolute, got '{}'",
                self.router.base_url
            )));
        }
        Ok(())
    }
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist. Environment overrides
/// are applied in both cases.
pub fn load(path: &str) -> Result<Config, AcmeError> {
    let path = Path::new(path);
    let mut config = if !path.exists() {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        Config::default()
    } else {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AcmeError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| AcmeError::Config(format!("failed to parse config: {}", e)))?
    };

    config.apply_env_overrides();
    config.validate()?;
    Ok(config)
}
