use std::env;
use thiserror::Error;

use crate::i18n::Locale;
use crate::view::DEFAULT_PAGE_SIZE;

/// Environment variable names for default settings
pub const ENV_LANG: &str = "PRORENAME_LANG";
pub const ENV_PAGE_SIZE: &str = "PRORENAME_PAGE_SIZE";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub locale: Locale,
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Command-line values take precedence over the environment
    pub fn with_overrides(
        mut self,
        locale: Option<Locale>,
        page_size: Option<usize>,
    ) -> Result<Self, ConfigError> {
        if let Some(locale) = locale {
            self.locale = locale;
        }
        if let Some(size) = page_size {
            self.page_size = validate_page_size("--page-size", &size.to_string())?;
        }
        Ok(self)
    }
}

fn validate_page_size(key: &'static str, raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
            reason: "page size must be at least 1".to_string(),
        }),
        Ok(n) => Ok(n),
        Err(e) => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Load defaults from environment variables
///
/// Recognized variables:
/// - `PRORENAME_LANG`: `en` or `zh`
/// - `PRORENAME_PAGE_SIZE`: rows per preview page (positive integer)
///
/// These can be set in a `.env` file in the working directory.
pub fn config_from_env() -> Result<Config, ConfigError> {
    let mut config = Config::default();

    if let Ok(raw) = env::var(ENV_LANG) {
        config.locale = raw.parse().map_err(|reason| ConfigError::InvalidValue {
            key: ENV_LANG,
            value: raw.clone(),
            reason,
        })?;
    }

    if let Ok(raw) = env::var(ENV_PAGE_SIZE) {
        config.page_size = validate_page_size(ENV_PAGE_SIZE, &raw)?;
    }

    Ok(config)
}
