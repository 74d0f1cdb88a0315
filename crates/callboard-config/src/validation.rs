// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Range limits mirror what the backend accepts, so a bad value is caught at
//! startup rather than on the first request.

use crate::diagnostic::ConfigError;
use crate::model::CallboardConfig;

/// Largest page size the backend accepts for `GET /calls`.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Largest limit the backend accepts for `GET /dashboard/recent`.
pub const MAX_RECENT_CALLS: u32 = 50;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration. Collects every problem instead of
/// stopping at the first one.
pub fn validate_config(config: &CallboardConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let base_url = config.api.base_url.trim();
    if base_url.is_empty() {
        errors.push(ConfigError::Validation {
            message: "api.base_url must not be empty".to_string(),
        });
    } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        errors.push(ConfigError::Validation {
            message: format!("api.base_url `{base_url}` must start with http:// or https://"),
        });
    } else if base_url.trim_end_matches('/').ends_with("/api/v1") {
        errors.push(ConfigError::Validation {
            message: format!(
                "api.base_url `{base_url}` must be the server origin; \
                 the /api/v1 base path is added automatically"
            ),
        });
    }

    if !(1..=MAX_PAGE_SIZE).contains(&config.views.page_size) {
        errors.push(ConfigError::Validation {
            message: format!(
                "views.page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                config.views.page_size
            ),
        });
    }

    if !(1..=MAX_RECENT_CALLS).contains(&config.views.recent_calls_limit) {
        errors.push(ConfigError::Validation {
            message: format!(
                "views.recent_calls_limit must be between 1 and {MAX_RECENT_CALLS}, got {}",
                config.views.recent_calls_limit
            ),
        });
    }

    if !LOG_LEVELS.contains(&config.log.level.to_ascii_lowercase().as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{}` is not one of {}",
                config.log.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&CallboardConfig::default()).is_ok());
    }

    #[test]
    fn base_url_without_scheme_fails() {
        let mut config = CallboardConfig::default();
        config.api.base_url = "localhost:8000".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("http://"));
    }

    #[test]
    fn base_url_with_api_prefix_fails() {
        let mut config = CallboardConfig::default();
        config.api.base_url = "https://assistant.example.com/api/v1/".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].to_string().contains("server origin"));
    }

    #[test]
    fn page_size_limits_are_enforced() {
        let mut config = CallboardConfig::default();
        config.views.page_size = 0;
        assert!(validate_config(&config).is_err());
        config.views.page_size = MAX_PAGE_SIZE + 1;
        assert!(validate_config(&config).is_err());
        config.views.page_size = MAX_PAGE_SIZE;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = CallboardConfig::default();
        config.api.base_url = " ".to_string();
        config.views.recent_calls_limit = 0;
        config.log.level = "loud".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
