// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Callboard console.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a mistyped key fails at
//! startup instead of being silently ignored.

use serde::{Deserialize, Serialize};

/// Top-level Callboard configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CallboardConfig {
    /// Backend API location and credentials.
    #[serde(default)]
    pub api: ApiConfig,

    /// View sizing.
    #[serde(default)]
    pub views: ViewsConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Backend API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Origin of the backend, without the `/api/v1` base path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token. `None` sends requests unauthenticated.
    #[serde(default)]
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

/// View sizing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ViewsConfig {
    /// Calls per page in the calls list.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Number of recent calls shown on the dashboard.
    #[serde(default = "default_recent_calls_limit")]
    pub recent_calls_limit: u32,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            recent_calls_limit: default_recent_calls_limit(),
        }
    }
}

fn default_page_size() -> u32 {
    20
}

fn default_recent_calls_limit() -> u32 {
    5
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
