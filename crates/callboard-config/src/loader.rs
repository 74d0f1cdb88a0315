// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./callboard.toml` > `~/.config/callboard/callboard.toml`
//! > `/etc/callboard/callboard.toml`, with `CALLBOARD_` environment overrides.

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::CallboardConfig;

pub(crate) const SYSTEM_CONFIG_PATH: &str = "/etc/callboard/callboard.toml";
pub(crate) const LOCAL_CONFIG_PATH: &str = "callboard.toml";

/// Per-user config path under the XDG config directory.
pub(crate) fn user_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("callboard/callboard.toml"))
        .unwrap_or_default()
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/callboard/callboard.toml`
/// 3. `~/.config/callboard/callboard.toml`
/// 4. `./callboard.toml`
/// 5. `CALLBOARD_*` environment variables
pub fn load_config() -> Result<CallboardConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CallboardConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path()))
        .merge(Toml::file(LOCAL_CONFIG_PATH))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string over the compiled defaults.
pub fn load_config_from_str(toml_content: &str) -> Result<CallboardConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CallboardConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<CallboardConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CallboardConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Environment provider mapping `CALLBOARD_SECTION_KEY` to `section.key`.
///
/// Uses `Env::map()` rather than `Env::split("_")`: `CALLBOARD_API_BASE_URL`
/// must become `api.base_url`, not `api.base.url`.
fn env_provider() -> Env {
    Env::prefixed("CALLBOARD_").map(|key| map_env_key(key.as_str()).into())
}

pub(crate) fn map_env_key(key: &str) -> String {
    for section in ["api", "views", "log"] {
        if let Some(rest) = key.strip_prefix(section).and_then(|r| r.strip_prefix('_')) {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}
