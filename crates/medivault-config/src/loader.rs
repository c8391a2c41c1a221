// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./medivault.toml` > `~/.config/medivault/medivault.toml`
//! > `/etc/medivault/medivault.toml` with environment variable overrides via
//! `MEDIVAULT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::MedivaultConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/medivault/medivault.toml` (system-wide)
/// 3. `~/.config/medivault/medivault.toml` (user XDG config)
/// 4. `./medivault.toml` (local directory)
/// 5. `MEDIVAULT_*` environment variables
pub fn load_config() -> Result<MedivaultConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MedivaultConfig::default()))
        .merge(Toml::file("/etc/medivault/medivault.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("medivault/medivault.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("medivault.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<MedivaultConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MedivaultConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<MedivaultConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MedivaultConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// CRITICAL: Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. For example, `MEDIVAULT_EMERGENCY_BASE_URL`
/// must map to `emergency.base_url`, not `emergency.base.url`.
fn env_provider() -> Env {
    Env::prefixed("MEDIVAULT_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: MEDIVAULT_EMERGENCY_BASE_URL -> "emergency_base_url"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("portal_", "portal.", 1)
            .replacen("emergency_", "emergency.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("records_", "records.", 1);
        mapped.into()
    })
}
