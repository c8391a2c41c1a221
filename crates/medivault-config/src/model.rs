// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Medivault portal engine.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Medivault configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MedivaultConfig {
    /// Portal identity and logging settings.
    #[serde(default)]
    pub portal: PortalConfig,

    /// Emergency dispatch settings.
    #[serde(default)]
    pub emergency: EmergencyConfig,

    /// Local key-value store settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Medical record upload policy settings.
    #[serde(default)]
    pub records: RecordsConfig,
}

/// Portal identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PortalConfig {
    /// Display name of the portal instance.
    #[serde(default = "default_portal_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            name: default_portal_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_portal_name() -> String {
    "medivault".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Emergency dispatch configuration.
///
/// The fallback position is used whenever the device location cannot be
/// read within the bounded wait; it defaults to the portal's stock
/// coordinate (downtown San Francisco).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EmergencyConfig {
    /// Base URL of the emergency notification backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout for the outbound notification call, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Bounded wait for the device location read, in seconds.
    #[serde(default = "default_location_timeout_secs")]
    pub location_timeout_secs: u64,

    /// Fallback latitude when location is unavailable.
    #[serde(default = "default_fallback_latitude")]
    pub fallback_latitude: f64,

    /// Fallback longitude when location is unavailable.
    #[serde(default = "default_fallback_longitude")]
    pub fallback_longitude: f64,

    /// Fallback accuracy in meters when location is unavailable.
    #[serde(default = "default_fallback_accuracy")]
    pub fallback_accuracy: f64,
}

impl Default for EmergencyConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            location_timeout_secs: default_location_timeout_secs(),
            fallback_latitude: default_fallback_latitude(),
            fallback_longitude: default_fallback_longitude(),
            fallback_accuracy: default_fallback_accuracy(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_location_timeout_secs() -> u64 {
    5
}

fn default_fallback_latitude() -> f64 {
    37.7749
}

fn default_fallback_longitude() -> f64 {
    -122.4194
}

fn default_fallback_accuracy() -> f64 {
    100.0
}

/// Local key-value store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Directory where per-key JSON blobs are stored.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> String {
    dirs::data_dir()
        .map(|p| p.join("medivault"))
        .unwrap_or_else(|| std::path::PathBuf::from("medivault-data"))
        .to_string_lossy()
        .into_owned()
}

/// Medical record upload policy configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RecordsConfig {
    /// Maximum accepted file size in bytes (boundary inclusive).
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,

    /// Accepted declared content types.
    #[serde(default = "default_allowed_types")]
    pub allowed_types: Vec<String>,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: default_max_file_bytes(),
            allowed_types: default_allowed_types(),
        }
    }
}

fn default_max_file_bytes() -> u64 {
    10 * 1024 * 1024
}

fn default_allowed_types() -> Vec<String> {
    vec![
        "application/pdf".to_string(),
        "image/jpeg".to_string(),
        "image/png".to_string(),
    ]
}
