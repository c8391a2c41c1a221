// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as coordinate ranges, positive timeouts, and a
//! non-empty upload type list.

use crate::diagnostic::ConfigError;
use crate::model::MedivaultConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &MedivaultConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let base_url = config.emergency.base_url.trim();
    if base_url.is_empty() {
        errors.push(ConfigError::Validation {
            message: "emergency.base_url must not be empty".to_string(),
        });
    } else if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        errors.push(ConfigError::Validation {
            message: format!("emergency.base_url `{base_url}` must start with http:// or https://"),
        });
    }

    if config.emergency.request_timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "emergency.request_timeout_secs must be at least 1".to_string(),
        });
    }

    if config.emergency.location_timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "emergency.location_timeout_secs must be at least 1".to_string(),
        });
    }

    let lat = config.emergency.fallback_latitude;
    if !(-90.0..=90.0).contains(&lat) {
        errors.push(ConfigError::Validation {
            message: format!("emergency.fallback_latitude must be in [-90, 90], got {lat}"),
        });
    }

    let lon = config.emergency.fallback_longitude;
    if !(-180.0..=180.0).contains(&lon) {
        errors.push(ConfigError::Validation {
            message: format!("emergency.fallback_longitude must be in [-180, 180], got {lon}"),
        });
    }

    let accuracy = config.emergency.fallback_accuracy;
    if accuracy < 0.0 {
        errors.push(ConfigError::Validation {
            message: format!("emergency.fallback_accuracy must be non-negative, got {accuracy}"),
        });
    }

    if config.storage.data_dir.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.data_dir must not be empty".to_string(),
        });
    }

    if config.records.max_file_bytes == 0 {
        errors.push(ConfigError::Validation {
            message: "records.max_file_bytes must be at least 1".to_string(),
        });
    }

    if config.records.allowed_types.is_empty() {
        errors.push(ConfigError::Validation {
            message: "records.allowed_types must list at least one content type".to_string(),
        });
    }

    for (i, t) in config.records.allowed_types.iter().enumerate() {
        if t.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("records.allowed_types[{i}] must not be empty"),
            });
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
