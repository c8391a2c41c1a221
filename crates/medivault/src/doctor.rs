// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `medivault doctor` command implementation.
//!
//! Runs diagnostic checks against the Medivault environment to identify
//! configuration issues, storage problems, and backend connectivity.

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use medivault_config::MedivaultConfig;
use medivault_core::{HealthStatus, KeyValueStore, MedivaultError, PortalAdapter};
use medivault_store::JsonFileStore;

/// Status of a diagnostic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed successfully.
    Pass,
    /// Check passed with a warning.
    Warn,
    /// Check failed.
    Fail,
}

/// Result of a single diagnostic check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check.
    pub name: String,
    /// Check status.
    pub status: CheckStatus,
    /// Human-readable message.
    pub message: String,
    /// Duration the check took.
    pub duration: Duration,
}

/// Run the `medivault doctor` command.
///
/// With `--plain`, disables colored output.
pub async fn run_doctor(config: &MedivaultConfig, plain: bool) -> Result<(), MedivaultError> {
    let use_color = !plain && std::io::stdout().is_terminal();

    let results = vec![
        check_config(config),
        check_data_dir(config).await,
        check_backend(config).await,
    ];

    println!();
    println!("  medivault doctor");
    println!("  {}", "-".repeat(50));

    let mut fail_count = 0;
    let mut warn_count = 0;

    for result in &results {
        let duration_ms = result.duration.as_millis();
        let line = match result.status {
            CheckStatus::Pass => {
                if use_color {
                    use colored::Colorize;
                    format!(
                        "    {} {:<12} {} ({duration_ms}ms)",
                        "✓".green(),
                        result.name,
                        result.message
                    )
                } else {
                    format!(
                        "    [OK]   {:<12} {} ({duration_ms}ms)",
                        result.name, result.message
                    )
                }
            }
            CheckStatus::Warn => {
                warn_count += 1;
                if use_color {
                    use colored::Colorize;
                    format!(
                        "    {} {:<12} {} ({duration_ms}ms)",
                        "!".yellow(),
                        result.name,
                        result.message.yellow()
                    )
                } else {
                    format!(
                        "    [WARN] {:<12} {} ({duration_ms}ms)",
                        result.name, result.message
                    )
                }
            }
            CheckStatus::Fail => {
                fail_count += 1;
                if use_color {
                    use colored::Colorize;
                    format!(
                        "    {} {:<12} {} ({duration_ms}ms)",
                        "✗".red(),
                        result.name,
                        result.message.red()
                    )
                } else {
                    format!(
                        "    [FAIL] {:<12} {} ({duration_ms}ms)",
                        result.name, result.message
                    )
                }
            }
        };
        println!("{line}");
    }

    println!("  {}", "-".repeat(50));
    println!(
        "  {} checks, {} warnings, {} failures",
        results.len(),
        warn_count,
        fail_count
    );
    println!();

    if fail_count > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn check_config(config: &MedivaultConfig) -> CheckResult {
    let start = Instant::now();
    // Config already passed load-time validation to get here.
    CheckResult {
        name: "config".to_string(),
        status: CheckStatus::Pass,
        message: format!("portal `{}` valid", config.portal.name),
        duration: start.elapsed(),
    }
}

async fn check_data_dir(config: &MedivaultConfig) -> CheckResult {
    let start = Instant::now();
    let store = JsonFileStore::from_config(&config.storage);

    let (status, message) = match store.initialize().await {
        Ok(()) => match store.health_check().await {
            Ok(HealthStatus::Healthy) => {
                (CheckStatus::Pass, config.storage.data_dir.clone())
            }
            Ok(HealthStatus::Degraded(msg)) => (CheckStatus::Warn, msg),
            Ok(HealthStatus::Unhealthy(msg)) => (CheckStatus::Fail, msg),
            Err(e) => (CheckStatus::Fail, e.to_string()),
        },
        Err(e) => (CheckStatus::Fail, format!("cannot create data dir: {e}")),
    };

    CheckResult {
        name: "storage".to_string(),
        status,
        message,
        duration: start.elapsed(),
    }
}

async fn check_backend(config: &MedivaultConfig) -> CheckResult {
    let start = Instant::now();
    let base_url = config.emergency.base_url.trim_end_matches('/');

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(3))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            return CheckResult {
                name: "backend".to_string(),
                status: CheckStatus::Fail,
                message: format!("cannot build HTTP client: {e}"),
                duration: start.elapsed(),
            };
        }
    };

    // Any HTTP response means the backend is listening; the status code
    // does not matter for reachability.
    let (status, message) = match client.get(base_url).send().await {
        Ok(response) => (
            CheckStatus::Pass,
            format!("{base_url} reachable ({})", response.status()),
        ),
        Err(e) => (
            CheckStatus::Warn,
            format!("{base_url} unreachable: {e}"),
        ),
    };

    CheckResult {
        name: "backend".to_string(),
        status,
        message,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn data_dir_check_passes_on_writable_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = MedivaultConfig::default();
        config.storage.data_dir = dir.path().to_string_lossy().into_owned();

        let result = check_data_dir(&config).await;
        assert_eq!(result.status, CheckStatus::Pass);
    }

    #[test]
    fn config_check_reports_portal_name() {
        let result = check_config(&MedivaultConfig::default());
        assert_eq!(result.status, CheckStatus::Pass);
        assert!(result.message.contains("medivault"));
    }
}
