// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `medivault emergency` command implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use medivault_config::MedivaultConfig;
use medivault_core::{
    AdapterType, GeoPosition, HealthStatus, KeyValueStore, LocationProvider, MedivaultError,
    PortalAdapter,
};
use medivault_dispatch::EmergencyDispatcher;
use medivault_notify::EmergencyNotifier;
use medivault_store::JsonFileStore;

/// Location provider fed from CLI flags.
///
/// Without coordinates it fails immediately, which makes the dispatcher
/// fall back to the configured position.
struct CliLocationProvider {
    position: Option<GeoPosition>,
}

#[async_trait]
impl PortalAdapter for CliLocationProvider {
    fn name(&self) -> &str {
        "cli-args"
    }

    fn version(&self) -> semver::Version {
        semver::Version::parse(env!("CARGO_PKG_VERSION"))
            .unwrap_or_else(|_| semver::Version::new(0, 0, 0))
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Location
    }

    async fn health_check(&self) -> Result<HealthStatus, MedivaultError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), MedivaultError> {
        Ok(())
    }
}

#[async_trait]
impl LocationProvider for CliLocationProvider {
    async fn current_position(&self) -> Result<GeoPosition, MedivaultError> {
        self.position.ok_or_else(|| {
            MedivaultError::Internal("no position supplied on the command line".to_string())
        })
    }
}

/// Run the `medivault emergency` command.
pub async fn run_emergency(
    config: &MedivaultConfig,
    latitude: Option<f64>,
    longitude: Option<f64>,
    accuracy: f64,
    voice_session: Option<String>,
) -> Result<(), MedivaultError> {
    let position = match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Some(GeoPosition {
            latitude,
            longitude,
            accuracy,
        }),
        _ => None,
    };

    let store = JsonFileStore::from_config(&config.storage);
    store.initialize().await?;

    let notifier = EmergencyNotifier::from_config(&config.emergency)?;
    let dispatcher = EmergencyDispatcher::new(
        Arc::new(CliLocationProvider { position }),
        Arc::new(store),
        Arc::new(notifier),
        config.emergency.clone(),
    );

    info!("triggering emergency dispatch");
    let report = dispatcher.trigger().await?;

    println!("Emergency reported at {}", report.timestamp);
    println!(
        "  location:  {:.4}, {:.4} (±{}m)",
        report.location.latitude, report.location.longitude, report.location.accuracy
    );
    println!("  status:    {}", report.status);
    println!("  messages:  {}", report.messages_sent_count);
    println!("  call:      {}", if report.call_initiated { "initiated" } else { "not initiated" });

    if let Some(session_id) = voice_session {
        match dispatcher.analyze_voice(&session_id).await {
            Ok(analysis) => {
                println!("Voice analysis:");
                println!("  stress:    {}", analysis.stress_level);
                println!("  type:      {}", analysis.emergency_type);
                println!("  advice:    {}", analysis.recommendation);
            }
            Err(e) => {
                // The report above stands regardless.
                eprintln!("voice analysis unavailable: {e}");
            }
        }
    }

    Ok(())
}
