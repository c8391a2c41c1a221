// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock location provider for deterministic testing.

use async_trait::async_trait;

use medivault_core::{
    AdapterType, GeoPosition, HealthStatus, LocationProvider, MedivaultError, PortalAdapter,
};

enum Behavior {
    Fixed(GeoPosition),
    Fail(String),
    /// Never resolves, for exercising the bounded wait.
    Hang,
}

/// A mock location provider with a scripted behavior.
pub struct MockLocationProvider {
    behavior: Behavior,
}

impl MockLocationProvider {
    /// Always reports the given position.
    pub fn fixed(position: GeoPosition) -> Self {
        Self {
            behavior: Behavior::Fixed(position),
        }
    }

    /// Always fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Fail(message.into()),
        }
    }

    /// Never resolves. Callers with a bounded wait will time out.
    pub fn hanging() -> Self {
        Self {
            behavior: Behavior::Hang,
        }
    }
}

#[async_trait]
impl PortalAdapter for MockLocationProvider {
    fn name(&self) -> &str {
        "mock-location"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
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
impl LocationProvider for MockLocationProvider {
    async fn current_position(&self) -> Result<GeoPosition, MedivaultError> {
        match &self.behavior {
            Behavior::Fixed(position) => Ok(*position),
            Behavior::Fail(message) => Err(MedivaultError::Internal(message.clone())),
            Behavior::Hang => {
                futures::future::pending::<()>().await;
                unreachable!()
            }
        }
    }
}
