// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Location provider trait for device geolocation capabilities.

use async_trait::async_trait;

use crate::error::MedivaultError;
use crate::traits::adapter::PortalAdapter;
use crate::types::GeoPosition;

/// Adapter over a device geolocation capability.
///
/// The dispatcher treats every failure from this trait as recoverable:
/// it substitutes the configured fallback position and continues, so
/// implementations should fail fast rather than block indefinitely.
#[async_trait]
pub trait LocationProvider: PortalAdapter {
    /// Reads the current device position.
    async fn current_position(&self) -> Result<GeoPosition, MedivaultError>;
}
