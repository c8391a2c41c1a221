// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notifier trait for the emergency notification backend.

use async_trait::async_trait;

use crate::error::MedivaultError;
use crate::traits::adapter::PortalAdapter;
use crate::types::{EmergencyRequest, NotifyOutcome, VoiceAnalysisOutcome};

/// Adapter over the emergency notification backend.
///
/// One `notify` call maps to exactly one outbound HTTP request: no retry,
/// no backoff, no idempotency key. A failed call means "not notified" and
/// the caller may re-attempt immediately.
#[async_trait]
pub trait NotifierAdapter: PortalAdapter {
    /// Submits an emergency notification and returns the parsed outcome.
    async fn notify(&self, request: &EmergencyRequest) -> Result<NotifyOutcome, MedivaultError>;

    /// Requests voice analysis for the given session.
    ///
    /// Independent of `notify`: a failure here never affects a report
    /// produced by a prior notification.
    async fn voice_analysis(
        &self,
        session_id: &str,
    ) -> Result<VoiceAnalysisOutcome, MedivaultError>;
}
