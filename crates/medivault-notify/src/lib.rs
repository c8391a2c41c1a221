// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notifier adapter backed by the Medivault emergency HTTP backend.
//!
//! [`EmergencyNotifier`] implements [`NotifierAdapter`] over
//! [`EmergencyClient`], translating wire responses into the portal's
//! domain outcomes.

pub mod client;
pub mod types;

use async_trait::async_trait;
use medivault_config::model::EmergencyConfig;
use medivault_core::{
    AdapterType, EmergencyRequest, HealthStatus, MedivaultError, NotifierAdapter, NotifyOutcome,
    PortalAdapter, VoiceAnalysisOutcome,
};
use tracing::info;

pub use client::EmergencyClient;
use types::{NotifyResponse, VoiceResponse};

const ADAPTER_NAME: &str = "emergency-http";

/// Notifier adapter over the emergency backend.
pub struct EmergencyNotifier {
    client: EmergencyClient,
}

impl EmergencyNotifier {
    pub fn new(client: EmergencyClient) -> Self {
        Self { client }
    }

    /// Builds the notifier from the `[emergency]` config section.
    pub fn from_config(config: &EmergencyConfig) -> Result<Self, MedivaultError> {
        Ok(Self::new(EmergencyClient::from_config(config)?))
    }
}

impl From<NotifyResponse> for NotifyOutcome {
    fn from(response: NotifyResponse) -> Self {
        Self {
            messages_sent: response.messages.as_ref().map_or(0, Vec::len),
            // A JSON null `call` means no call was placed.
            call_initiated: matches!(&response.call, Some(v) if !v.is_null()),
            status: response.status,
        }
    }
}

impl From<VoiceResponse> for VoiceAnalysisOutcome {
    fn from(response: VoiceResponse) -> Self {
        Self {
            stress_level: response.stress_level,
            emergency_type: response.emergency_type,
            recommendation: response.recommendation,
        }
    }
}

#[async_trait]
impl PortalAdapter for EmergencyNotifier {
    fn name(&self) -> &str {
        ADAPTER_NAME
    }

    fn version(&self) -> semver::Version {
        semver::Version::parse(env!("CARGO_PKG_VERSION"))
            .unwrap_or_else(|_| semver::Version::new(0, 0, 0))
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Notifier
    }

    async fn health_check(&self) -> Result<HealthStatus, MedivaultError> {
        // The backend has no health endpoint; a constructed client is
        // considered healthy until a call says otherwise.
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), MedivaultError> {
        info!(adapter = ADAPTER_NAME, "shutting down notifier adapter");
        Ok(())
    }
}

#[async_trait]
impl NotifierAdapter for EmergencyNotifier {
    async fn notify(&self, request: &EmergencyRequest) -> Result<NotifyOutcome, MedivaultError> {
        let response = self.client.send_emergency(request).await?;
        let outcome = NotifyOutcome::from(response);
        info!(
            status = %outcome.status,
            messages_sent = outcome.messages_sent,
            call_initiated = outcome.call_initiated,
            "emergency notification delivered"
        );
        Ok(outcome)
    }

    async fn voice_analysis(
        &self,
        session_id: &str,
    ) -> Result<VoiceAnalysisOutcome, MedivaultError> {
        let response = self.client.fetch_voice_analysis(session_id).await?;
        Ok(VoiceAnalysisOutcome::from(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_counts_messages_and_detects_call() {
        let response: NotifyResponse = serde_json::from_str(
            r#"{"status":"success","messages":[{},{},{}],"call":{"sid":"CA1"}}"#,
        )
        .unwrap();
        let outcome = NotifyOutcome::from(response);
        assert_eq!(outcome.messages_sent, 3);
        assert!(outcome.call_initiated);
        assert_eq!(outcome.status, "success");
    }

    #[test]
    fn outcome_defaults_when_messages_and_call_absent() {
        let response: NotifyResponse = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        let outcome = NotifyOutcome::from(response);
        assert_eq!(outcome.messages_sent, 0);
        assert!(!outcome.call_initiated);
    }

    #[test]
    fn null_call_is_not_initiated() {
        let response: NotifyResponse =
            serde_json::from_str(r#"{"status":"success","call":null}"#).unwrap();
        assert!(!NotifyOutcome::from(response).call_initiated);
    }

    #[test]
    fn empty_messages_array_counts_zero() {
        let response: NotifyResponse =
            serde_json::from_str(r#"{"status":"success","messages":[]}"#).unwrap();
        assert_eq!(NotifyOutcome::from(response).messages_sent, 0);
    }

    #[test]
    fn voice_outcome_preserves_absent_fields() {
        let outcome = VoiceAnalysisOutcome::from(VoiceResponse::default());
        assert!(outcome.stress_level.is_none());
        assert!(outcome.emergency_type.is_none());
        assert!(outcome.recommendation.is_none());
    }

    #[test]
    fn adapter_identity() {
        let notifier = EmergencyNotifier::new(
            EmergencyClient::new("http://localhost:5000", std::time::Duration::from_secs(5))
                .unwrap(),
        );
        assert_eq!(notifier.name(), "emergency-http");
        assert_eq!(notifier.adapter_type(), AdapterType::Notifier);
    }
}
