// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock notifier adapter with scripted outcomes.
//!
//! Outcomes are popped from FIFO queues. When a queue is empty, a default
//! successful outcome is returned. Every notify request is captured for
//! later assertion.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use medivault_core::{
    AdapterType, EmergencyRequest, HealthStatus, MedivaultError, NotifierAdapter, NotifyOutcome,
    PortalAdapter, VoiceAnalysisOutcome,
};

/// A mock notifier that returns pre-configured outcomes.
pub struct MockNotifier {
    notify_outcomes: Arc<Mutex<VecDeque<Result<NotifyOutcome, String>>>>,
    voice_outcomes: Arc<Mutex<VecDeque<Result<VoiceAnalysisOutcome, String>>>>,
    requests: Arc<Mutex<Vec<EmergencyRequest>>>,
}

impl MockNotifier {
    /// Create a mock notifier with empty queues.
    pub fn new() -> Self {
        Self {
            notify_outcomes: Arc::new(Mutex::new(VecDeque::new())),
            voice_outcomes: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a successful notify outcome.
    pub async fn push_outcome(&self, outcome: NotifyOutcome) {
        self.notify_outcomes.lock().await.push_back(Ok(outcome));
    }

    /// Queue a notify failure with the given message.
    pub async fn push_failure(&self, message: impl Into<String>) {
        self.notify_outcomes
            .lock()
            .await
            .push_back(Err(message.into()));
    }

    /// Queue a successful voice analysis outcome.
    pub async fn push_voice_outcome(&self, outcome: VoiceAnalysisOutcome) {
        self.voice_outcomes.lock().await.push_back(Ok(outcome));
    }

    /// Queue a voice analysis failure.
    pub async fn push_voice_failure(&self, message: impl Into<String>) {
        self.voice_outcomes
            .lock()
            .await
            .push_back(Err(message.into()));
    }

    /// All notify requests received so far, in order.
    pub async fn requests(&self) -> Vec<EmergencyRequest> {
        self.requests.lock().await.clone()
    }

    /// Number of notify calls received.
    pub async fn notify_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    fn default_outcome() -> NotifyOutcome {
        NotifyOutcome {
            status: "success".to_string(),
            messages_sent: 1,
            call_initiated: false,
        }
    }
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PortalAdapter for MockNotifier {
    fn name(&self) -> &str {
        "mock-notifier"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Notifier
    }

    async fn health_check(&self) -> Result<HealthStatus, MedivaultError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), MedivaultError> {
        Ok(())
    }
}

#[async_trait]
impl NotifierAdapter for MockNotifier {
    async fn notify(&self, request: &EmergencyRequest) -> Result<NotifyOutcome, MedivaultError> {
        self.requests.lock().await.push(request.clone());

        match self.notify_outcomes.lock().await.pop_front() {
            Some(Ok(outcome)) => Ok(outcome),
            Some(Err(message)) => Err(MedivaultError::Dispatch {
                message,
                source: None,
            }),
            None => Ok(Self::default_outcome()),
        }
    }

    async fn voice_analysis(
        &self,
        _session_id: &str,
    ) -> Result<VoiceAnalysisOutcome, MedivaultError> {
        match self.voice_outcomes.lock().await.pop_front() {
            Some(Ok(outcome)) => Ok(outcome),
            Some(Err(message)) => Err(MedivaultError::VoiceAnalysis {
                message,
                source: None,
            }),
            None => Ok(VoiceAnalysisOutcome::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medivault_core::{EmergencyUserInfo, GeoPosition};

    fn request() -> EmergencyRequest {
        EmergencyRequest {
            location: GeoPosition {
                latitude: 0.0,
                longitude: 0.0,
                accuracy: 1.0,
            },
            contacts: vec![],
            user_info: EmergencyUserInfo {
                name: "Unknown User".into(),
                blood_group: "Unknown".into(),
                critical_conditions: "None reported".into(),
                allergies: "None reported".into(),
            },
        }
    }

    #[tokio::test]
    async fn queued_outcomes_returned_in_order() {
        let notifier = MockNotifier::new();
        notifier
            .push_outcome(NotifyOutcome {
                status: "success".into(),
                messages_sent: 3,
                call_initiated: true,
            })
            .await;
        notifier.push_failure("backend down").await;

        let first = notifier.notify(&request()).await.unwrap();
        assert_eq!(first.messages_sent, 3);
        assert!(notifier.notify(&request()).await.is_err());

        // Queue exhausted, falls back to default
        let third = notifier.notify(&request()).await.unwrap();
        assert_eq!(third.status, "success");
        assert_eq!(notifier.notify_count().await, 3);
    }

    #[tokio::test]
    async fn requests_are_captured() {
        let notifier = MockNotifier::new();
        notifier.notify(&request()).await.unwrap();
        let captured = notifier.requests().await;
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].user_info.name, "Unknown User");
    }

    #[tokio::test]
    async fn voice_failure_is_voice_error_kind() {
        let notifier = MockNotifier::new();
        notifier.push_voice_failure("analysis offline").await;
        let err = notifier.voice_analysis("s1").await.unwrap_err();
        assert!(matches!(err, MedivaultError::VoiceAnalysis { .. }));
    }
}
