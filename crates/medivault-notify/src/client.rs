// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the emergency notification backend.
//!
//! Provides [`EmergencyClient`] which handles request construction and
//! response parsing for the `/emergency-contact` and `/ai/emergency-voice`
//! endpoints. Every call is a single attempt: the notification contract has
//! no retry, no backoff, and no idempotency key.

use std::time::Duration;

use medivault_config::model::EmergencyConfig;
use medivault_core::{EmergencyRequest, MedivaultError};
use tracing::debug;

use crate::types::{NotifyBody, NotifyResponse, VoiceResponse};

/// HTTP client for emergency backend communication.
///
/// Manages connection pooling and a client-level timeout. Construction
/// fails only on an unbuildable client; endpoint failures surface per call.
#[derive(Debug, Clone)]
pub struct EmergencyClient {
    client: reqwest::Client,
    base_url: String,
}

impl EmergencyClient {
    /// Creates a new emergency backend client.
    ///
    /// # Arguments
    /// * `base_url` - Backend base URL, e.g. "http://localhost:5000"
    /// * `timeout` - Client-level timeout applied to each call
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, MedivaultError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MedivaultError::Dispatch {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client from the emergency config section.
    pub fn from_config(config: &EmergencyConfig) -> Result<Self, MedivaultError> {
        Self::new(
            &config.base_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Submits one emergency notification. Exactly one outbound call.
    ///
    /// Transport errors, timeouts, non-success statuses, and unparseable
    /// bodies all map to [`MedivaultError::Dispatch`] with no partial result.
    pub async fn send_emergency(
        &self,
        request: &EmergencyRequest,
    ) -> Result<NotifyResponse, MedivaultError> {
        let body = NotifyBody::from(request);
        let url = format!("{}/emergency-contact", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| MedivaultError::Dispatch {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "emergency-contact response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MedivaultError::Dispatch {
                message: format!("notification endpoint returned {status}: {body}"),
                source: None,
            });
        }

        let body = response.text().await.map_err(|e| MedivaultError::Dispatch {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        serde_json::from_str(&body).map_err(|e| MedivaultError::Dispatch {
            message: format!("failed to parse notification response: {e}"),
            source: Some(Box::new(e)),
        })
    }

    /// Requests voice analysis for the given session. One outbound call,
    /// independent of any notification.
    pub async fn fetch_voice_analysis(
        &self,
        session_id: &str,
    ) -> Result<VoiceResponse, MedivaultError> {
        let url = format!("{}/ai/emergency-voice", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("userId", session_id)])
            .send()
            .await
            .map_err(|e| MedivaultError::VoiceAnalysis {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "emergency-voice response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MedivaultError::VoiceAnalysis {
                message: format!("analysis endpoint returned {status}: {body}"),
                source: None,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| MedivaultError::VoiceAnalysis {
                message: format!("failed to read response body: {e}"),
                source: Some(Box::new(e)),
            })?;
        serde_json::from_str(&body).map_err(|e| MedivaultError::VoiceAnalysis {
            message: format!("failed to parse analysis response: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medivault_core::{Contact, EmergencyUserInfo, GeoPosition};
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> EmergencyClient {
        EmergencyClient::new("http://unused.invalid", Duration::from_secs(5))
            .unwrap()
            .with_base_url(base_url.to_string())
    }

    fn test_request() -> EmergencyRequest {
        EmergencyRequest {
            location: GeoPosition {
                latitude: 37.7749,
                longitude: -122.4194,
                accuracy: 100.0,
            },
            contacts: vec![Contact {
                name: "Jane Doe".into(),
                relationship: Some("Spouse".into()),
                phone_number: "+1 (555) 987-6543".into(),
            }],
            user_info: EmergencyUserInfo {
                name: "John Doe".into(),
                blood_group: "O+".into(),
                critical_conditions: "Diabetes Type 2".into(),
                allergies: "Penicillin".into(),
            },
        }
    }

    #[tokio::test]
    async fn send_emergency_success() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({
            "status": "success",
            "messages": [
                {"contact": "Jane Doe", "sid": "SM1", "status": "sent"}
            ],
            "call": {"sid": "CA1", "status": "initiated", "contact": "Jane Doe"}
        });

        Mock::given(method("POST"))
            .and(path("/emergency-contact"))
            .and(body_partial_json(serde_json::json!({
                "userInfo": {"name": "John Doe", "bloodGroup": "O+"},
                "contactInfo": {
                    "emergencyContacts": [{"name": "Jane Doe", "phoneNumber": "+1 (555) 987-6543"}]
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.send_emergency(&test_request()).await.unwrap();

        assert_eq!(result.status, "success");
        assert_eq!(result.messages.as_ref().map(Vec::len), Some(1));
        assert!(result.call.is_some());
    }

    #[tokio::test]
    async fn send_emergency_fails_on_500_with_no_partial_result() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/emergency-contact"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "status": "error",
                "message": "Twilio credentials missing"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.send_emergency(&test_request()).await;
        let err = result.unwrap_err().to_string();
        assert!(err.contains("500"), "got: {err}");
    }

    #[tokio::test]
    async fn send_emergency_makes_exactly_one_attempt() {
        let server = MockServer::start().await;

        // A transient-looking status must NOT trigger a retry.
        Mock::given(method("POST"))
            .and(path("/emergency-contact"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        assert!(client.send_emergency(&test_request()).await.is_err());
        // Mock expectation (exactly 1 request) is verified on drop.
    }

    #[tokio::test]
    async fn send_emergency_rejects_unparseable_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/emergency-contact"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.send_emergency(&test_request()).await.unwrap_err();
        assert!(err.to_string().contains("parse"), "got: {err}");
    }

    #[tokio::test]
    async fn fetch_voice_analysis_sends_user_id_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ai/emergency-voice"))
            .and(query_param("userId", "user123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "stressLevel": "High",
                "emergencyType": "Cardiac",
                "recommendation": "Call an ambulance"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.fetch_voice_analysis("user123").await.unwrap();
        assert_eq!(result.stress_level.as_deref(), Some("High"));
        assert_eq!(result.emergency_type.as_deref(), Some("Cardiac"));
        assert_eq!(result.recommendation.as_deref(), Some("Call an ambulance"));
    }

    #[tokio::test]
    async fn fetch_voice_analysis_failure_is_voice_error_kind() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ai/emergency-voice"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.fetch_voice_analysis("user123").await.unwrap_err();
        assert!(
            matches!(err, MedivaultError::VoiceAnalysis { .. }),
            "got: {err:?}"
        );
    }

    #[tokio::test]
    async fn base_url_trailing_slash_is_normalized() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/emergency-contact"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"status": "success"})),
            )
            .mount(&server)
            .await;

        let client = test_client(&format!("{}/", server.uri()));
        assert!(client.send_emergency(&test_request()).await.is_ok());
    }
}
