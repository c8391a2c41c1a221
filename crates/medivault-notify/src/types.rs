// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the emergency backend endpoints.
//!
//! Field names follow the backend's camelCase JSON contract exactly; the
//! domain types in `medivault-core` stay snake_case and are converted at
//! the client boundary.

use medivault_core::{Contact, EmergencyRequest, EmergencyUserInfo, GeoPosition};
use serde::{Deserialize, Serialize};

/// Request body for `POST /emergency-contact`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyBody {
    pub location: GeoPosition,
    pub contact_info: ContactInfoBody,
    pub user_info: EmergencyUserInfo,
}

/// The `contactInfo` envelope. The contacts list is always present in the
/// payload, even when empty.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfoBody {
    pub emergency_contacts: Vec<Contact>,
}

impl From<&EmergencyRequest> for NotifyBody {
    fn from(request: &EmergencyRequest) -> Self {
        Self {
            location: request.location,
            contact_info: ContactInfoBody {
                emergency_contacts: request.contacts.clone(),
            },
            user_info: request.user_info.clone(),
        }
    }
}

/// Response body from `POST /emergency-contact`.
///
/// `messages` entries and the `call` object are opaque: only the array
/// length and the presence of a non-null `call` matter to the portal.
#[derive(Debug, Clone, Deserialize)]
pub struct NotifyResponse {
    pub status: String,
    #[serde(default)]
    pub messages: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub call: Option<serde_json::Value>,
}

/// Response body from `GET /ai/emergency-voice`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceResponse {
    #[serde(default)]
    pub stress_level: Option<String>,
    #[serde(default)]
    pub emergency_type: Option<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_body_serializes_backend_contract() {
        let request = EmergencyRequest {
            location: GeoPosition {
                latitude: 37.7749,
                longitude: -122.4194,
                accuracy: 100.0,
            },
            contacts: vec![],
            user_info: EmergencyUserInfo {
                name: "Unknown User".into(),
                blood_group: "Unknown".into(),
                critical_conditions: "None reported".into(),
                allergies: "None reported".into(),
            },
        };
        let body = NotifyBody::from(&request);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["location"]["latitude"], 37.7749);
        // Empty contacts list is serialized, never omitted.
        assert_eq!(
            json["contactInfo"]["emergencyContacts"],
            serde_json::json!([])
        );
        assert_eq!(json["userInfo"]["name"], "Unknown User");
        assert_eq!(json["userInfo"]["bloodGroup"], "Unknown");
        assert_eq!(json["userInfo"]["criticalConditions"], "None reported");
    }

    #[test]
    fn notify_response_tolerates_absent_optionals() {
        let response: NotifyResponse = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert_eq!(response.status, "success");
        assert!(response.messages.is_none());
        assert!(response.call.is_none());
    }

    #[test]
    fn voice_response_tolerates_empty_object() {
        let response: VoiceResponse = serde_json::from_str("{}").unwrap();
        assert!(response.stress_level.is_none());
        assert!(response.emergency_type.is_none());
        assert!(response.recommendation.is_none());
    }
}
