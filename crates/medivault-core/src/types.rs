// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Medivault workspace.
//!
//! Profile and record types use camelCase serde renames because they are
//! persisted in the same JSON shape the portal front end stores under the
//! `medivault_user_data` and `medivault_records` keys.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A device position in WGS84 coordinates.
///
/// Invariant: `accuracy >= 0` (meters). Positions reported with a negative
/// accuracy are treated as unavailable and replaced by the configured
/// fallback position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
    /// Estimated accuracy radius in meters.
    pub accuracy: f64,
}

/// An emergency contact entry from the user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub name: String,
    /// Relationship to the patient ("Spouse", "Parent", ...). Optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    /// Notification target. Required for a contact to be usable.
    pub phone_number: String,
}

/// Emergency-relevant medical information from the user profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmergencyInfo {
    pub blood_group: Option<String>,
    pub critical_illnesses: Option<String>,
    pub allergies: Option<String>,
    pub emergency_contacts: Vec<Contact>,
}

/// The stored user profile, read from the `medivault_user_data` blob.
///
/// Every field is optional: a missing or empty profile must still produce
/// a dispatchable request via the placeholder policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub emergency_info: Option<EmergencyInfo>,
}

/// User information included in an emergency request.
///
/// Fields are always concrete strings, never null: absent profile data is
/// replaced by the documented placeholders before the request is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyUserInfo {
    pub name: String,
    pub blood_group: String,
    pub critical_conditions: String,
    pub allergies: String,
}

/// An assembled emergency notification request. Sent once, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct EmergencyRequest {
    pub location: GeoPosition,
    /// May be empty, but is always present in the outbound payload.
    pub contacts: Vec<Contact>,
    pub user_info: EmergencyUserInfo,
}

/// Normalized outcome of one notification call, as parsed off the wire.
///
/// The dispatcher turns this into an [`EmergencyReport`] by stamping the
/// response-receipt timestamp and attaching the request location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyOutcome {
    /// Opaque status string passed through from the server.
    pub status: String,
    /// Length of the server's `messages` array; 0 when absent.
    pub messages_sent: usize,
    /// Whether the server reported a `call` object (any non-null value).
    pub call_initiated: bool,
}

/// Raw voice-analysis fields as returned by the analysis endpoint.
///
/// Each field may be absent; display defaulting is the dispatcher's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceAnalysisOutcome {
    pub stress_level: Option<String>,
    pub emergency_type: Option<String>,
    pub recommendation: Option<String>,
}

/// Display-ready voice analysis attached to a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceAnalysis {
    pub stress_level: String,
    pub emergency_type: String,
    pub recommendation: String,
}

/// A display-ready emergency report, held in memory for the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyReport {
    pub location: GeoPosition,
    /// ISO-8601 timestamp stamped when the response was received,
    /// not when the request was constructed.
    pub timestamp: String,
    /// Opaque server status, passed through unchanged.
    pub status: String,
    pub messages_sent_count: usize,
    pub call_initiated: bool,
    /// Populated by a subsequent voice analysis, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<VoiceAnalysis>,
}

/// Metadata for an uploaded medical record, stored under `medivault_records`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordEntry {
    pub id: String,
    pub file_name: String,
    pub file_type: String,
    /// ISO-8601 timestamp at acceptance time.
    pub upload_date: String,
    pub size: u64,
    /// Inline preview data for image uploads; `None` for PDFs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_url: Option<String>,
}

/// Lifecycle state of the dispatcher for one user action.
///
/// Observational only: a new trigger always resets to `Dispatching`
/// regardless of the previous state. It never gates a second trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum DispatchState {
    #[default]
    Idle,
    Dispatching,
    Reported,
    Failed,
}

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the type of adapter behind a capability trait.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    Location,
    Store,
    Notifier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_profile_round_trips_portal_json() {
        // The exact shape the front end stores under medivault_user_data.
        let json = r#"{
            "firstName": "Jane",
            "lastName": "Doe",
            "emergencyInfo": {
                "bloodGroup": "O+",
                "criticalIllnesses": "Diabetes Type 2",
                "allergies": "Penicillin",
                "emergencyContacts": [
                    {"name": "John Doe", "relationship": "Spouse", "phoneNumber": "+1 (555) 987-6543"}
                ]
            }
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.first_name.as_deref(), Some("Jane"));
        let info = profile.emergency_info.unwrap();
        assert_eq!(info.blood_group.as_deref(), Some("O+"));
        assert_eq!(info.emergency_contacts.len(), 1);
        assert_eq!(info.emergency_contacts[0].phone_number, "+1 (555) 987-6543");
    }

    #[test]
    fn empty_blob_deserializes_to_default_profile() {
        let profile: UserProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, UserProfile::default());
    }

    #[test]
    fn record_entry_serializes_camel_case() {
        let record = RecordEntry {
            id: "record_1".into(),
            file_name: "scan.pdf".into(),
            file_type: "application/pdf".into(),
            upload_date: "2026-01-01T00:00:00Z".into(),
            size: 1024,
            data_url: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"fileName\""), "got: {json}");
        assert!(json.contains("\"uploadDate\""), "got: {json}");
        assert!(!json.contains("dataUrl"), "absent dataUrl should be omitted: {json}");
    }

    #[test]
    fn dispatch_state_defaults_to_idle() {
        assert_eq!(DispatchState::default(), DispatchState::Idle);
        assert_eq!(DispatchState::Reported.to_string(), "Reported");
    }

    #[test]
    fn adapter_type_display_round_trip() {
        use std::str::FromStr;
        for variant in [AdapterType::Location, AdapterType::Store, AdapterType::Notifier] {
            let parsed = AdapterType::from_str(&variant.to_string()).unwrap();
            assert_eq!(variant, parsed);
        }
    }
}
