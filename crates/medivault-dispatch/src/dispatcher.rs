// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The emergency dispatcher.
//!
//! Orchestrates one user-triggered emergency: read the stored profile,
//! resolve a position within a bounded wait, build the request, and hand
//! it to the notifier exactly once. Location failure is recovered locally
//! with the configured fallback; notification failure surfaces as
//! [`MedivaultError::Dispatch`] with no partial report.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, warn};

use medivault_config::model::EmergencyConfig;
use medivault_core::{
    DispatchState, EmergencyReport, EmergencyRequest, EmergencyUserInfo, GeoPosition,
    KeyValueStore, LocationProvider, MedivaultError, NotifierAdapter, UserProfile, VoiceAnalysis,
};
use medivault_store::load_profile;

const UNKNOWN_USER: &str = "Unknown User";
const UNKNOWN_BLOOD_GROUP: &str = "Unknown";
const NONE_REPORTED: &str = "None reported";

const DEFAULT_STRESS_LEVEL: &str = "Medium";
const DEFAULT_EMERGENCY_TYPE: &str = "Medical";
const DEFAULT_RECOMMENDATION: &str = "Immediate medical assistance recommended";

/// Orchestrates the emergency flow over injected capability adapters.
///
/// The state field is observational only: it tells a caller where the
/// last trigger got to, but it never gates a new trigger. Two overlapping
/// triggers produce two notifications.
pub struct EmergencyDispatcher {
    location: Arc<dyn LocationProvider>,
    store: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn NotifierAdapter>,
    config: EmergencyConfig,
    state: Mutex<DispatchState>,
    report: Mutex<Option<EmergencyReport>>,
}

impl EmergencyDispatcher {
    pub fn new(
        location: Arc<dyn LocationProvider>,
        store: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn NotifierAdapter>,
        config: EmergencyConfig,
    ) -> Self {
        Self {
            location,
            store,
            notifier,
            config,
            state: Mutex::new(DispatchState::Idle),
            report: Mutex::new(None),
        }
    }

    /// Current lifecycle state of the last trigger.
    pub fn state(&self) -> DispatchState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// The report produced by the last successful trigger, if any.
    pub fn report(&self) -> Option<EmergencyReport> {
        self.report
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn set_state(&self, state: DispatchState) {
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = state;
    }

    fn fallback_position(&self) -> GeoPosition {
        GeoPosition {
            latitude: self.config.fallback_latitude,
            longitude: self.config.fallback_longitude,
            accuracy: self.config.fallback_accuracy,
        }
    }

    /// Resolves the device position within the configured bounded wait.
    ///
    /// Never errors: a timeout, a provider failure, or a position with a
    /// negative accuracy all substitute the configured fallback and log a
    /// warning.
    pub async fn resolve_location(&self) -> GeoPosition {
        let bound = Duration::from_secs(self.config.location_timeout_secs);

        match tokio::time::timeout(bound, self.location.current_position()).await {
            Ok(Ok(position)) if position.accuracy >= 0.0 => {
                debug!(
                    latitude = position.latitude,
                    longitude = position.longitude,
                    accuracy = position.accuracy,
                    "device position resolved"
                );
                position
            }
            Ok(Ok(position)) => {
                warn!(
                    accuracy = position.accuracy,
                    "position reported with negative accuracy, using fallback"
                );
                self.fallback_position()
            }
            Ok(Err(e)) => {
                warn!(error = %e, "location provider failed, using fallback");
                self.fallback_position()
            }
            Err(_) => {
                warn!(timeout_secs = self.config.location_timeout_secs,
                    "location read timed out, using fallback");
                self.fallback_position()
            }
        }
    }

    /// Builds a dispatchable request from whatever profile data exists.
    ///
    /// Pure and deterministic: the same profile and location always yield
    /// the same request. Absent fields are replaced by the placeholder
    /// policy so the payload never carries nulls.
    pub fn build_request(profile: &UserProfile, location: GeoPosition) -> EmergencyRequest {
        let name = [profile.first_name.as_deref(), profile.last_name.as_deref()]
            .iter()
            .flatten()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        let info = profile.emergency_info.as_ref();
        let field = |value: Option<&String>, placeholder: &str| {
            value
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .unwrap_or(placeholder)
                .to_string()
        };

        EmergencyRequest {
            location,
            contacts: info.map(|i| i.emergency_contacts.clone()).unwrap_or_default(),
            user_info: EmergencyUserInfo {
                name: if name.is_empty() {
                    UNKNOWN_USER.to_string()
                } else {
                    name
                },
                blood_group: field(info.and_then(|i| i.blood_group.as_ref()), UNKNOWN_BLOOD_GROUP),
                critical_conditions: field(
                    info.and_then(|i| i.critical_illnesses.as_ref()),
                    NONE_REPORTED,
                ),
                allergies: field(info.and_then(|i| i.allergies.as_ref()), NONE_REPORTED),
            },
        }
    }

    /// Sends the request to the notifier, exactly once.
    ///
    /// The report timestamp is stamped when the response is received,
    /// not when the request was constructed. Failure returns
    /// [`MedivaultError::Dispatch`] and leaves no partial report.
    pub async fn dispatch(
        &self,
        request: EmergencyRequest,
    ) -> Result<EmergencyReport, MedivaultError> {
        let outcome = self.notifier.notify(&request).await?;
        let timestamp = Utc::now().to_rfc3339();

        info!(
            status = %outcome.status,
            messages_sent = outcome.messages_sent,
            call_initiated = outcome.call_initiated,
            "emergency dispatched"
        );

        Ok(EmergencyReport {
            location: request.location,
            timestamp,
            status: outcome.status,
            messages_sent_count: outcome.messages_sent,
            call_initiated: outcome.call_initiated,
            ai_analysis: None,
        })
    }

    /// Runs voice analysis for the session and attaches the result to the
    /// current report, if one exists.
    ///
    /// Absent response fields default to their display placeholders. A
    /// failure here never touches a report produced by a prior dispatch.
    pub async fn analyze_voice(&self, session_id: &str) -> Result<VoiceAnalysis, MedivaultError> {
        let outcome = self.notifier.voice_analysis(session_id).await?;

        let analysis = VoiceAnalysis {
            stress_level: outcome
                .stress_level
                .unwrap_or_else(|| DEFAULT_STRESS_LEVEL.to_string()),
            emergency_type: outcome
                .emergency_type
                .unwrap_or_else(|| DEFAULT_EMERGENCY_TYPE.to_string()),
            recommendation: outcome
                .recommendation
                .unwrap_or_else(|| DEFAULT_RECOMMENDATION.to_string()),
        };

        let mut report = self.report.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(report) = report.as_mut() {
            report.ai_analysis = Some(analysis.clone());
        }

        Ok(analysis)
    }

    /// One full user-triggered emergency: profile, location, build, send.
    ///
    /// A new trigger always starts over from `Dispatching`, regardless of
    /// any trigger still in flight.
    pub async fn trigger(&self) -> Result<EmergencyReport, MedivaultError> {
        self.set_state(DispatchState::Dispatching);

        let profile = match load_profile(self.store.as_ref()).await {
            Ok(profile) => profile.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "profile store unavailable, proceeding without profile");
                UserProfile::default()
            }
        };

        let location = self.resolve_location().await;
        let request = Self::build_request(&profile, location);

        match self.dispatch(request).await {
            Ok(report) => {
                *self.report.lock().unwrap_or_else(|e| e.into_inner()) = Some(report.clone());
                self.set_state(DispatchState::Reported);
                Ok(report)
            }
            Err(e) => {
                self.set_state(DispatchState::Failed);
                Err(e)
            }
        }
    }
}
