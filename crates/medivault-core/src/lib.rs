// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Medivault portal engine.
//!
//! This crate provides the foundational trait definitions, error types, and
//! domain types used throughout the Medivault workspace. All capability
//! adapters implement traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{MedivaultError, UploadRejection};
pub use types::{
    AdapterType, Contact, DispatchState, EmergencyInfo, EmergencyReport, EmergencyRequest,
    EmergencyUserInfo, GeoPosition, HealthStatus, NotifyOutcome, RecordEntry, UserProfile,
    VoiceAnalysis, VoiceAnalysisOutcome,
};

// Re-export all capability traits at crate root.
pub use traits::{KeyValueStore, LocationProvider, NotifierAdapter, PortalAdapter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medivault_error_has_all_variants() {
        // Verify all 8 error variants exist and can be constructed.
        let _config = MedivaultError::Config("test".into());
        let _store = MedivaultError::Store {
            source: Box::new(std::io::Error::other("test")),
        };
        let _dispatch = MedivaultError::Dispatch {
            message: "test".into(),
            source: None,
        };
        let _voice = MedivaultError::VoiceAnalysis {
            message: "test".into(),
            source: None,
        };
        let _upload = MedivaultError::UploadRejected {
            file_name: "test.pdf".into(),
            reason: UploadRejection::UnsupportedType {
                file_type: "text/plain".into(),
            },
        };
        let _validation = MedivaultError::Validation("test".into());
        let _timeout = MedivaultError::Timeout {
            duration: std::time::Duration::from_secs(5),
        };
        let _internal = MedivaultError::Internal("test".into());
    }

    #[test]
    fn adapter_type_has_three_variants() {
        use std::str::FromStr;

        let variants = [
            AdapterType::Location,
            AdapterType::Store,
            AdapterType::Notifier,
        ];
        assert_eq!(variants.len(), 3, "AdapterType must have exactly 3 variants");

        // Verify Display and FromStr round-trip for all variants.
        for variant in &variants {
            let s = variant.to_string();
            let parsed = AdapterType::from_str(&s).expect("should parse back");
            assert_eq!(*variant, parsed);
        }
    }

    #[test]
    fn health_status_variants() {
        let healthy = HealthStatus::Healthy;
        let degraded = HealthStatus::Degraded("slow".into());
        let unhealthy = HealthStatus::Unhealthy("down".into());

        assert_eq!(healthy, HealthStatus::Healthy);
        assert_ne!(degraded, healthy);
        assert_ne!(unhealthy, healthy);
    }

    #[test]
    fn all_trait_modules_are_exported() {
        // This test verifies that all capability trait modules compile
        // and are accessible through the public API. If any module is
        // missing or has a compile error, this test won't compile.
        fn _assert_portal_adapter<T: PortalAdapter>() {}
        fn _assert_location_provider<T: LocationProvider>() {}
        fn _assert_key_value_store<T: KeyValueStore>() {}
        fn _assert_notifier_adapter<T: NotifierAdapter>() {}
    }
}
