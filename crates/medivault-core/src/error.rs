// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Medivault portal engine.

use thiserror::Error;

/// The primary error type used across all Medivault adapter traits and core operations.
#[derive(Debug, Error)]
pub enum MedivaultError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Key-value store errors (I/O failure, corrupt JSON blob).
    #[error("store error: {source}")]
    Store {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Emergency dispatch failed: transport error, non-success status, or timeout.
    ///
    /// Carries no partial report. The caller must treat the trigger as
    /// "not notified" and may re-attempt immediately.
    #[error("dispatch failed: {message}")]
    Dispatch {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Voice analysis call failed. Never invalidates an existing report.
    #[error("voice analysis failed: {message}")]
    VoiceAnalysis {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A file upload was rejected by the acceptance policy.
    #[error("upload rejected for `{file_name}`: {reason}")]
    UploadRejected {
        file_name: String,
        reason: UploadRejection,
    },

    /// Form-level validation failure (registration/login).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Reason a file upload was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    /// The file exceeds the configured size limit.
    #[error("exceeds the maximum size of {max_bytes} bytes (got {size})")]
    TooLarge { size: u64, max_bytes: u64 },

    /// The declared content type is not in the accepted list.
    #[error("unsupported file type `{file_type}`")]
    UnsupportedType { file_type: String },
}
