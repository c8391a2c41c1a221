// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local persistence for the Medivault portal.
//!
//! Provides the JSON file [`KeyValueStore`](medivault_core::KeyValueStore)
//! implementation plus typed readers for the two well-known keys: the user
//! profile and the medical records list.

pub mod profile;
pub mod records;
pub mod store;

pub use profile::{load_profile, save_profile};
pub use records::{RecordsStore, UploadCandidate, validate_upload};
pub use store::{JsonFileStore, RECORDS_KEY, USER_DATA_KEY};
