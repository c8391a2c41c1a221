// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key-value store trait for local persistence backends.

use async_trait::async_trait;

use crate::error::MedivaultError;
use crate::traits::adapter::PortalAdapter;

/// Adapter for the portal's local key-value persistence.
///
/// Keys are fixed string names (`medivault_user_data`,
/// `medivault_records`) holding opaque JSON blobs. Typed readers and
/// writers live above this trait.
#[async_trait]
pub trait KeyValueStore: PortalAdapter {
    /// Initializes the backing storage (creates directories, etc.).
    async fn initialize(&self) -> Result<(), MedivaultError>;

    /// Reads the blob stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>, MedivaultError>;

    /// Writes `value` under `key`, replacing any previous blob.
    async fn put(&self, key: &str, value: &str) -> Result<(), MedivaultError>;

    /// Removes the blob under `key`. Returns `true` if a blob existed.
    async fn delete(&self, key: &str) -> Result<bool, MedivaultError>;
}
