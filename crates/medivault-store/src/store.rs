// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON file implementation of the [`KeyValueStore`] trait.
//!
//! Each key maps to one file, `<data_dir>/<key>.json`, holding the raw
//! blob. Writes go through a temp file plus rename so a crashed write never
//! leaves a truncated blob behind.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use medivault_config::model::StorageConfig;
use medivault_core::{AdapterType, HealthStatus, KeyValueStore, MedivaultError, PortalAdapter};

/// Key under which the user profile blob is stored.
pub const USER_DATA_KEY: &str = "medivault_user_data";

/// Key under which the medical records list is stored.
pub const RECORDS_KEY: &str = "medivault_records";

/// File-backed key-value store holding one JSON blob per key.
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory is not created until [`KeyValueStore::initialize`]
    /// is called.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Create a store from the `[storage]` config section.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.data_dir)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

fn io_err(err: std::io::Error) -> MedivaultError {
    MedivaultError::Store {
        source: Box::new(err),
    }
}

#[async_trait]
impl PortalAdapter for JsonFileStore {
    fn name(&self) -> &str {
        "json-file"
    }

    fn version(&self) -> semver::Version {
        semver::Version::parse(env!("CARGO_PKG_VERSION"))
            .unwrap_or_else(|_| semver::Version::new(0, 0, 0))
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Store
    }

    async fn health_check(&self) -> Result<HealthStatus, MedivaultError> {
        match tokio::fs::metadata(&self.data_dir).await {
            Ok(meta) if meta.is_dir() => Ok(HealthStatus::Healthy),
            Ok(_) => Ok(HealthStatus::Unhealthy(format!(
                "data dir {} is not a directory",
                self.data_dir.display()
            ))),
            Err(e) => Ok(HealthStatus::Unhealthy(format!(
                "data dir {} unavailable: {e}",
                self.data_dir.display()
            ))),
        }
    }

    async fn shutdown(&self) -> Result<(), MedivaultError> {
        // Writes are synchronous per call; nothing buffered to flush.
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn initialize(&self) -> Result<(), MedivaultError> {
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(io_err)?;
        debug!(dir = %self.data_dir.display(), "JSON file store initialized");
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, MedivaultError> {
        match tokio::fs::read_to_string(self.key_path(key)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_err(e)),
        }
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), MedivaultError> {
        let path = self.key_path(key);
        let tmp = tmp_path(&path);

        let mut file = tokio::fs::File::create(&tmp).await.map_err(io_err)?;
        file.write_all(value.as_bytes()).await.map_err(io_err)?;
        file.sync_all().await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &path).await.map_err(io_err)?;

        debug!(key, bytes = value.len(), "blob written");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, MedivaultError> {
        match tokio::fs::remove_file(self.key_path(key)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_err(e)),
        }
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
