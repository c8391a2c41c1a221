// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Medical record metadata storage and the upload acceptance policy.
//!
//! Record metadata lives as a JSON array under the `medivault_records`
//! key. The policy check runs before anything is persisted: a rejected
//! upload leaves the stored list untouched.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use medivault_config::model::RecordsConfig;
use medivault_core::{KeyValueStore, MedivaultError, RecordEntry, UploadRejection};

use crate::store::RECORDS_KEY;

/// A candidate upload, as described by the caller before acceptance.
#[derive(Debug, Clone)]
pub struct UploadCandidate {
    pub file_name: String,
    /// Declared content type; checked against the allow-list verbatim.
    pub file_type: String,
    pub size: u64,
    /// Inline preview data for images; `None` for PDFs.
    pub data_url: Option<String>,
}

/// Checks a candidate against the configured acceptance policy.
///
/// The size boundary is inclusive: a file of exactly `max_file_bytes`
/// passes. The type check is an exact string match, so `image/jpg` is
/// rejected even though `image/jpeg` is allowed.
pub fn validate_upload(
    candidate: &UploadCandidate,
    config: &RecordsConfig,
) -> Result<(), MedivaultError> {
    if candidate.size > config.max_file_bytes {
        return Err(MedivaultError::UploadRejected {
            file_name: candidate.file_name.clone(),
            reason: UploadRejection::TooLarge {
                size: candidate.size,
                max_bytes: config.max_file_bytes,
            },
        });
    }

    if !config.allowed_types.iter().any(|t| t == &candidate.file_type) {
        return Err(MedivaultError::UploadRejected {
            file_name: candidate.file_name.clone(),
            reason: UploadRejection::UnsupportedType {
                file_type: candidate.file_type.clone(),
            },
        });
    }

    Ok(())
}

/// Typed record list operations over a [`KeyValueStore`].
pub struct RecordsStore<'a> {
    store: &'a dyn KeyValueStore,
    config: RecordsConfig,
}

impl<'a> RecordsStore<'a> {
    pub fn new(store: &'a dyn KeyValueStore, config: RecordsConfig) -> Self {
        Self { store, config }
    }

    /// Lists all stored records, oldest first. An absent key is an empty
    /// list, never an error.
    pub async fn list(&self) -> Result<Vec<RecordEntry>, MedivaultError> {
        let Some(blob) = self.store.get(RECORDS_KEY).await? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&blob).map_err(|e| MedivaultError::Store {
            source: Box::new(e),
        })
    }

    /// Validates and stores a new record, returning the created entry.
    ///
    /// The entry id is `record_<uuid>` and `uploadDate` is stamped at
    /// acceptance time.
    pub async fn add(&self, candidate: UploadCandidate) -> Result<RecordEntry, MedivaultError> {
        validate_upload(&candidate, &self.config)?;

        let entry = RecordEntry {
            id: format!("record_{}", Uuid::new_v4()),
            file_name: candidate.file_name,
            file_type: candidate.file_type,
            upload_date: Utc::now().to_rfc3339(),
            size: candidate.size,
            data_url: candidate.data_url,
        };

        let mut records = self.list().await?;
        records.push(entry.clone());
        self.persist(&records).await?;

        info!(id = %entry.id, file = %entry.file_name, size = entry.size, "record stored");
        Ok(entry)
    }

    /// Removes the record with the given id. Returns `true` if it existed.
    pub async fn delete(&self, id: &str) -> Result<bool, MedivaultError> {
        let mut records = self.list().await?;
        let before = records.len();
        records.retain(|r| r.id != id);

        if records.len() == before {
            return Ok(false);
        }
        self.persist(&records).await?;
        Ok(true)
    }

    async fn persist(&self, records: &[RecordEntry]) -> Result<(), MedivaultError> {
        let blob = serde_json::to_string(records).map_err(|e| MedivaultError::Store {
            source: Box::new(e),
        })?;
        self.store.put(RECORDS_KEY, &blob).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::JsonFileStore;
    use medivault_core::UploadRejection;

    fn candidate(name: &str, file_type: &str, size: u64) -> UploadCandidate {
        UploadCandidate {
            file_name: name.into(),
            file_type: file_type.into(),
            size,
            data_url: None,
        }
    }

    async fn temp_store() -> (tempfile::TempDir, JsonFileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        store.initialize().await.unwrap();
        (dir, store)
    }

    #[test]
    fn exact_boundary_size_is_accepted() {
        let config = RecordsConfig::default();
        let ok = candidate("scan.pdf", "application/pdf", 10 * 1024 * 1024);
        assert!(validate_upload(&ok, &config).is_ok());
    }

    #[test]
    fn one_byte_over_boundary_is_rejected() {
        let config = RecordsConfig::default();
        let too_big = candidate("scan.pdf", "application/pdf", 10 * 1024 * 1024 + 1);
        let err = validate_upload(&too_big, &config).unwrap_err();
        assert!(matches!(
            err,
            MedivaultError::UploadRejected {
                reason: UploadRejection::TooLarge { .. },
                ..
            }
        ));
    }

    #[test]
    fn type_check_is_exact_string_match() {
        let config = RecordsConfig::default();
        // image/jpg is a common alias but is not on the allow-list.
        let err = validate_upload(&candidate("photo.jpg", "image/jpg", 1024), &config).unwrap_err();
        assert!(matches!(
            err,
            MedivaultError::UploadRejected {
                reason: UploadRejection::UnsupportedType { .. },
                ..
            }
        ));

        assert!(validate_upload(&candidate("photo.jpg", "image/jpeg", 1024), &config).is_ok());
        assert!(validate_upload(&candidate("photo.png", "image/png", 1024), &config).is_ok());
    }

    #[tokio::test]
    async fn list_on_empty_store_is_empty() {
        let (_dir, store) = temp_store().await;
        let records = RecordsStore::new(&store, RecordsConfig::default());
        assert!(records.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_assigns_prefixed_id_and_persists() {
        let (_dir, store) = temp_store().await;
        let records = RecordsStore::new(&store, RecordsConfig::default());

        let entry = records
            .add(candidate("scan.pdf", "application/pdf", 2048))
            .await
            .unwrap();
        assert!(entry.id.starts_with("record_"));
        assert!(!entry.upload_date.is_empty());

        let listed = records.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, entry.id);
    }

    #[tokio::test]
    async fn rejected_upload_leaves_list_untouched() {
        let (_dir, store) = temp_store().await;
        let records = RecordsStore::new(&store, RecordsConfig::default());

        records
            .add(candidate("first.pdf", "application/pdf", 1024))
            .await
            .unwrap();
        let err = records
            .add(candidate("huge.pdf", "application/pdf", 11 * 1024 * 1024))
            .await;
        assert!(err.is_err());
        assert_eq!(records.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_unknown_id_returns_false() {
        let (_dir, store) = temp_store().await;
        let records = RecordsStore::new(&store, RecordsConfig::default());
        assert!(!records.delete("record_nope").await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_only_named_record() {
        let (_dir, store) = temp_store().await;
        let records = RecordsStore::new(&store, RecordsConfig::default());

        let a = records
            .add(candidate("a.pdf", "application/pdf", 10))
            .await
            .unwrap();
        let b = records
            .add(candidate("b.png", "image/png", 20))
            .await
            .unwrap();

        assert!(records.delete(&a.id).await.unwrap());
        let remaining = records.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, b.id);
    }
}
