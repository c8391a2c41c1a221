// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `medivault records` command implementation.

use std::path::PathBuf;

use clap::Subcommand;

use medivault_config::MedivaultConfig;
use medivault_core::{KeyValueStore, MedivaultError};
use medivault_store::{JsonFileStore, RecordsStore, UploadCandidate};

/// Subcommands for `medivault records`.
#[derive(Subcommand, Debug)]
pub enum RecordsCommand {
    /// List stored medical records.
    List,
    /// Validate and store a medical record file.
    Add {
        /// Path to the file to store.
        file: PathBuf,
        /// Declared content type; inferred from the extension if omitted.
        #[arg(long = "type")]
        file_type: Option<String>,
    },
    /// Delete a record by id.
    Delete {
        /// Record id (record_<uuid>).
        id: String,
    },
}

/// Run the `medivault records` command.
pub async fn run_records(
    config: &MedivaultConfig,
    command: RecordsCommand,
) -> Result<(), MedivaultError> {
    let store = JsonFileStore::from_config(&config.storage);
    store.initialize().await?;
    let records = RecordsStore::new(&store, config.records.clone());

    match command {
        RecordsCommand::List => {
            let entries = records.list().await?;
            if entries.is_empty() {
                println!("no records stored");
                return Ok(());
            }
            for entry in entries {
                println!(
                    "{}  {}  {}  {} bytes  {}",
                    entry.id, entry.file_name, entry.file_type, entry.size, entry.upload_date
                );
            }
        }
        RecordsCommand::Add { file, file_type } => {
            let metadata = std::fs::metadata(&file).map_err(|e| {
                MedivaultError::Internal(format!("cannot read {}: {e}", file.display()))
            })?;
            let file_name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.display().to_string());
            let file_type = file_type
                .or_else(|| infer_type(&file_name).map(str::to_string))
                .unwrap_or_else(|| "application/octet-stream".to_string());

            let entry = records
                .add(UploadCandidate {
                    file_name,
                    file_type,
                    size: metadata.len(),
                    data_url: None,
                })
                .await?;
            println!("stored {} as {}", entry.file_name, entry.id);
        }
        RecordsCommand::Delete { id } => {
            if records.delete(&id).await? {
                println!("deleted {id}");
            } else {
                println!("no record with id {id}");
            }
        }
    }

    Ok(())
}

fn infer_type(file_name: &str) -> Option<&'static str> {
    let extension = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match extension.as_str() {
        "pdf" => Some("application/pdf"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_type_covers_accepted_extensions() {
        assert_eq!(infer_type("scan.pdf"), Some("application/pdf"));
        assert_eq!(infer_type("photo.JPG"), Some("image/jpeg"));
        assert_eq!(infer_type("photo.jpeg"), Some("image/jpeg"));
        assert_eq!(infer_type("xray.png"), Some("image/png"));
        assert_eq!(infer_type("notes.docx"), None);
        assert_eq!(infer_type("noext"), None);
    }
}
