// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `medivault profile` command implementation.

use clap::Subcommand;

use medivault_config::MedivaultConfig;
use medivault_core::{KeyValueStore, MedivaultError};
use medivault_store::{JsonFileStore, USER_DATA_KEY, load_profile};

/// Subcommands for `medivault profile`.
#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Show the stored user profile.
    Show,
    /// Remove the stored user profile.
    Clear,
}

/// Run the `medivault profile` command.
pub async fn run_profile(
    config: &MedivaultConfig,
    command: ProfileCommand,
) -> Result<(), MedivaultError> {
    let store = JsonFileStore::from_config(&config.storage);
    store.initialize().await?;

    match command {
        ProfileCommand::Show => {
            let Some(profile) = load_profile(&store).await? else {
                println!("no profile stored");
                return Ok(());
            };

            let name = [profile.first_name.as_deref(), profile.last_name.as_deref()]
                .iter()
                .flatten()
                .copied()
                .collect::<Vec<_>>()
                .join(" ");
            println!(
                "name: {}",
                if name.is_empty() { "(unset)" } else { name.as_str() }
            );

            if let Some(info) = &profile.emergency_info {
                println!(
                    "blood group: {}",
                    info.blood_group.as_deref().unwrap_or("(unset)")
                );
                println!(
                    "conditions:  {}",
                    info.critical_illnesses.as_deref().unwrap_or("(unset)")
                );
                println!(
                    "allergies:   {}",
                    info.allergies.as_deref().unwrap_or("(unset)")
                );
                for contact in &info.emergency_contacts {
                    println!(
                        "contact:     {} ({}) {}",
                        contact.name,
                        contact.relationship.as_deref().unwrap_or("unspecified"),
                        contact.phone_number
                    );
                }
            }
        }
        ProfileCommand::Clear => {
            if store.delete(USER_DATA_KEY).await? {
                println!("profile cleared");
            } else {
                println!("no profile stored");
            }
        }
    }

    Ok(())
}
