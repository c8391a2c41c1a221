// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `medivault register` command implementation.
//!
//! Validates registration input and stores the resulting profile under
//! the user-data key. Validation collects every failing rule, so the
//! user sees all messages at once.

use clap::Args;

use medivault_auth::{RegistrationForm, split_medical_list, validate_registration};
use medivault_config::MedivaultConfig;
use medivault_core::{Contact, EmergencyInfo, KeyValueStore, MedivaultError, UserProfile};
use medivault_store::{JsonFileStore, save_profile};

/// Arguments for `medivault register`.
#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub confirm_password: String,
    /// Blood group, e.g. "O+".
    #[arg(long)]
    pub blood_group: Option<String>,
    /// Comma-separated critical conditions.
    #[arg(long)]
    pub conditions: Option<String>,
    /// Comma-separated allergies.
    #[arg(long)]
    pub allergies: Option<String>,
    /// Emergency contact as "name:phone" or "name:relationship:phone".
    #[arg(long = "contact")]
    pub contacts: Vec<String>,
}

/// Run the `medivault register` command.
pub async fn run_register(
    config: &MedivaultConfig,
    args: RegisterArgs,
) -> Result<(), MedivaultError> {
    let form = RegistrationForm {
        first_name: args.first_name.clone(),
        last_name: args.last_name.clone(),
        email: args.email.clone(),
        password: args.password.clone(),
        confirm_password: args.confirm_password.clone(),
    };

    if let Err(errors) = validate_registration(&form) {
        for error in &errors {
            eprintln!("{error}");
        }
        return Err(MedivaultError::Validation(format!(
            "{} registration error(s)",
            errors.len()
        )));
    }

    let profile = build_profile(&args)?;

    let store = JsonFileStore::from_config(&config.storage);
    store.initialize().await?;
    save_profile(&store, &profile).await?;

    println!("registered {} {}", args.first_name, args.last_name);
    Ok(())
}

/// Assemble the stored profile from validated arguments.
///
/// Medical lists are split on commas and rejoined trimmed, so stray
/// whitespace in the input never reaches the stored blob.
fn build_profile(args: &RegisterArgs) -> Result<UserProfile, MedivaultError> {
    let contacts = args
        .contacts
        .iter()
        .map(|spec| parse_contact(spec))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(UserProfile {
        first_name: Some(args.first_name.trim().to_string()),
        last_name: Some(args.last_name.trim().to_string()),
        emergency_info: Some(EmergencyInfo {
            blood_group: args.blood_group.clone(),
            critical_illnesses: normalize_list(args.conditions.as_deref()),
            allergies: normalize_list(args.allergies.as_deref()),
            emergency_contacts: contacts,
        }),
    })
}

fn normalize_list(input: Option<&str>) -> Option<String> {
    let entries = split_medical_list(input?);
    if entries.is_empty() {
        None
    } else {
        Some(entries.join(", "))
    }
}

fn parse_contact(spec: &str) -> Result<Contact, MedivaultError> {
    let parts: Vec<&str> = spec.split(':').map(str::trim).collect();
    match parts.as_slice() {
        [name, phone] if !name.is_empty() && !phone.is_empty() => Ok(Contact {
            name: name.to_string(),
            relationship: None,
            phone_number: phone.to_string(),
        }),
        [name, relationship, phone] if !name.is_empty() && !phone.is_empty() => Ok(Contact {
            name: name.to_string(),
            relationship: Some(relationship.to_string()),
            phone_number: phone.to_string(),
        }),
        _ => Err(MedivaultError::Validation(format!(
            "contact `{spec}` must be \"name:phone\" or \"name:relationship:phone\""
        ))),
    }
}
