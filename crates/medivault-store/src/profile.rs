// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed access to the user profile blob.

use tracing::warn;

use medivault_core::{KeyValueStore, MedivaultError, UserProfile};

use crate::store::USER_DATA_KEY;

/// Reads the stored user profile.
///
/// An absent key and an unparseable blob both yield `None`: the emergency
/// flow must proceed with the placeholder policy either way, so a corrupt
/// blob is logged and treated like no profile at all.
pub async fn load_profile(
    store: &dyn KeyValueStore,
) -> Result<Option<UserProfile>, MedivaultError> {
    let Some(blob) = store.get(USER_DATA_KEY).await? else {
        return Ok(None);
    };

    match serde_json::from_str::<UserProfile>(&blob) {
        Ok(profile) => Ok(Some(profile)),
        Err(e) => {
            warn!(key = USER_DATA_KEY, error = %e, "stored profile is unparseable, ignoring");
            Ok(None)
        }
    }
}

/// Writes the user profile blob, replacing any previous one.
pub async fn save_profile(
    store: &dyn KeyValueStore,
    profile: &UserProfile,
) -> Result<(), MedivaultError> {
    let blob = serde_json::to_string(profile).map_err(|e| MedivaultError::Store {
        source: Box::new(e),
    })?;
    store.put(USER_DATA_KEY, &blob).await
}
