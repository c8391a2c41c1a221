// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registration and login form validation.
//!
//! Pure functions over form input. Validation collects every failing rule
//! rather than stopping at the first, so the portal can show all messages
//! at once.

use std::sync::LazyLock;

use regex::Regex;

use medivault_core::MedivaultError;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Account fields from the first registration step.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Credentials from the login form.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Validates the registration account step.
///
/// Returns every failing rule's message. Field presence is checked on the
/// trimmed values, so whitespace-only input counts as missing.
pub fn validate_registration(form: &RegistrationForm) -> Result<(), Vec<MedivaultError>> {
    let mut errors = Vec::new();

    let all_present = [
        &form.first_name,
        &form.last_name,
        &form.email,
        &form.password,
    ]
    .iter()
    .all(|f| !f.trim().is_empty());
    if !all_present {
        errors.push(MedivaultError::Validation(
            "All fields are required".to_string(),
        ));
    }

    if !form.email.trim().is_empty() && !EMAIL_RE.is_match(form.email.trim()) {
        errors.push(MedivaultError::Validation(
            "Please enter a valid email address".to_string(),
        ));
    }

    if form.password != form.confirm_password {
        errors.push(MedivaultError::Validation(
            "Passwords do not match".to_string(),
        ));
    }

    if !form.password.is_empty() && form.password.len() < 8 {
        errors.push(MedivaultError::Validation(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validates the login form.
pub fn validate_login(form: &LoginForm) -> Result<(), Vec<MedivaultError>> {
    let mut errors = Vec::new();

    if form.email.trim().is_empty() || form.password.is_empty() {
        errors.push(MedivaultError::Validation(
            "All fields are required".to_string(),
        ));
    }

    if !form.email.trim().is_empty() && !EMAIL_RE.is_match(form.email.trim()) {
        errors.push(MedivaultError::Validation(
            "Please enter a valid email address".to_string(),
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Splits a comma-separated medical list ("Penicillin, Aspirin") into
/// trimmed entries. Empty input and blank segments produce nothing.
pub fn split_medical_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
