// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Emergency dispatch orchestration.
//!
//! See [`EmergencyDispatcher`] for the flow: profile read, bounded
//! location resolution with fallback, request assembly under the
//! placeholder policy, and a single notification attempt.

pub mod dispatcher;

pub use dispatcher::EmergencyDispatcher;
