// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Medivault integration tests.
//!
//! Provides mock adapters for fast, deterministic, CI-runnable tests
//! without a real device or backend.
//!
//! # Components
//!
//! - [`MockLocationProvider`] - scripted position, failure, or hang
//! - [`MockNotifier`] - FIFO-queued notify/voice outcomes with request capture
//! - [`MemoryStore`] - in-memory key-value store

pub mod memory_store;
pub mod mock_location;
pub mod mock_notifier;

pub use memory_store::MemoryStore;
pub use mock_location::MockLocationProvider;
pub use mock_notifier::MockNotifier;
