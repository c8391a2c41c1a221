// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability trait definitions for Medivault adapters.
//!
//! The dispatcher depends only on these traits, never on concrete
//! implementations, so browser-style ambient capabilities (geolocation,
//! local storage) and the notification backend can all be substituted
//! with in-memory fakes in tests.

pub mod adapter;
pub mod location;
pub mod notifier;
pub mod store;

pub use adapter::PortalAdapter;
pub use location::LocationProvider;
pub use notifier::NotifierAdapter;
pub use store::KeyValueStore;
