// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Carnet API Layer
//!
//! High-level API over a [`ContactStore`](crate::storage::ContactStore).
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use carnet_core::api::{ContactManager, EventDispatcher};
//! use carnet_core::{ContactRecord, Storage};
//!
//! let storage = Storage::open("contacts.db")?;
//! let manager = ContactManager::new(&storage, Arc::new(EventDispatcher::new()));
//!
//! manager.add_contact(ContactRecord::new("Diop", "Awa", "awa@example.sn"))?;
//! for pair in manager.find_duplicates()? {
//!     println!("{:?} ~ {:?} ({}%)", pair.contact1_id, pair.contact2_id, pair.score_percent());
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Error types for the API layer
//! - [`events`] - Event system for callbacks
//! - [`contact_manager`] - High-level contact operations
//! - [`merge_engine`] - Atomic duplicate merging

#[cfg(feature = "testing")]
pub mod contact_manager;
#[cfg(not(feature = "testing"))]
mod contact_manager;

#[cfg(feature = "testing")]
pub mod error;
#[cfg(not(feature = "testing"))]
mod error;

#[cfg(feature = "testing")]
pub mod events;
#[cfg(not(feature = "testing"))]
mod events;

#[cfg(feature = "testing")]
pub mod merge_engine;
#[cfg(not(feature = "testing"))]
mod merge_engine;

// Error types
pub use error::{CarnetError, CarnetResult};

// Events
pub use events::{CallbackHandler, CarnetEvent, EventDispatcher, EventHandler};

// Contact Manager
pub use contact_manager::ContactManager;

// Merge Engine
pub use merge_engine::{MergeEngine, MergeOutcome};
