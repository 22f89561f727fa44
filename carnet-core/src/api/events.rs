// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Event System
//!
//! Callbacks for Carnet events.

use std::sync::Arc;

use crate::contact::{ContactId, MergeField};

/// Events emitted by Carnet.
#[derive(Debug, Clone, PartialEq)]
pub enum CarnetEvent {
    /// A contact was added.
    ContactAdded {
        /// The contact ID.
        contact_id: ContactId,
    },

    /// A contact was updated.
    ContactUpdated {
        /// The contact ID.
        contact_id: ContactId,
        /// Fields that changed.
        changed_fields: Vec<String>,
    },

    /// A contact was removed.
    ContactRemoved {
        /// The contact ID.
        contact_id: ContactId,
    },

    /// A contact's favorite marker was flipped.
    FavoriteToggled {
        /// The contact ID.
        contact_id: ContactId,
        /// The new value.
        favorite: bool,
    },

    /// Two contacts were merged; the source no longer exists.
    ContactsMerged {
        /// The surviving contact.
        target_id: ContactId,
        /// The deleted contact.
        source_id: ContactId,
        /// Fields copied into the target.
        completed_fields: Vec<MergeField>,
    },
}

/// Event handler trait.
///
/// Implement this trait to receive Carnet events.
pub trait EventHandler: Send + Sync {
    /// Called when an event occurs.
    fn on_event(&self, event: CarnetEvent);
}

/// Simple callback-based event handler.
///
/// Wraps a closure for easy event handling.
pub struct CallbackHandler<F>
where
    F: Fn(CarnetEvent) + Send + Sync,
{
    callback: F,
}

impl<F> CallbackHandler<F>
where
    F: Fn(CarnetEvent) + Send + Sync,
{
    /// Creates a new callback handler.
    pub fn new(callback: F) -> Self {
        CallbackHandler { callback }
    }
}

impl<F> EventHandler for CallbackHandler<F>
where
    F: Fn(CarnetEvent) + Send + Sync,
{
    fn on_event(&self, event: CarnetEvent) {
        (self.callback)(event);
    }
}

/// Event dispatcher for managing multiple handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn EventHandler>>,
}

impl EventDispatcher {
    /// Creates a new event dispatcher.
    pub fn new() -> Self {
        EventDispatcher {
            handlers: Vec::new(),
        }
    }

    /// Adds an event handler.
    pub fn add_handler(&mut self, handler: Arc<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Dispatches an event to all handlers.
    pub fn dispatch(&self, event: CarnetEvent) {
        for handler in &self.handlers {
            handler.on_event(event.clone());
        }
    }
}
