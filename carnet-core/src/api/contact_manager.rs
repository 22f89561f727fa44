// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Manager
//!
//! High-level interface for contact operations.

use std::sync::Arc;

use tracing::warn;

use crate::contact::{find_duplicates, validate_contact, ContactId, ContactRecord, DuplicatePair};
use crate::storage::{ContactStore, StorageError};

use super::error::{CarnetError, CarnetResult};
use super::events::{CarnetEvent, EventDispatcher};
use super::merge_engine::{MergeEngine, MergeOutcome};

/// Manages the address book.
///
/// Provides high-level operations for:
/// - Adding, updating and removing contacts (with validation)
/// - Listing and searching contacts
/// - Favorites
/// - Duplicate detection and merging
pub struct ContactManager<'a, S: ContactStore> {
    store: &'a S,
    events: Arc<EventDispatcher>,
}

impl<'a, S: ContactStore> ContactManager<'a, S> {
    /// Creates a new ContactManager.
    pub fn new(store: &'a S, events: Arc<EventDispatcher>) -> Self {
        ContactManager { store, events }
    }

    // === Contact Operations ===

    /// Adds a new contact.
    ///
    /// The contact must not have been saved before, must pass validation,
    /// and its email must not already be in use.
    pub fn add_contact(&self, contact: ContactRecord) -> CarnetResult<ContactRecord> {
        if let Some(id) = contact.id() {
            return Err(CarnetError::InvalidState(format!(
                "Contact {} already exists",
                id
            )));
        }
        validate_contact(&contact)?;

        if self.store.find_by_email(contact.email())?.is_some() {
            warn!(email = contact.email(), "rejected duplicate email");
            return Err(StorageError::AlreadyExists(format!(
                "contact with email '{}'",
                contact.email()
            ))
            .into());
        }

        let saved = self.store.save(&contact)?;
        if let Some(contact_id) = saved.id() {
            self.events.dispatch(CarnetEvent::ContactAdded { contact_id });
        }

        Ok(saved)
    }

    /// Gets a contact by ID.
    pub fn get_contact(&self, id: ContactId) -> CarnetResult<Option<ContactRecord>> {
        Ok(self.store.get_by_id(id)?)
    }

    /// Gets a contact by ID, returning error if not found.
    pub fn get_contact_required(&self, id: ContactId) -> CarnetResult<ContactRecord> {
        self.store
            .get_by_id(id)?
            .ok_or(CarnetError::ContactNotFound(id))
    }

    /// Lists all contacts.
    pub fn list_contacts(&self) -> CarnetResult<Vec<ContactRecord>> {
        Ok(self.store.list_all()?)
    }

    /// Searches contacts by last or first name (case-insensitive).
    pub fn search_contacts(&self, query: &str) -> CarnetResult<Vec<ContactRecord>> {
        Ok(self.store.search_by_name(query)?)
    }

    /// Returns the number of contacts.
    pub fn contact_count(&self) -> CarnetResult<usize> {
        Ok(self.store.count()?)
    }

    /// Updates an existing contact.
    ///
    /// Returns the names of the fields that changed.
    pub fn update_contact(&self, contact: &ContactRecord) -> CarnetResult<Vec<String>> {
        let contact_id = contact.id().ok_or_else(|| {
            CarnetError::InvalidState("cannot update a contact that was never saved".into())
        })?;
        validate_contact(contact)?;

        let old = self.get_contact_required(contact_id)?;
        let changed_fields = Self::compute_changed_fields(&old, contact);

        self.store.save(contact)?;

        if !changed_fields.is_empty() {
            self.events.dispatch(CarnetEvent::ContactUpdated {
                contact_id,
                changed_fields: changed_fields.clone(),
            });
        }

        Ok(changed_fields)
    }

    /// Removes a contact by ID.
    pub fn remove_contact(&self, id: ContactId) -> CarnetResult<()> {
        if !self.store.delete_by_id(id)? {
            return Err(CarnetError::ContactNotFound(id));
        }

        self.events
            .dispatch(CarnetEvent::ContactRemoved { contact_id: id });
        Ok(())
    }

    // === Favorites ===

    /// Flips the favorite marker. Returns the new value.
    pub fn toggle_favorite(&self, id: ContactId) -> CarnetResult<bool> {
        let mut contact = self.get_contact_required(id)?;
        let favorite = !contact.is_favorite();
        contact.set_favorite(favorite);
        self.store.save(&contact)?;

        self.events.dispatch(CarnetEvent::FavoriteToggled {
            contact_id: id,
            favorite,
        });
        Ok(favorite)
    }

    /// Lists contacts marked as favorite.
    pub fn list_favorites(&self) -> CarnetResult<Vec<ContactRecord>> {
        Ok(self.store.list_favorites()?)
    }

    // === Duplicates ===

    /// Scans the whole address book for likely duplicates.
    ///
    /// Runs in O(n²) over the stored contacts.
    pub fn find_duplicates(&self) -> CarnetResult<Vec<DuplicatePair>> {
        let contacts = self.store.list_all()?;
        Ok(find_duplicates(&contacts))
    }

    /// Merges `source_id` into `target_id` and deletes the source.
    pub fn merge_contacts(
        &self,
        target_id: ContactId,
        source_id: ContactId,
    ) -> CarnetResult<MergeOutcome> {
        let outcome = MergeEngine::new(self.store).merge(target_id, source_id)?;

        self.events.dispatch(CarnetEvent::ContactsMerged {
            target_id,
            source_id,
            completed_fields: outcome.completed_fields.clone(),
        });
        Ok(outcome)
    }

    fn compute_changed_fields(old: &ContactRecord, new: &ContactRecord) -> Vec<String> {
        let pairs = [
            ("last_name", Some(old.last_name()), Some(new.last_name())),
            ("first_name", Some(old.first_name()), Some(new.first_name())),
            ("email", Some(old.email()), Some(new.email())),
            ("phone", old.phone(), new.phone()),
            ("address", old.address(), new.address()),
            ("city", old.city(), new.city()),
            ("country", old.country(), new.country()),
        ];

        let mut changed: Vec<String> = pairs
            .iter()
            .filter(|(_, before, after)| before != after)
            .map(|(name, _, _)| name.to_string())
            .collect();

        if old.is_favorite() != new.is_favorite() {
            changed.push("favorite".to_string());
        }
        changed
    }
}
