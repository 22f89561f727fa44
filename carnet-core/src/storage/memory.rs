// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory contact store.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{ContactStore, StorageError};
use crate::contact::{ContactId, ContactRecord};

#[derive(Clone, Default)]
struct MemoryState {
    next_id: i64,
    contacts: BTreeMap<ContactId, ContactRecord>,
}

/// Map-backed [`ContactStore`] with the same ID and uniqueness rules as the
/// SQLite store. Atomic sections snapshot the map and restore it on error.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
    txn: Mutex<()>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ContactStore for MemoryStore {
    fn list_all(&self) -> Result<Vec<ContactRecord>, StorageError> {
        Ok(self.state().contacts.values().cloned().collect())
    }

    fn get_by_id(&self, id: ContactId) -> Result<Option<ContactRecord>, StorageError> {
        Ok(self.state().contacts.get(&id).cloned())
    }

    fn save(&self, record: &ContactRecord) -> Result<ContactRecord, StorageError> {
        let mut state = self.state();

        let email_taken = state
            .contacts
            .values()
            .any(|c| c.email() == record.email() && c.id() != record.id());
        if email_taken {
            return Err(StorageError::AlreadyExists(format!(
                "contact with email '{}'",
                record.email()
            )));
        }

        let id = match record.id() {
            Some(id) if state.contacts.contains_key(&id) => id,
            Some(id) => return Err(StorageError::NotFound(format!("contact {}", id))),
            None => {
                state.next_id += 1;
                ContactId::new(state.next_id)
            }
        };

        let stored = record.clone().with_id(id);
        state.contacts.insert(id, stored.clone());
        Ok(stored)
    }

    fn delete_by_id(&self, id: ContactId) -> Result<bool, StorageError> {
        Ok(self.state().contacts.remove(&id).is_some())
    }

    fn atomically<T, E, F>(&self, f: F) -> Result<T, E>
    where
        E: From<StorageError>,
        F: FnOnce(&Self) -> Result<T, E>,
    {
        let _txn = self.txn.lock().unwrap_or_else(PoisonError::into_inner);
        let snapshot = self.state().clone();

        let result = f(self);
        if result.is_err() {
            *self.state() = snapshot;
        }
        result
    }
}
