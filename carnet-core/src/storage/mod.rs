// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Persistent Storage Module
//!
//! The [`ContactStore`] trait is the record store the duplicate pipeline
//! reads from and the merge engine writes through. Two implementations:
//! [`Storage`] (SQLite) and [`MemoryStore`] (in-process map).

#[cfg(feature = "testing")]
pub mod contacts;
#[cfg(not(feature = "testing"))]
mod contacts;

mod error;
mod memory;
pub mod migration;

pub use error::StorageError;
pub use memory::MemoryStore;

use std::path::Path;
use std::time::Duration;

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::contact::{ContactId, ContactRecord};

/// Record store for contacts.
///
/// Implementations own contact lifetime: they assign identifiers, enforce
/// email uniqueness, and provide the transaction boundary used by merges.
pub trait ContactStore {
    /// Returns every contact in a stable order.
    fn list_all(&self) -> Result<Vec<ContactRecord>, StorageError>;

    /// Loads a contact by ID.
    fn get_by_id(&self, id: ContactId) -> Result<Option<ContactRecord>, StorageError>;

    /// Inserts a contact without an ID, or updates the stored contact with
    /// the same ID. Returns the contact as persisted.
    fn save(&self, record: &ContactRecord) -> Result<ContactRecord, StorageError>;

    /// Deletes a contact. Returns false if there was nothing to delete.
    fn delete_by_id(&self, id: ContactId) -> Result<bool, StorageError>;

    /// Runs `f` as one unit of work.
    ///
    /// Either every write made inside `f` is kept, or, when `f` returns an
    /// error, none of them are. Concurrent atomic sections on the same store
    /// do not interleave.
    fn atomically<T, E, F>(&self, f: F) -> Result<T, E>
    where
        Self: Sized,
        E: From<StorageError>,
        F: FnOnce(&Self) -> Result<T, E>;

    /// Looks up a contact by email (exact match).
    fn find_by_email(&self, email: &str) -> Result<Option<ContactRecord>, StorageError> {
        Ok(self.list_all()?.into_iter().find(|c| c.email() == email))
    }

    /// Returns the number of stored contacts.
    fn count(&self) -> Result<usize, StorageError> {
        Ok(self.list_all()?.len())
    }

    /// Returns contacts marked as favorite.
    fn list_favorites(&self) -> Result<Vec<ContactRecord>, StorageError> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|c| c.is_favorite())
            .collect())
    }

    /// Case-insensitive substring search on last or first name.
    ///
    /// The query is plain text and case folding covers full Unicode, so
    /// "ndèye" finds "NDÈYE".
    fn search_by_name(&self, query: &str) -> Result<Vec<ContactRecord>, StorageError> {
        let query = query.trim().to_lowercase();
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|c| {
                c.last_name().to_lowercase().contains(&query)
                    || c.first_name().to_lowercase().contains(&query)
            })
            .collect())
    }
}

/// How long a connection waits for a competing writer before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite-based storage implementation.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Opens or creates a storage database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        // Another process may hold the write lock during a merge.
        conn.busy_timeout(BUSY_TIMEOUT)?;
        let storage = Storage { conn };
        storage.run_migrations()?;
        Ok(storage)
    }

    /// Creates an in-memory storage (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let storage = Storage { conn };
        storage.run_migrations()?;
        Ok(storage)
    }

    /// Runs all pending schema migrations.
    fn run_migrations(&self) -> Result<(), StorageError> {
        let migrations = migration::all_migrations();
        migration::MigrationRunner::run(&self.conn, &migrations)
    }

    /// Returns the current schema version.
    pub fn schema_version(&self) -> Result<u32, StorageError> {
        migration::MigrationRunner::current_version(&self.conn)
    }
}

impl ContactStore for Storage {
    fn list_all(&self) -> Result<Vec<ContactRecord>, StorageError> {
        self.list_contacts()
    }

    fn get_by_id(&self, id: ContactId) -> Result<Option<ContactRecord>, StorageError> {
        self.load_contact(id)
    }

    fn save(&self, record: &ContactRecord) -> Result<ContactRecord, StorageError> {
        self.save_contact(record)
    }

    fn delete_by_id(&self, id: ContactId) -> Result<bool, StorageError> {
        self.delete_contact(id)
    }

    fn atomically<T, E, F>(&self, f: F) -> Result<T, E>
    where
        E: From<StorageError>,
        F: FnOnce(&Self) -> Result<T, E>,
    {
        // IMMEDIATE takes the write lock up front so two merges cannot both
        // read the same source before either deletes it. The transaction
        // rolls back on drop, including when `f` unwinds.
        let tx = Transaction::new_unchecked(&self.conn, TransactionBehavior::Immediate)
            .map_err(StorageError::from)?;

        let value = f(self)?;
        tx.commit().map_err(StorageError::from)?;
        Ok(value)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<ContactRecord>, StorageError> {
        self.load_contact_by_email(email)
    }

    fn count(&self) -> Result<usize, StorageError> {
        self.count_contacts()
    }

    fn list_favorites(&self) -> Result<Vec<ContactRecord>, StorageError> {
        self.list_favorite_contacts()
    }
}

/// Current Unix time in seconds.
pub(crate) fn unix_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
