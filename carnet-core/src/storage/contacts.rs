// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact storage operations.

use rusqlite::{params, ErrorCode, OptionalExtension, Row};

use super::{unix_now, Storage, StorageError};
use crate::contact::{ContactId, ContactRecord};

const CONTACT_COLUMNS: &str =
    "id, last_name, first_name, email, phone, address, city, country, favorite";

fn row_to_contact(row: &Row<'_>) -> rusqlite::Result<ContactRecord> {
    let mut contact = ContactRecord::new(
        row.get::<_, String>(1)?,
        row.get::<_, String>(2)?,
        row.get::<_, String>(3)?,
    )
    .with_id(ContactId::new(row.get(0)?));
    contact.set_phone(row.get(4)?);
    contact.set_address(row.get(5)?);
    contact.set_city(row.get(6)?);
    contact.set_country(row.get(7)?);
    contact.set_favorite(row.get::<_, i32>(8)? != 0);
    Ok(contact)
}

/// Maps a UNIQUE violation on `email` to `AlreadyExists`.
fn map_unique_violation(err: rusqlite::Error, email: &str) -> StorageError {
    match &err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation => {
            StorageError::AlreadyExists(format!("contact with email '{}'", email))
        }
        _ => StorageError::Database(err),
    }
}

impl Storage {
    // === Contact Operations ===

    /// Saves a contact: inserts when it has no ID, updates otherwise.
    pub fn save_contact(&self, contact: &ContactRecord) -> Result<ContactRecord, StorageError> {
        let now = unix_now();

        let id = match contact.id() {
            None => {
                self.conn
                    .execute(
                        "INSERT INTO contacts
                         (last_name, first_name, email, phone, address, city, country,
                          favorite, created_at, updated_at)
                         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)",
                        params![
                            contact.last_name(),
                            contact.first_name(),
                            contact.email(),
                            contact.phone(),
                            contact.address(),
                            contact.city(),
                            contact.country(),
                            contact.is_favorite() as i32,
                            now,
                        ],
                    )
                    .map_err(|e| map_unique_violation(e, contact.email()))?;
                ContactId::new(self.conn.last_insert_rowid())
            }
            Some(id) => {
                let rows = self
                    .conn
                    .execute(
                        "UPDATE contacts
                         SET last_name = ?2, first_name = ?3, email = ?4, phone = ?5,
                             address = ?6, city = ?7, country = ?8, favorite = ?9,
                             updated_at = ?10
                         WHERE id = ?1",
                        params![
                            id.get(),
                            contact.last_name(),
                            contact.first_name(),
                            contact.email(),
                            contact.phone(),
                            contact.address(),
                            contact.city(),
                            contact.country(),
                            contact.is_favorite() as i32,
                            now,
                        ],
                    )
                    .map_err(|e| map_unique_violation(e, contact.email()))?;
                if rows == 0 {
                    return Err(StorageError::NotFound(format!("contact {}", id)));
                }
                id
            }
        };

        self.load_contact(id)?
            .ok_or_else(|| StorageError::NotFound(format!("contact {}", id)))
    }

    /// Loads a contact by ID.
    pub fn load_contact(&self, id: ContactId) -> Result<Option<ContactRecord>, StorageError> {
        let sql = format!("SELECT {} FROM contacts WHERE id = ?1", CONTACT_COLUMNS);
        Ok(self
            .conn
            .query_row(&sql, params![id.get()], row_to_contact)
            .optional()?)
    }

    /// Loads a contact by email.
    pub fn load_contact_by_email(
        &self,
        email: &str,
    ) -> Result<Option<ContactRecord>, StorageError> {
        let sql = format!("SELECT {} FROM contacts WHERE email = ?1", CONTACT_COLUMNS);
        Ok(self
            .conn
            .query_row(&sql, params![email], row_to_contact)
            .optional()?)
    }

    /// Lists all contacts in insertion order.
    pub fn list_contacts(&self) -> Result<Vec<ContactRecord>, StorageError> {
        self.query_contacts(
            &format!("SELECT {} FROM contacts ORDER BY id", CONTACT_COLUMNS),
            [],
        )
    }

    /// Lists contacts marked as favorite.
    pub fn list_favorite_contacts(&self) -> Result<Vec<ContactRecord>, StorageError> {
        self.query_contacts(
            &format!(
                "SELECT {} FROM contacts WHERE favorite != 0 ORDER BY id",
                CONTACT_COLUMNS
            ),
            [],
        )
    }

    /// Returns the number of contacts.
    pub fn count_contacts(&self) -> Result<usize, StorageError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Deletes a contact by ID.
    pub fn delete_contact(&self, id: ContactId) -> Result<bool, StorageError> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM contacts WHERE id = ?1", params![id.get()])?;
        Ok(rows_affected > 0)
    }

    fn query_contacts<P: rusqlite::Params>(
        &self,
        sql: &str,
        params: P,
    ) -> Result<Vec<ContactRecord>, StorageError> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, row_to_contact)?;

        let mut contacts = Vec::new();
        for row in rows {
            contacts.push(row?);
        }
        Ok(contacts)
    }
}
