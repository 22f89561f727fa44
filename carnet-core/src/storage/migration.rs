// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Database Schema Migration Framework
//!
//! Provides versioned schema migrations with transactional safety.
//! Each migration has a version number, name, and either SQL or a Rust callback.
//! The runner tracks applied versions in a `schema_version` table and runs
//! pending migrations in order within a single transaction.

use rusqlite::Connection;

use super::StorageError;

/// A single schema migration step.
pub struct Migration {
    /// Monotonically increasing version number (starting at 1).
    pub version: u32,
    /// Human-readable name for this migration.
    pub name: &'static str,
    /// The migration action: either SQL or a Rust callback.
    pub action: MigrationAction,
}

/// The action a migration performs.
pub enum MigrationAction {
    /// Pure SQL migration.
    Sql(&'static str),
    /// Rust callback migration (for data fixes SQL cannot express).
    Callback(fn(&Connection) -> Result<(), StorageError>),
}

/// Runs schema migrations against a database connection.
pub struct MigrationRunner;

impl MigrationRunner {
    /// Runs all pending migrations in a transaction.
    ///
    /// Creates the `schema_version` table if it doesn't exist, then applies
    /// any migrations whose version is greater than the current schema version.
    /// If any migration fails, all changes are rolled back.
    pub fn run(conn: &Connection, migrations: &[Migration]) -> Result<(), StorageError> {
        // Created outside the transaction: we need to read it first.
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS schema_version (
                version INTEGER PRIMARY KEY,
                applied_at INTEGER NOT NULL
            );",
        )?;

        let current_version = Self::current_version(conn)?;

        let pending: Vec<&Migration> = migrations
            .iter()
            .filter(|m| m.version > current_version)
            .collect();

        if pending.is_empty() {
            return Ok(());
        }

        for window in pending.windows(2) {
            if window[0].version >= window[1].version {
                return Err(StorageError::Migration(format!(
                    "Migrations are not in order: v{} before v{}",
                    window[0].version, window[1].version
                )));
            }
        }

        conn.execute_batch("BEGIN EXCLUSIVE TRANSACTION;")?;

        for migration in &pending {
            let outcome = match &migration.action {
                MigrationAction::Sql(sql) => conn.execute_batch(sql).map_err(StorageError::from),
                MigrationAction::Callback(cb) => cb(conn),
            };

            if let Err(e) = outcome {
                conn.execute_batch("ROLLBACK;")?;
                return Err(StorageError::Migration(format!(
                    "Migration v{} '{}' failed: {}",
                    migration.version, migration.name, e
                )));
            }

            if let Err(e) = conn.execute(
                "INSERT INTO schema_version (version, applied_at) VALUES (?1, ?2)",
                rusqlite::params![migration.version, super::unix_now()],
            ) {
                conn.execute_batch("ROLLBACK;")?;
                return Err(StorageError::Migration(format!(
                    "Failed to record migration v{}: {}",
                    migration.version, e
                )));
            }

            tracing::debug!(version = migration.version, name = migration.name, "applied migration");
        }

        conn.execute_batch("COMMIT;")?;
        Ok(())
    }

    /// Returns the current schema version, or 0 if no migrations have been applied.
    pub fn current_version(conn: &Connection) -> Result<u32, StorageError> {
        let table_exists: bool = conn.query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='schema_version'",
            [],
            |row| row.get(0),
        )?;

        if !table_exists {
            return Ok(0);
        }

        let version: Option<u32> =
            conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| {
                row.get(0)
            })?;

        Ok(version.unwrap_or(0))
    }
}

const MIGRATION_V1_CONTACTS: &str = "
CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    last_name TEXT NOT NULL DEFAULT '',
    first_name TEXT NOT NULL DEFAULT '',
    email TEXT NOT NULL UNIQUE,
    phone TEXT,
    address TEXT,
    city TEXT,
    country TEXT,
    favorite INTEGER NOT NULL DEFAULT 0,
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL
);
";

const MIGRATION_V2_NAME_INDEXES: &str = "
CREATE INDEX IF NOT EXISTS idx_contacts_last_name ON contacts(last_name COLLATE NOCASE);
CREATE INDEX IF NOT EXISTS idx_contacts_favorite ON contacts(favorite);
";

/// Returns all registered migrations in version order.
///
/// New migrations are appended to the end of this list.
pub fn all_migrations() -> Vec<Migration> {
    vec![
        Migration {
            version: 1,
            name: "contacts_table",
            action: MigrationAction::Sql(MIGRATION_V1_CONTACTS),
        },
        Migration {
            version: 2,
            name: "contact_indexes",
            action: MigrationAction::Sql(MIGRATION_V2_NAME_INDEXES),
        },
    ]
}
