// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Merge Engine
//!
//! Reconciles a duplicate pair into one record through the record store.

use serde::Serialize;
use tracing::{info, warn};

use crate::contact::{complete_missing_fields, ContactId, ContactRecord, MergeField};
use crate::storage::ContactStore;

use super::error::{CarnetError, CarnetResult};

/// Result of a successful merge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeOutcome {
    /// The target as saved after field completion.
    #[serde(rename = "mergedContact")]
    pub merged: ContactRecord,
    /// ID of the source, which no longer exists.
    pub deleted_id: ContactId,
    /// Optional fields the source filled in.
    pub completed_fields: Vec<MergeField>,
}

/// Applies the field-completion merge against a [`ContactStore`].
pub struct MergeEngine<'a, S: ContactStore> {
    store: &'a S,
}

impl<'a, S: ContactStore> MergeEngine<'a, S> {
    /// Creates a merge engine over the given store.
    pub fn new(store: &'a S) -> Self {
        MergeEngine { store }
    }

    /// Merges `source_id` into `target_id`.
    ///
    /// The target keeps its identity fields and any optional field it
    /// already has; blank optional fields are taken from the source. The
    /// target is saved and the source deleted inside one store transaction,
    /// so a failure at any step leaves both records as they were.
    ///
    /// Fails with [`CarnetError::ContactNotFound`] naming the first missing
    /// ID (target before source).
    pub fn merge(&self, target_id: ContactId, source_id: ContactId) -> CarnetResult<MergeOutcome> {
        if target_id == source_id {
            warn!(contact = %target_id, "refusing to merge a contact into itself");
            return Err(CarnetError::InvalidMerge(format!(
                "cannot merge contact {} into itself",
                target_id
            )));
        }

        let outcome = self.store.atomically(|store| -> CarnetResult<MergeOutcome> {
            let mut target = store
                .get_by_id(target_id)?
                .ok_or(CarnetError::ContactNotFound(target_id))?;
            let source = store
                .get_by_id(source_id)?
                .ok_or(CarnetError::ContactNotFound(source_id))?;

            let completed_fields = complete_missing_fields(&mut target, &source);
            let merged = store.save(&target)?;

            if !store.delete_by_id(source_id)? {
                return Err(CarnetError::ContactNotFound(source_id));
            }

            Ok(MergeOutcome {
                merged,
                deleted_id: source_id,
                completed_fields,
            })
        })?;

        info!(
            target = %target_id,
            source = %source_id,
            completed = ?outcome.completed_fields,
            "merged contacts"
        );
        Ok(outcome)
    }
}
