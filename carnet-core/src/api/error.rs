// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! API Error Types
//!
//! Unified error type for the Carnet API layer.

use thiserror::Error;

use crate::contact::{ContactId, ValidationError};
use crate::storage::StorageError;

/// Unified error type for Carnet operations.
#[derive(Error, Debug)]
pub enum CarnetError {
    /// Contact validation failed.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Contact not found.
    #[error("contact not found: {0}")]
    ContactNotFound(ContactId),

    /// The requested merge cannot be performed.
    #[error("invalid merge: {0}")]
    InvalidMerge(String),

    /// Invalid operation in current state.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Result type for Carnet operations.
pub type CarnetResult<T> = Result<T, CarnetError>;
