// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Validation
//!
//! Checks applied before a contact is created or updated through the
//! contact manager. Records already in the store are not re-validated.

use thiserror::Error;

use super::{is_blank, ContactRecord};

/// Maximum length of any contact field, in characters.
pub const MAX_FIELD_LENGTH: usize = 255;

/// Validation error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    EmptyValue { field: &'static str },
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),
    #[error("{field} too long (max {max} characters)")]
    ValueTooLong { field: &'static str, max: usize },
}

/// Validates a contact before it is written.
pub fn validate_contact(contact: &ContactRecord) -> Result<(), ValidationError> {
    let required = [
        ("last name", contact.last_name()),
        ("first name", contact.first_name()),
        ("email", contact.email()),
    ];
    for (field, value) in required {
        if is_blank(Some(value)) {
            return Err(ValidationError::EmptyValue { field });
        }
    }

    if !contact.email().contains('@') {
        return Err(ValidationError::InvalidEmail(contact.email().to_string()));
    }

    let all = [
        ("last name", Some(contact.last_name())),
        ("first name", Some(contact.first_name())),
        ("email", Some(contact.email())),
        ("phone", contact.phone()),
        ("address", contact.address()),
        ("city", contact.city()),
        ("country", contact.country()),
    ];
    for (field, value) in all {
        if value.is_some_and(|v| v.chars().count() > MAX_FIELD_LENGTH) {
            return Err(ValidationError::ValueTooLong {
                field,
                max: MAX_FIELD_LENGTH,
            });
        }
    }

    Ok(())
}
