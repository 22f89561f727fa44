// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Field-Completion Merge Policy
//!
//! The target keeps every value it already has. Blank optional fields are
//! filled from the source; identity fields (last name, first name, email)
//! are never touched.

use std::fmt;

use serde::Serialize;

use super::{is_blank, ContactRecord};

/// Optional fields eligible for completion during a merge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeField {
    Phone,
    Address,
    City,
    Country,
}

impl MergeField {
    /// All completable fields, in completion order.
    pub const ALL: [MergeField; 4] = [
        MergeField::Phone,
        MergeField::Address,
        MergeField::City,
        MergeField::Country,
    ];

    fn get(self, record: &ContactRecord) -> Option<&str> {
        match self {
            MergeField::Phone => record.phone(),
            MergeField::Address => record.address(),
            MergeField::City => record.city(),
            MergeField::Country => record.country(),
        }
    }

    fn set(self, record: &mut ContactRecord, value: String) {
        match self {
            MergeField::Phone => record.set_phone(Some(value)),
            MergeField::Address => record.set_address(Some(value)),
            MergeField::City => record.set_city(Some(value)),
            MergeField::Country => record.set_country(Some(value)),
        }
    }
}

impl fmt::Display for MergeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MergeField::Phone => "phone",
            MergeField::Address => "address",
            MergeField::City => "city",
            MergeField::Country => "country",
        };
        f.write_str(name)
    }
}

/// Fills the target's blank optional fields from the source.
///
/// Returns the fields that were copied.
pub fn complete_missing_fields(
    target: &mut ContactRecord,
    source: &ContactRecord,
) -> Vec<MergeField> {
    let mut completed = Vec::new();

    for field in MergeField::ALL {
        if !is_blank(field.get(target)) {
            continue;
        }
        let Some(value) = field.get(source).filter(|v| !v.trim().is_empty()) else {
            continue;
        };
        let value = value.to_string();
        field.set(target, value);
        completed.push(field);
    }

    completed
}
