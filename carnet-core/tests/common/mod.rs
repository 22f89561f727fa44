// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Common Test Utilities
//!
//! Shared helpers and fixtures used across test modules.

#![allow(dead_code)]

pub mod strategies;

use carnet_core::ContactRecord;

/// Tolerance for comparing similarity scores.
pub const EPSILON: f64 = 1e-9;

/// Builds an unsaved contact with a derived email.
pub fn person(last: &str, first: &str) -> ContactRecord {
    let email = format!(
        "{}.{}@example.sn",
        first.to_lowercase().replace(' ', ""),
        last.to_lowercase().replace(' ', "")
    );
    ContactRecord::new(last, first, email)
}

/// Builds an unsaved contact with a phone number.
pub fn person_with_phone(last: &str, first: &str, phone: &str) -> ContactRecord {
    person(last, first).with_phone(phone)
}

/// Asserts two scores are equal within [`EPSILON`].
pub fn assert_score(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected score {}, got {}",
        expected,
        actual
    );
}
