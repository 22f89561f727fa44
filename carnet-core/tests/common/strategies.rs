// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Reusable proptest strategies for property-based testing.

use carnet_core::ContactRecord;
use proptest::prelude::*;

/// Strategy for generating names, including accented letters and blanks.
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[A-Za-zéèçàÉ][a-zéèçà' -]{0,15}",
        1 => Just(String::new()),
        1 => Just("   ".to_string()),
    ]
}

/// Strategy for generating optional phone numbers from a small pool so
/// that exact matches actually occur.
pub fn phone_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "77[0-9]{2}".prop_map(Some),
    ]
}

/// Strategy for generating unsaved contact records.
pub fn contact_strategy() -> impl Strategy<Value = ContactRecord> {
    (
        name_strategy(),
        name_strategy(),
        "[a-z]{3,10}",
        phone_strategy(),
    )
        .prop_map(|(last, first, user, phone)| {
            let mut contact = ContactRecord::new(last, first, format!("{}@example.sn", user));
            contact.set_phone(phone);
            contact
        })
}
