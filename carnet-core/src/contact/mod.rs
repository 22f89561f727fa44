// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Module
//!
//! The address-book record, plus the duplicate detection pipeline built on it:
//! [`similarity`] scores a pair, [`duplicates`] scans a list for likely
//! duplicates, and [`merge`] holds the field-completion policy applied when
//! two records are reconciled.

pub mod duplicates;
pub mod merge;
pub mod similarity;
pub mod validation;

pub use duplicates::{find_duplicates, DuplicatePair, DUPLICATE_THRESHOLD};
pub use merge::{complete_missing_fields, MergeField};
pub use similarity::{field_similarity, levenshtein, score, score_breakdown, SimilarityBreakdown};
pub use validation::{validate_contact, ValidationError, MAX_FIELD_LENGTH};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier assigned to a contact by the record store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(i64);

impl ContactId {
    /// Wraps a raw store identifier.
    pub const fn new(raw: i64) -> Self {
        ContactId(raw)
    }

    /// Returns the raw store identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContactId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ContactId)
    }
}

impl From<i64> for ContactId {
    fn from(raw: i64) -> Self {
        ContactId(raw)
    }
}

/// Returns true if the value is missing or whitespace-only.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// A single address-book entry.
///
/// `id` is `None` until the record store has persisted the contact; once
/// assigned it never changes. Email is the identifying field and is kept
/// unique by the store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    id: Option<ContactId>,
    last_name: String,
    first_name: String,
    email: String,
    phone: Option<String>,
    address: Option<String>,
    city: Option<String>,
    country: Option<String>,
    #[serde(default)]
    favorite: bool,
}

impl ContactRecord {
    /// Creates an unsaved contact with the three identity fields set.
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        ContactRecord {
            last_name: last_name.into(),
            first_name: first_name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    /// Sets the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the postal address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets the country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Sets the favorite marker.
    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    /// Returns a copy of this record carrying the given store identifier.
    ///
    /// Only the record store should call this.
    pub fn with_id(mut self, id: ContactId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<ContactId> {
        self.id
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    /// Returns "First Last", skipping blank parts.
    pub fn display_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_phone(&mut self, phone: Option<String>) {
        self.phone = phone;
    }

    pub fn set_address(&mut self, address: Option<String>) {
        self.address = address;
    }

    pub fn set_city(&mut self, city: Option<String>) {
        self.city = city;
    }

    pub fn set_country(&mut self, country: Option<String>) {
        self.country = country;
    }

    pub fn set_favorite(&mut self, favorite: bool) {
        self.favorite = favorite;
    }
}
