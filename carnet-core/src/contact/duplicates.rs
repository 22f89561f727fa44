// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Duplicate Detection

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::{debug, info};

use super::similarity::score;
use super::{ContactId, ContactRecord};

/// Pairs must score strictly above this to be reported.
pub const DUPLICATE_THRESHOLD: f64 = 0.70;

/// A detected duplicate pair with similarity score.
#[derive(Clone, Debug, PartialEq)]
pub struct DuplicatePair {
    /// ID of the first contact (earlier in the input).
    pub contact1_id: Option<ContactId>,
    /// ID of the second contact.
    pub contact2_id: Option<ContactId>,
    /// Similarity score (0.0 to 1.0).
    pub score: f64,
}

impl DuplicatePair {
    /// Score as a rounded percentage.
    pub fn score_percent(&self) -> u32 {
        percent(self.score)
    }
}

impl Serialize for DuplicatePair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DuplicatePair", 4)?;
        state.serialize_field("contact1Id", &self.contact1_id)?;
        state.serialize_field("contact2Id", &self.contact2_id)?;
        state.serialize_field("score", &self.score)?;
        state.serialize_field("scorePercent", &self.score_percent())?;
        state.end()
    }
}

fn percent(score: f64) -> u32 {
    (score * 100.0).round() as u32
}

/// Finds potential duplicate contacts.
///
/// Every unordered pair `(i, j)` with `i < j` is scored; pairs scoring above
/// [`DUPLICATE_THRESHOLD`] are returned in scan order `(0,1), (0,2), ...,
/// (1,2), ...`. The result is not sorted and pairs are independent: no
/// transitive grouping is attempted.
pub fn find_duplicates(contacts: &[ContactRecord]) -> Vec<DuplicatePair> {
    let mut duplicates = Vec::new();

    for i in 0..contacts.len() {
        for j in (i + 1)..contacts.len() {
            let (a, b) = (&contacts[i], &contacts[j]);
            let sim = score(a, b);
            if sim > DUPLICATE_THRESHOLD {
                debug!(
                    first = %a.display_name(),
                    second = %b.display_name(),
                    percent = percent(sim),
                    "duplicate candidate"
                );
                duplicates.push(DuplicatePair {
                    contact1_id: a.id(),
                    contact2_id: b.id(),
                    score: sim,
                });
            }
        }
    }

    info!(
        contacts = contacts.len(),
        pairs = duplicates.len(),
        "duplicate scan finished"
    );
    duplicates
}
