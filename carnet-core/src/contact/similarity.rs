// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Similarity Scoring
//!
//! Scores a pair of contacts in `[0.0, 1.0]` from three criteria:
//!
//! | criterion  | weight | signal                                   |
//! |------------|--------|------------------------------------------|
//! | last name  | 0.35   | normalized Levenshtein, case-insensitive |
//! | first name | 0.35   | normalized Levenshtein, case-insensitive |
//! | phone      | 0.30   | exact match, case-sensitive              |
//!
//! A criterion only counts when both contacts have a non-blank value for it.
//! Skipped criteria forfeit their weight: the remaining weights are not
//! rescaled, so two contacts without phones top out at 0.70.

use super::{is_blank, ContactRecord};

/// Weight of the last-name criterion.
pub const LAST_NAME_WEIGHT: f64 = 0.35;

/// Weight of the first-name criterion.
pub const FIRST_NAME_WEIGHT: f64 = 0.35;

/// Weight of the phone criterion.
pub const PHONE_WEIGHT: f64 = 0.30;

/// Classic Levenshtein distance (unit-cost insert, delete, substitute),
/// counted in Unicode scalar values.
pub fn levenshtein(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Normalized edit-distance similarity between two strings.
///
/// `1 - distance / max_len` on the lowercased inputs. Identical strings
/// (ignoring case) give 1.0, an empty side gives 0.0.
pub fn field_similarity(a: &str, b: &str) -> f64 {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();

    if a_lower == b_lower {
        return 1.0;
    }

    if a_lower.is_empty() || b_lower.is_empty() {
        return 0.0;
    }

    let max_len = a_lower.chars().count().max(b_lower.chars().count());
    let distance = levenshtein(&a_lower, &b_lower);

    1.0 - (distance as f64 / max_len as f64)
}

/// Per-criterion view of a similarity computation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimilarityBreakdown {
    /// Last-name similarity, if both sides had one.
    pub last_name: Option<f64>,
    /// First-name similarity, if both sides had one.
    pub first_name: Option<f64>,
    /// Whether the phones matched exactly, if both sides had one.
    pub phone_match: Option<bool>,
}

impl SimilarityBreakdown {
    /// Number of criteria that were compared.
    pub fn criteria(&self) -> usize {
        usize::from(self.last_name.is_some())
            + usize::from(self.first_name.is_some())
            + usize::from(self.phone_match.is_some())
    }

    /// Weighted score. 0.0 when nothing could be compared.
    pub fn total(&self) -> f64 {
        if self.criteria() == 0 {
            return 0.0;
        }

        let mut total = 0.0;
        if let Some(sim) = self.last_name {
            total += sim * LAST_NAME_WEIGHT;
        }
        if let Some(sim) = self.first_name {
            total += sim * FIRST_NAME_WEIGHT;
        }
        if self.phone_match == Some(true) {
            total += PHONE_WEIGHT;
        }
        total
    }
}

/// Computes the per-criterion breakdown for a pair of contacts.
pub fn score_breakdown(a: &ContactRecord, b: &ContactRecord) -> SimilarityBreakdown {
    SimilarityBreakdown {
        last_name: compare_names(a.last_name(), b.last_name()),
        first_name: compare_names(a.first_name(), b.first_name()),
        phone_match: match (a.phone(), b.phone()) {
            (Some(pa), Some(pb)) if !is_blank(Some(pa)) && !is_blank(Some(pb)) => Some(pa == pb),
            _ => None,
        },
    }
}

/// Similarity score between two contacts, in `[0.0, 1.0]`.
///
/// Symmetric and side-effect free.
pub fn score(a: &ContactRecord, b: &ContactRecord) -> f64 {
    score_breakdown(a, b).total()
}

fn compare_names(a: &str, b: &str) -> Option<f64> {
    if is_blank(Some(a)) || is_blank(Some(b)) {
        return None;
    }
    Some(field_similarity(a, b))
}
