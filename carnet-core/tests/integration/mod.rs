// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration Tests for Carnet Core
//!
//! These tests drive complete address-book workflows through the
//! contact manager against an on-disk database.
//!
//! Run with: cargo test --test integration

mod contact_workflow_test;
mod duplicate_workflow_test;
