// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The one address-shape check shared by row validation and config validation.

use std::sync::LazyLock;

use regex::Regex;

/// Permissive address check, anchored at the start only: anything after the
/// first `x@y.z` match is accepted.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").unwrap());

/// Whether `email` passes the permissive `local@domain.tld` shape check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}
