// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Row builders.

use courier_core::{Column, RawRecord};

/// A recipient row with every column except `Subject` set.
pub fn recipient(
    row: usize,
    name: &str,
    email: &str,
    group: &str,
    send_time: &str,
    message: &str,
) -> RawRecord {
    RawRecord::new(row)
        .with(Column::Name, name)
        .with(Column::Email, email)
        .with(Column::Group, group)
        .with(Column::SendTime, send_time)
        .with(Column::Message, message)
}
