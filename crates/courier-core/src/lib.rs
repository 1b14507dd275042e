// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Courier dispatch pipeline.
//!
//! This crate provides the shared data model (raw rows, failure records, send
//! outcomes), the error taxonomy, and the collaborator traits that the source
//! and transport crates implement.

pub mod address;
pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use address::is_valid_email;
pub use error::{CourierError, TransportError};
pub use traits::{Clock, MailTransport, RecordSource, SystemClock};
pub use types::{
    Column, FailureReason, FailureRecord, OutgoingMail, RawRecord, RejectionReason, SendOutcome,
    TransportReceipt,
};
