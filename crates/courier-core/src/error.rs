// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Courier dispatch pipeline.

use thiserror::Error;

/// The primary error type for run-level failures.
///
/// Row-level problems never surface as a `CourierError`; they are folded into
/// [`FailureReason`](crate::types::FailureReason) values and recorded.
#[derive(Debug, Error)]
pub enum CourierError {
    /// Configuration errors (invalid values, unreadable files).
    #[error("configuration error: {0}")]
    Config(String),

    /// The recipient source could not be opened or read.
    #[error("source error: {message}")]
    Source {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The mail transport could not be constructed.
    #[error("transport setup error: {0}")]
    TransportSetup(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Errors raised by a [`MailTransport`](crate::traits::MailTransport) while
/// delivering one message.
///
/// The variants mirror what the sender needs to classify: a rejected credential
/// is fatal for the whole run, everything else only affects one recipient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The server rejected the sender credential.
    #[error("authentication rejected: {0}")]
    Authentication(String),

    /// The server answered with a protocol-level error.
    #[error("{0}")]
    Protocol(String),

    /// The message could not be composed (bad address, header encoding).
    #[error("message composition failed: {0}")]
    Compose(String),

    /// The session could not be established (DNS, TCP, TLS handshake).
    #[error("connection failed: {0}")]
    Connection(String),
}
