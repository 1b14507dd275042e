// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outbound mail transport.

use async_trait::async_trait;

use crate::error::TransportError;
use crate::types::{OutgoingMail, TransportReceipt};

/// Delivers one composed message per call.
///
/// Each call owns a whole session: connect, upgrade to TLS, authenticate,
/// transmit, close. No session outlives a call.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Short identifier of the transport, for logs.
    fn name(&self) -> &str;

    /// Transmit `mail` to its recipient.
    async fn transmit(&self, mail: &OutgoingMail) -> Result<TransportReceipt, TransportError>;
}
