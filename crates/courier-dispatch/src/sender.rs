// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Composing and sending one recipient's email.

use std::sync::Arc;

use courier_core::{
    FailureReason, MailTransport, OutgoingMail, SendOutcome, TransportError, TransportReceipt,
};
use courier_schedule::ScheduledMessage;
use tracing::{error, info, warn};

/// Composes plain-text messages and hands them to the transport.
///
/// The sender address is fixed at construction; it is also the address the
/// transport authenticates as.
#[derive(Clone)]
pub struct MessageSender {
    transport: Arc<dyn MailTransport>,
    from: String,
    signature: String,
}

impl MessageSender {
    pub fn new(
        transport: Arc<dyn MailTransport>,
        from: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            from: from.into(),
            signature: signature.into(),
        }
    }

    pub fn from_address(&self) -> &str {
        &self.from
    }

    /// The message `msg` turns into.
    pub fn compose(&self, msg: &ScheduledMessage) -> OutgoingMail {
        OutgoingMail {
            from: self.from.clone(),
            to: msg.email().to_string(),
            subject: msg.subject().to_string(),
            body: format!(
                "Dear {},\n\n{}\n\nRegards,\n{}",
                msg.name(),
                msg.body(),
                self.signature
            ),
        }
    }

    /// Compose and transmit `msg`. One transmission, no retries.
    pub async fn send(&self, msg: &ScheduledMessage) -> SendOutcome {
        let mail = self.compose(msg);
        let outcome = self.deliver(&mail).await;
        match &outcome {
            SendOutcome::Sent => info!(
                recipient = msg.name(),
                group = msg.group(),
                email = msg.email(),
                "email sent"
            ),
            SendOutcome::Failed(FailureReason::Authentication) => error!(
                sender = %self.from,
                "authentication failed, check the sender address or app password"
            ),
            SendOutcome::Failed(reason) => warn!(
                recipient = msg.name(),
                email = msg.email(),
                %reason,
                "email not sent"
            ),
        }
        outcome
    }

    /// Transmit an already composed message and classify the result.
    pub async fn deliver(&self, mail: &OutgoingMail) -> SendOutcome {
        classify(self.transport.transmit(mail).await)
    }
}

/// Map a transport result onto a send outcome.
///
/// A call that returns without error but without a positive reply is not
/// treated as delivered.
pub fn classify(result: Result<TransportReceipt, TransportError>) -> SendOutcome {
    match result {
        Ok(receipt) if receipt.accepted => SendOutcome::Sent,
        Ok(_) => SendOutcome::Failed(FailureReason::Unknown),
        Err(TransportError::Authentication(_)) => {
            SendOutcome::Failed(FailureReason::Authentication)
        }
        Err(TransportError::Protocol(detail)) => {
            SendOutcome::Failed(FailureReason::Transport(detail))
        }
        Err(e @ (TransportError::Compose(_) | TransportError::Connection(_))) => {
            SendOutcome::Failed(FailureReason::Unexpected(e.to_string()))
        }
    }
}
