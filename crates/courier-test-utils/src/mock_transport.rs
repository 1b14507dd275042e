// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock mail transport for deterministic testing.
//!
//! `MockTransport` implements `MailTransport` with scripted outcomes and
//! captures every message handed to it, including the ones it "fails".

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use courier_core::{MailTransport, OutgoingMail, TransportError, TransportReceipt};
use tokio::sync::Mutex;

type Outcome = Result<TransportReceipt, TransportError>;

/// A mail transport that never touches the network.
///
/// Outcome for each call, in priority order:
/// 1. a per-recipient outcome set with [`fail_recipient`](Self::fail_recipient)
/// 2. the next queued outcome from [`push_outcome`](Self::push_outcome)
/// 3. an accepted `250 OK`
#[derive(Clone, Default)]
pub struct MockTransport {
    queued: Arc<Mutex<VecDeque<Outcome>>>,
    by_recipient: Arc<Mutex<HashMap<String, Outcome>>>,
    attempts: Arc<Mutex<Vec<OutgoingMail>>>,
}

impl MockTransport {
    /// A transport that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome for the next unscripted call.
    pub async fn push_outcome(&self, outcome: Outcome) {
        self.queued.lock().await.push_back(outcome);
    }

    /// Every message to `recipient` gets `outcome`.
    pub async fn fail_recipient(&self, recipient: &str, outcome: Outcome) {
        self.by_recipient
            .lock()
            .await
            .insert(recipient.to_string(), outcome);
    }

    /// Every message passed to `transmit`, in call order.
    pub async fn attempts(&self) -> Vec<OutgoingMail> {
        self.attempts.lock().await.clone()
    }

    pub async fn attempt_count(&self) -> usize {
        self.attempts.lock().await.len()
    }

    /// Recipients of every attempt, in call order.
    pub async fn recipients(&self) -> Vec<String> {
        self.attempts
            .lock()
            .await
            .iter()
            .map(|m| m.to.clone())
            .collect()
    }
}

#[async_trait]
impl MailTransport for MockTransport {
    fn name(&self) -> &str {
        "mock-transport"
    }

    async fn transmit(&self, mail: &OutgoingMail) -> Result<TransportReceipt, TransportError> {
        self.attempts.lock().await.push(mail.clone());

        if let Some(outcome) = self.by_recipient.lock().await.get(&mail.to) {
            return outcome.clone();
        }
        match self.queued.lock().await.pop_front() {
            Some(outcome) => outcome,
            None => Ok(TransportReceipt::accepted("250 OK")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mail(to: &str) -> OutgoingMail {
        OutgoingMail {
            from: "ops@example.com".to_string(),
            to: to.to_string(),
            subject: "Hi".to_string(),
            body: "Body".to_string(),
        }
    }

    #[tokio::test]
    async fn accepts_by_default_and_captures() {
        let transport = MockTransport::new();
        let receipt = transport.transmit(&mail("a@example.com")).await.unwrap();
        assert!(receipt.accepted);
        assert_eq!(transport.recipients().await, vec!["a@example.com"]);
    }

    #[tokio::test]
    async fn recipient_script_beats_queue() {
        let transport = MockTransport::new();
        transport
            .push_outcome(Ok(TransportReceipt::rejected("451 later")))
            .await;
        transport
            .fail_recipient(
                "b@example.com",
                Err(TransportError::Protocol("550 no such user".into())),
            )
            .await;

        assert!(transport.transmit(&mail("b@example.com")).await.is_err());
        let queued = transport.transmit(&mail("a@example.com")).await.unwrap();
        assert!(!queued.accepted);
        let default = transport.transmit(&mail("a@example.com")).await.unwrap();
        assert!(default.accepted);
        assert_eq!(transport.attempt_count().await, 3);
    }
}
