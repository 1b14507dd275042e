// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SMTP submission transport for Courier.
//!
//! Wraps a lettre [`AsyncSmtpTransport`] that upgrades every connection with
//! STARTTLS and logs in as the configured sender. There is no connection pool:
//! each message opens one authenticated session and closes it afterwards.

use std::time::Duration;

use async_trait::async_trait;
use courier_config::model::SmtpConfig;
use courier_core::{CourierError, MailTransport, OutgoingMail, TransportError, TransportReceipt};
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::response::{Code, Response};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;
use tracing::debug;

/// Reply codes that always mean the server refused the login.
const AUTH_REJECTION_CODES: [&str; 2] = ["534", "535"];

/// `530` is shared with "Must issue a STARTTLS command first", so it only
/// counts as a login refusal with one of these enhanced statuses.
const AUTH_ENHANCED_STATUSES: [&str; 3] = ["5.7.8", "5.7.9", "5.7.11"];

/// Sends through an SMTP submission server.
pub struct SmtpTransport {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
}

impl SmtpTransport {
    /// Build a transport from the `[smtp]` section.
    ///
    /// No connection is opened here. Fails if the sender credential is
    /// missing or the host is not a valid TLS server name.
    pub fn from_config(config: &SmtpConfig) -> Result<Self, CourierError> {
        let (sender, password) = config
            .credentials()
            .map_err(|e| CourierError::Config(e.to_string()))?;
        let host = config.host.trim();

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(|e| CourierError::TransportSetup(format!("{host}: {e}")))?
            .port(config.port)
            .credentials(Credentials::new(
                sender.to_string(),
                password.expose_secret().to_string(),
            ))
            .timeout(Some(Duration::from_secs(config.timeout_secs)))
            .build();

        debug!(host, port = config.port, sender, "smtp transport configured");
        Ok(Self {
            mailer,
            host: host.to_string(),
        })
    }
}

#[async_trait]
impl MailTransport for SmtpTransport {
    fn name(&self) -> &str {
        &self.host
    }

    async fn transmit(&self, mail: &OutgoingMail) -> Result<TransportReceipt, TransportError> {
        let message = build_message(mail)?;
        match self.mailer.send(message).await {
            Ok(response) => Ok(receipt_from(&response)),
            Err(e) => Err(classify_error(&e)),
        }
    }
}

/// A plain-text lettre message for `mail`.
pub fn build_message(mail: &OutgoingMail) -> Result<Message, TransportError> {
    let from: Mailbox = mail
        .from
        .parse()
        .map_err(|e| TransportError::Compose(format!("sender `{}`: {e}", mail.from)))?;
    let to: Mailbox = mail
        .to
        .parse()
        .map_err(|e| TransportError::Compose(format!("recipient `{}`: {e}", mail.to)))?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(mail.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(mail.body.clone())
        .map_err(|e| TransportError::Compose(e.to_string()))
}

/// Turn the final server reply into a receipt.
pub fn receipt_from(response: &Response) -> TransportReceipt {
    let detail = reply_text(response);
    if response.is_positive() {
        TransportReceipt::accepted(detail)
    } else {
        TransportReceipt::rejected(detail)
    }
}

fn reply_text(response: &Response) -> String {
    let lines: Vec<&str> = response.message().collect();
    format!("{} {}", response.code(), lines.join(" "))
        .trim_end()
        .to_string()
}

/// Whether a reply with `code` and text `detail` refuses the login.
pub fn is_auth_rejection(code: Option<Code>, detail: &str) -> bool {
    let Some(code) = code else {
        return false;
    };
    match code.to_string().as_str() {
        c if AUTH_REJECTION_CODES.contains(&c) => true,
        "530" => detail
            .split_whitespace()
            .any(|word| AUTH_ENHANCED_STATUSES.contains(&word)),
        _ => false,
    }
}

fn classify_error(err: &lettre::transport::smtp::Error) -> TransportError {
    let detail = err.to_string();
    if is_auth_rejection(err.status(), &detail) {
        TransportError::Authentication(detail)
    } else if err.is_permanent() || err.is_transient() || err.is_response() {
        TransportError::Protocol(detail)
    } else {
        TransportError::Connection(detail)
    }
}
