// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Courier dispatch pipeline.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::diagnostic::ConfigError;

/// Top-level Courier configuration.
///
/// Every section is optional and defaults to sensible values. The sender
/// credential has no default and must come from a file or the environment.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CourierConfig {
    /// SMTP submission settings and credentials.
    #[serde(default)]
    pub smtp: SmtpConfig,

    /// Scheduling settings (source zone, wait interval).
    #[serde(default)]
    pub schedule: ScheduleConfig,

    /// Recipient source settings.
    #[serde(default)]
    pub source: SourceConfig,

    /// Message composition settings.
    #[serde(default)]
    pub message: MessageConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// SMTP submission configuration.
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SmtpConfig {
    /// Submission server hostname.
    #[serde(default = "default_smtp_host")]
    pub host: String,

    /// Submission port. STARTTLS is always required.
    #[serde(default = "default_smtp_port")]
    pub port: u16,

    /// Sender address; also the login user.
    #[serde(default)]
    pub sender: String,

    /// Sender secret (app password). Never serialized.
    #[serde(default, skip_serializing)]
    pub password: Option<SecretString>,

    /// Administrator address for the failure report. Defaults to `sender`.
    #[serde(default)]
    pub admin: Option<String>,

    /// Per-command network timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            sender: String::new(),
            password: None,
            admin: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SmtpConfig {
    /// The address failure reports go to.
    pub fn admin_address(&self) -> &str {
        self.admin
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(self.sender.trim())
    }

    /// Sender address and secret, required before anything can be sent.
    pub fn credentials(&self) -> Result<(&str, &SecretString), ConfigError> {
        let sender = self.sender.trim();
        if sender.is_empty() {
            return Err(ConfigError::MissingKey {
                key: "smtp.sender".to_string(),
            });
        }
        let password = self.password.as_ref().ok_or_else(|| ConfigError::MissingKey {
            key: "smtp.password".to_string(),
        })?;
        Ok((sender, password))
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_timeout_secs() -> u64 {
    30
}

/// Scheduling configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleConfig {
    /// IANA zone the send-time column is written in.
    #[serde(default = "default_source_zone")]
    pub source_zone: String,

    /// Seconds between "now" checks while waiting for a send time.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            source_zone: default_source_zone(),
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

impl ScheduleConfig {
    /// Parse the configured source zone.
    pub fn zone(&self) -> Result<chrono_tz::Tz, ConfigError> {
        self.source_zone
            .trim()
            .parse::<chrono_tz::Tz>()
            .map_err(|_| ConfigError::Validation {
                message: format!(
                    "schedule.source_zone `{}` is not a known IANA time zone",
                    self.source_zone
                ),
            })
    }

    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.poll_interval_secs)
    }
}

fn default_source_zone() -> String {
    "Asia/Kolkata".to_string()
}

fn default_poll_interval_secs() -> u64 {
    10
}

/// Recipient source configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Path to the CSV export of the recipient sheet.
    #[serde(default = "default_source_path")]
    pub path: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: default_source_path(),
        }
    }
}

fn default_source_path() -> String {
    "recipients.csv".to_string()
}

/// Message composition configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MessageConfig {
    /// Closing line after "Regards,".
    #[serde(default = "default_signature")]
    pub signature: String,

    /// Subject of the administrator failure report.
    #[serde(default = "default_report_subject")]
    pub report_subject: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            signature: default_signature(),
            report_subject: default_report_subject(),
        }
    }
}

fn default_signature() -> String {
    "Your Company".to_string()
}

fn default_report_subject() -> String {
    "Email Sending Failure Report".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
