// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks the semantic constraints serde cannot express: address shape,
//! non-zero port and interval, a parseable time zone.

use courier_core::is_valid_email;

use crate::diagnostic::ConfigError;
use crate::model::CourierConfig;

/// Validate a deserialized configuration.
///
/// Collects every problem instead of stopping at the first one. Missing
/// credentials are not an error here; they are only required to send.
pub fn validate_config(config: &CourierConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.smtp.host.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "smtp.host must not be empty".to_string(),
        });
    }

    if config.smtp.port == 0 {
        errors.push(ConfigError::Validation {
            message: "smtp.port must be non-zero".to_string(),
        });
    }

    if config.smtp.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "smtp.timeout_secs must be at least 1".to_string(),
        });
    }

    let sender = config.smtp.sender.trim();
    if !sender.is_empty() && !is_valid_email(sender) {
        errors.push(ConfigError::Validation {
            message: format!("smtp.sender `{sender}` is not an email address"),
        });
    }

    if let Some(admin) = config.smtp.admin.as_deref().map(str::trim) {
        if !admin.is_empty() && !is_valid_email(admin) {
            errors.push(ConfigError::Validation {
                message: format!("smtp.admin `{admin}` is not an email address"),
            });
        }
    }

    if let Err(e) = config.schedule.zone() {
        errors.push(e);
    }

    if config.schedule.poll_interval_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "schedule.poll_interval_secs must be at least 1".to_string(),
        });
    }

    if config.source.path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "source.path must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
