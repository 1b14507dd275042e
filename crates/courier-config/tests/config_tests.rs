// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Courier configuration system.

use std::io::Write;

use courier_config::diagnostic::ConfigError;
use courier_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};
use secrecy::ExposeSecret;
use serial_test::serial;

/// Valid TOML with every known field deserializes.
#[test]
fn full_toml_deserializes() {
    let toml = r#"
[smtp]
host = "smtp.example.com"
port = 2587
sender = "ops@example.com"
password = "app-password"
admin = "boss@example.com"
timeout_secs = 12

[schedule]
source_zone = "Asia/Kolkata"
poll_interval_secs = 5

[source]
path = "/tmp/recipients.csv"

[message]
signature = "The Ops Team"
report_subject = "Delivery problems"

[log]
level = "debug"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.smtp.host, "smtp.example.com");
    assert_eq!(config.smtp.port, 2587);
    assert_eq!(config.smtp.sender, "ops@example.com");
    assert_eq!(
        config.smtp.password.as_ref().map(|p| p.expose_secret().to_string()),
        Some("app-password".to_string())
    );
    assert_eq!(config.smtp.admin_address(), "boss@example.com");
    assert_eq!(config.smtp.timeout_secs, 12);
    assert_eq!(config.schedule.poll_interval_secs, 5);
    assert_eq!(config.source.path, "/tmp/recipients.csv");
    assert_eq!(config.message.signature, "The Ops Team");
    assert_eq!(config.message.report_subject, "Delivery problems");
    assert_eq!(config.log.level, "debug");
}

/// An empty document yields the compiled defaults.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_and_validate_str("").expect("defaults should validate");
    assert_eq!(config.smtp.host, "smtp.gmail.com");
    assert_eq!(config.smtp.port, 587);
    assert!(config.smtp.password.is_none());
    assert_eq!(config.schedule.source_zone, "Asia/Kolkata");
    assert_eq!(config.schedule.poll_interval_secs, 10);
    assert_eq!(config.source.path, "recipients.csv");
    assert_eq!(config.message.signature, "Your Company");
    assert_eq!(config.message.report_subject, "Email Sending Failure Report");
}

/// A misspelled key is rejected with a suggestion.
#[test]
fn unknown_key_suggests_correction() {
    let toml = r#"
[smtp]
sendr = "ops@example.com"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown key");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::UnknownKey { key, suggestion, .. }
            if key == "sendr" && suggestion.as_deref() == Some("sender")
    )));
}

/// Unknown top-level sections are rejected.
#[test]
fn unknown_section_is_rejected() {
    let toml = r#"
[telegram]
bot_token = "abc"
"#;
    assert!(load_config_from_str(toml).is_err());
}

/// A wrong value type is reported, not coerced.
#[test]
fn wrong_type_is_reported() {
    let toml = r#"
[smtp]
port = "five-eight-seven"
"#;
    let errors = load_and_validate_str(toml).expect_err("should reject string port");
    assert!(!errors.is_empty());
}

/// Semantic validation runs after a successful parse.
#[test]
fn invalid_zone_is_a_validation_error() {
    let toml = r#"
[schedule]
source_zone = "Asia/Atlantis"
"#;
    let errors = load_and_validate_str(toml).expect_err("zone should be rejected");
    assert!(errors.iter().any(
        |e| matches!(e, ConfigError::Validation { message } if message.contains("Asia/Atlantis"))
    ));
}

/// An explicit file is loaded and environment variables override it.
#[test]
#[serial]
fn explicit_file_with_env_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[smtp]\nsender = \"file@example.com\"\n\n[schedule]\nsource_zone = \"UTC\"\n"
    )
    .unwrap();

    // SAFETY: test-only env mutation, serialized by #[serial].
    unsafe {
        std::env::set_var("COURIER_SMTP_PASSWORD", "from-env");
        std::env::set_var("COURIER_SCHEDULE_SOURCE_ZONE", "Asia/Kolkata");
    }
    let result = load_and_validate_path(file.path());
    unsafe {
        std::env::remove_var("COURIER_SMTP_PASSWORD");
        std::env::remove_var("COURIER_SCHEDULE_SOURCE_ZONE");
    }

    let config = result.expect("file plus env should validate");
    assert_eq!(config.smtp.sender, "file@example.com");
    assert_eq!(
        config.smtp.password.as_ref().map(|p| p.expose_secret().to_string()),
        Some("from-env".to_string())
    );
    assert_eq!(config.schedule.source_zone, "Asia/Kolkata");
}
