// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading with Figment.
//!
//! Lookup order: `./courier.toml` > `~/.config/courier/courier.toml` >
//! `/etc/courier/courier.toml`, with `COURIER_*` environment overrides on top.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::CourierConfig;

/// Top-level tables, used to map `COURIER_SMTP_SENDER` to `smtp.sender`.
const SECTIONS: &[&str] = &["smtp", "schedule", "source", "message", "log"];

/// System-wide config path.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/courier/courier.toml";

/// Local config file name, resolved against the working directory.
pub const LOCAL_CONFIG_FILE: &str = "courier.toml";

/// Per-user config path, if the platform has a config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("courier").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/courier/courier.toml`
/// 3. `~/.config/courier/courier.toml`
/// 4. `./courier.toml`
/// 5. `COURIER_*` environment variables
pub fn load_config() -> Result<CourierConfig, figment::Error> {
    build_figment().extract()
}

/// Load from a TOML string only. No files, no environment.
pub fn load_config_from_str(toml_content: &str) -> Result<CourierConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CourierConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load from one explicit file, still honoring env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<CourierConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CourierConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// The Figment behind [`load_config`], before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(CourierConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// `COURIER_*` provider with section-aware key mapping (see [`env_key`]).
fn env_provider() -> Env {
    Env::prefixed("COURIER_").map(|key| env_key(key.as_str()).into())
}

/// Map an env key (prefix already stripped) to a config path.
///
/// Splits only on the first underscore after a known section name, so
/// `SCHEDULE_SOURCE_ZONE` maps to `schedule.source_zone`. Keys arrive in the
/// case they were set in and are lowercased first.
pub fn env_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    SECTIONS
        .iter()
        .find_map(|section| {
            key.strip_prefix(section)
                .and_then(|rest| rest.strip_prefix('_'))
                .map(|rest| format!("{section}.{rest}"))
        })
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_keys_map_to_sections_case_insensitively() {
        assert_eq!(env_key("SCHEDULE_SOURCE_ZONE"), "schedule.source_zone");
        assert_eq!(env_key("SMTP_PASSWORD"), "smtp.password");
        assert_eq!(env_key("smtp_timeout_secs"), "smtp.timeout_secs");
        assert_eq!(env_key("Log_Level"), "log.level");
    }

    #[test]
    fn unknown_env_keys_pass_through_lowercased() {
        assert_eq!(env_key("SMTPX_HOST"), "smtpx_host");
        assert_eq!(env_key("VERBOSE"), "verbose");
    }

    #[test]
    fn uppercase_env_var_reaches_the_config() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("COURIER_SMTP_PASSWORD", "from-env");
            jail.set_env("COURIER_SCHEDULE_POLL_INTERVAL_SECS", "30");
            let config: CourierConfig = Figment::new()
                .merge(Serialized::defaults(CourierConfig::default()))
                .merge(env_provider())
                .extract()?;
            assert!(config.smtp.password.is_some());
            assert_eq!(config.schedule.poll_interval_secs, 30);
            Ok(())
        });
    }
}
