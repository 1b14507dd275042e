// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `courier check` command implementation.
//!
//! Reads the sheet and validates every row exactly as `courier run` would,
//! then prints the resolved schedule. Nothing is waited for or sent, and no
//! SMTP credential is needed.

use std::fmt::Write as _;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use courier_config::CourierConfig;
use courier_core::{Clock, Column, CourierError, RawRecord, RecordSource, RejectionReason, SystemClock};
use courier_schedule::{RowValidator, TimeResolver};
use courier_sheet::CsvSource;

/// Result of checking one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedRow {
    pub row: usize,
    pub name: String,
    pub email: String,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Would be sent at `local` (source zone) / `utc`.
    Scheduled {
        local: String,
        utc: DateTime<Utc>,
        due: bool,
    },
    Rejected(RejectionReason),
}

/// Every row of the sheet, checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub source: String,
    pub rows: Vec<CheckedRow>,
}

impl CheckReport {
    pub fn all_valid(&self) -> bool {
        self.rows
            .iter()
            .all(|r| matches!(r.verdict, Verdict::Scheduled { .. }))
    }

    /// Human-readable table, one line per row plus a totals line.
    pub fn render(&self) -> String {
        let mut out = format!("{}\n", self.source);
        let mut scheduled = 0;
        for row in &self.rows {
            let status = match &row.verdict {
                Verdict::Scheduled { local, utc, due } => {
                    scheduled += 1;
                    let when = if *due { "due now" } else { "waits" };
                    format!("{local} ({} UTC, {when})", utc.format("%Y-%m-%d %H:%M:%S"))
                }
                Verdict::Rejected(reason) => format!("REJECTED: {reason}"),
            };
            let _ = writeln!(out, "  row {:>3}  {} <{}>  {status}", row.row, row.name, row.email);
        }
        let _ = writeln!(
            out,
            "{} rows, {scheduled} scheduled, {} rejected",
            self.rows.len(),
            self.rows.len() - scheduled
        );
        out
    }
}

/// Runs the `courier check` command.
pub async fn run_check(
    config: &CourierConfig,
    source: Option<PathBuf>,
) -> Result<CheckReport, CourierError> {
    let zone = config
        .schedule
        .zone()
        .map_err(|e| CourierError::Config(e.to_string()))?;
    let source = CsvSource::new(source.unwrap_or_else(|| PathBuf::from(&config.source.path)));
    let records = source.fetch().await?;

    let validator = RowValidator::new(TimeResolver::new(zone));
    Ok(CheckReport {
        source: source.describe(),
        rows: check_rows(&records, &validator, SystemClock.now()),
    })
}

/// Validate `records` against `now` without side effects.
pub fn check_rows(
    records: &[RawRecord],
    validator: &RowValidator,
    now: DateTime<Utc>,
) -> Vec<CheckedRow> {
    records
        .iter()
        .map(|raw| {
            let verdict = match validator.validate(raw) {
                Ok(msg) => Verdict::Scheduled {
                    local: validator
                        .resolver()
                        .localize(msg.send_at())
                        .format("%Y-%m-%d %H:%M:%S %Z")
                        .to_string(),
                    utc: msg.send_at(),
                    due: msg.send_at() <= now,
                },
                Err(reason) => Verdict::Rejected(reason),
            };
            CheckedRow {
                row: raw.row(),
                name: raw.get(Column::Name).trim().to_string(),
                email: raw.get(Column::Email).trim().to_string(),
                verdict,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use chrono::TimeZone;
    use courier_test_utils::recipient;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 3, 30, 0).unwrap()
    }

    #[test]
    fn classifies_rows_without_sending() {
        let records = vec![
            recipient(1, "Asha", "asha@example.com", "Mentors", "2025-06-01 08:00:00", "Hi"),
            recipient(2, "Ravi", "ravi@example.com", "Interns", "2025-06-01 10:00:00", "Hi"),
            recipient(3, "Meera", "meera@example.com", "", "2025-06-01 10:00:00", "Hi"),
        ];

        let rows = check_rows(&records, &RowValidator::default(), now());

        assert!(matches!(rows[0].verdict, Verdict::Scheduled { due: true, .. }));
        match &rows[1].verdict {
            Verdict::Scheduled { local, utc, due } => {
                assert_eq!(local, "2025-06-01 10:00:00 IST");
                assert_eq!(*utc, Utc.with_ymd_and_hms(2025, 6, 1, 4, 30, 0).unwrap());
                assert!(!due);
            }
            other => panic!("expected scheduled, got {other:?}"),
        }
        assert_eq!(
            rows[2].verdict,
            Verdict::Rejected(RejectionReason::MissingField(Column::Group))
        );
    }

    #[test]
    fn render_lists_rows_and_totals() {
        let report = CheckReport {
            source: "csv:recipients.csv".to_string(),
            rows: check_rows(
                &[
                    recipient(1, "Asha", "asha@example.com", "Mentors", "2025-06-01 08:00:00", "Hi"),
                    recipient(2, "Ravi", "ravi@example", "Interns", "2025-06-01 08:00:00", "Hi"),
                ],
                &RowValidator::default(),
                now(),
            ),
        };

        let text = report.render();
        assert!(text.starts_with("csv:recipients.csv\n"));
        assert!(text.contains("Asha <asha@example.com>  2025-06-01 08:00:00 IST (2025-06-01 02:30:00 UTC, due now)"));
        assert!(text.contains("REJECTED: Invalid email format"));
        assert!(text.ends_with("2 rows, 1 scheduled, 1 rejected\n"));
        assert!(!report.all_valid());
    }

    #[tokio::test]
    async fn reads_sheet_from_override_path() {
        let mut sheet = tempfile::NamedTempFile::new().unwrap();
        writeln!(sheet, "Name,Email,Group,Send Time (IST),Message").unwrap();
        writeln!(sheet, "Asha,asha@example.com,Mentors,2025-06-01 09:00:00,Hi").unwrap();

        let report = run_check(&CourierConfig::default(), Some(sheet.path().to_path_buf()))
            .await
            .unwrap();
        assert_eq!(report.rows.len(), 1);
        assert!(report.all_valid());
    }
}
