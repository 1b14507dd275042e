// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Civil send times to absolute instants.

use chrono::{DateTime, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

/// Interprets wall-clock send times in one fixed source zone.
///
/// **DST handling** (irrelevant for the default `Asia/Kolkata`, which has no
/// transitions):
/// - Fall-back overlaps: the earliest mapping is chosen.
/// - Spring-forward gaps: the time is read with the offset in force just
///   before the gap, so it lands after the transition instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeResolver {
    zone: Tz,
}

impl TimeResolver {
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// The UTC instant `local` denotes in the source zone.
    pub fn resolve(&self, local: NaiveDateTime) -> DateTime<Utc> {
        match self.zone.from_local_datetime(&local) {
            LocalResult::Single(dt) => dt.with_timezone(&Utc),
            LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
            LocalResult::None => {
                // Gaps never exceed a day; the offset a day earlier predates it.
                let day_before = local - TimeDelta::days(1);
                let offset = self
                    .zone
                    .offset_from_utc_datetime(&day_before)
                    .fix()
                    .local_minus_utc();
                Utc.from_utc_datetime(&(local - TimeDelta::seconds(i64::from(offset))))
            }
        }
    }

    /// `instant` rendered back in the source zone, for logs.
    pub fn localize(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.zone)
    }
}

impl Default for TimeResolver {
    fn default() -> Self {
        Self::new(chrono_tz::Asia::Kolkata)
    }
}
