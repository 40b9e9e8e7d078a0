// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Timestamps and validity of a NOTAM.
//!
//! Timestamps are given either in the NOTAM format `YYMMDDHHMM` or as ISO
//! 8601 string by data sources that already converted them. All times are
//! UTC. The end of validity may be `PERM` for a permanent change or `UFN`
//! (until further notice), which both make the NOTAM permanent.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Values that mark a NOTAM as permanent.
const PERMANENT: [&str; 2] = ["PERM", "UFN"];

/// Values that are no timestamp at all.
const NO_TIMESTAMP: [&str; 3] = ["PERM", "UFN", "UNKNOWN"];

/// Suffix of an estimated end of validity, e.g. `2405312359EST`.
const ESTIMATED: &str = "EST";

/// Formats tried for ISO 8601 timestamps without offset.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Returns `true` if the raw value is `PERM` or `UFN`.
pub fn is_permanent(raw: Option<&str>) -> bool {
    raw.map(|s| s.trim().to_uppercase())
        .is_some_and(|s| PERMANENT.contains(&s.as_str()))
}

fn parse_iso(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|dt| Utc.from_utc_datetime(&dt))
}

fn parse_notam_format(s: &str) -> Option<DateTime<Utc>> {
    let field = |range: std::ops::Range<usize>| s.get(range)?.parse::<u32>().ok();

    let yy = field(0..2)? as i32;
    let year = if yy >= 70 { 1900 + yy } else { 2000 + yy };

    NaiveDate::from_ymd_opt(year, field(2..4)?, field(4..6)?)
        .and_then(|d| d.and_hms_opt(field(6..8)?, field(8..10)?, 0))
        .map(|dt| Utc.from_utc_datetime(&dt))
}

/// Parses a timestamp strictly.
///
/// # Errors
///
/// Returns an error if the string is a sentinel like `PERM`, isn't a valid
/// ISO 8601 timestamp, or isn't a valid `YYMMDDHHMM` timestamp. Two digit
/// years from 70 are in the 1900s, all others in the 2000s.
pub fn try_parse_timestamp(raw: &str) -> Result<DateTime<Utc>, Error> {
    let s = raw.trim();
    let invalid = || Error::InvalidTimestamp(raw.to_string());

    if NO_TIMESTAMP.contains(&s.to_uppercase().as_str()) {
        return Err(invalid());
    }

    if s.contains('-') || s.contains('T') {
        return parse_iso(s).ok_or_else(invalid);
    }

    if s.len() == 10 && s.bytes().all(|b| b.is_ascii_digit()) {
        return parse_notam_format(s).ok_or_else(invalid);
    }

    Err(invalid())
}

/// Parses a timestamp or returns `None` if it can't be parsed.
///
/// Check for a permanent NOTAM with [`is_permanent`] before treating `None`
/// as missing timestamp.
pub fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    try_parse_timestamp(raw)
        .inspect_err(|err| debug!("{err}"))
        .ok()
}

/// Status of a NOTAM relative to a reference time.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValidityStatus {
    Active,
    Expired,
    Scheduled,
    Permanent,
    /// The NOTAM has no usable start or end and refers to another NOTAM.
    Trigger,
}

impl fmt::Display for ValidityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Expired => write!(f, "Expired"),
            Self::Scheduled => write!(f, "Scheduled"),
            Self::Permanent => write!(f, "Permanent"),
            Self::Trigger => write!(f, "Trigger"),
        }
    }
}

/// Remaining days of a NOTAM.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DaysRemaining {
    Days(i64),
    Unbounded,
}

/// Validity of a NOTAM relative to a reference time.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Validity {
    pub status: ValidityStatus,

    /// Days until the start if scheduled, days until the end if active,
    /// zero if expired and unbounded if permanent. `None` for a trigger.
    pub days_remaining: Option<DaysRemaining>,

    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,

    /// Whether the end of validity is only estimated.
    pub estimated: bool,
}

/// Counts started days of 24 hours.
fn ceil_days(ms: i64) -> i64 {
    ms.div_euclid(DAY_MS) + i64::from(ms.rem_euclid(DAY_MS) != 0)
}

/// Computes the validity from the raw start and end at the `reference`.
///
/// If either value is permanent, the NOTAM is permanent regardless of any
/// date. Otherwise, the NOTAM is a trigger if a value can't be parsed.
pub fn compute_validity(
    start: Option<&str>,
    end: Option<&str>,
    reference: DateTime<Utc>,
) -> Validity {
    let (end, estimated) = match end.map(str::trim) {
        Some(end) => match end.strip_suffix(ESTIMATED) {
            Some(stripped) => (Some(stripped.trim_end()), true),
            None => (Some(end), false),
        },
        None => (None, false),
    };

    let start_time = parse_timestamp(start);
    let end_time = parse_timestamp(end);

    let validity = |status, days_remaining| Validity {
        status,
        days_remaining,
        start: start_time,
        end: end_time,
        estimated,
    };

    if is_permanent(start) || is_permanent(end) {
        return validity(ValidityStatus::Permanent, Some(DaysRemaining::Unbounded));
    }

    let (Some(start_time), Some(end_time)) = (start_time, end_time) else {
        return validity(ValidityStatus::Trigger, None);
    };

    if reference < start_time {
        let days = ceil_days((start_time - reference).num_milliseconds());
        validity(ValidityStatus::Scheduled, Some(DaysRemaining::Days(days)))
    } else if reference > end_time {
        validity(ValidityStatus::Expired, Some(DaysRemaining::Days(0)))
    } else {
        let days = ceil_days((end_time - reference).num_milliseconds());
        validity(ValidityStatus::Active, Some(DaysRemaining::Days(days)))
    }
}

fn sentinel_label(raw: &str) -> Option<&'static str> {
    match raw.trim().to_uppercase().as_str() {
        "PERM" => Some("Permanent"),
        "UFN" => Some("Until further notice"),
        "N/A" => Some("N/A"),
        _ => None,
    }
}

/// Formats the timestamp as `M/D HH:MM`.
///
/// Sentinels are spelled out and unparseable values are returned as is.
pub fn format_short(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "Unknown".to_string();
    };

    match (sentinel_label(raw), parse_timestamp(Some(raw))) {
        (Some(label), _) => label.to_string(),
        (None, Some(dt)) => dt.format("%-m/%-d %H:%M").to_string(),
        (None, None) => raw.to_string(),
    }
}

/// Formats the timestamp as `YYYY-MM-DD HH:MM`.
///
/// Sentinels are spelled out and unparseable values are returned as is.
pub fn format_long(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "N/A".to_string();
    };

    match (sentinel_label(raw), parse_timestamp(Some(raw))) {
        (Some(label), _) => label.to_string(),
        (None, Some(dt)) => dt.format("%Y-%m-%d %H:%M").to_string(),
        (None, None) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0)
            .single()
            .expect("date should be valid")
    }

    #[test]
    fn parses_notam_format() {
        assert_eq!(parse_timestamp(Some("2401010600")), Some(utc(2024, 1, 1, 6, 0)));
        assert_eq!(parse_timestamp(Some("6912312359")), Some(utc(2069, 12, 31, 23, 59)));
        assert_eq!(parse_timestamp(Some("7001010000")), Some(utc(1970, 1, 1, 0, 0)));
        assert_eq!(parse_timestamp(Some("9912312359")), Some(utc(1999, 12, 31, 23, 59)));
    }

    #[test]
    fn rejects_invalid_notam_format() {
        assert_eq!(parse_timestamp(Some("2413010600")), None);
        assert_eq!(parse_timestamp(Some("2402300600")), None);
        assert_eq!(parse_timestamp(Some("2401012500")), None);
        assert_eq!(parse_timestamp(Some("240101060")), None);
        assert_eq!(parse_timestamp(Some("24010106000")), None);
        assert_eq!(parse_timestamp(Some("2401O10600")), None);
    }

    #[test]
    fn parses_iso_format() {
        assert_eq!(
            parse_timestamp(Some("2024-01-01T06:00:00Z")),
            Some(utc(2024, 1, 1, 6, 0))
        );
        assert_eq!(
            parse_timestamp(Some("2024-01-01T15:00:00+09:00")),
            Some(utc(2024, 1, 1, 6, 0))
        );
        assert_eq!(
            parse_timestamp(Some("2024-01-01T06:00:00.000")),
            Some(utc(2024, 1, 1, 6, 0))
        );
        assert_eq!(parse_timestamp(Some("2024-01-01 06:00")), Some(utc(2024, 1, 1, 6, 0)));
        assert_eq!(parse_timestamp(Some("2024-01-01")), Some(utc(2024, 1, 1, 0, 0)));
        assert_eq!(parse_timestamp(Some("2024-13-01")), None);
        assert_eq!(parse_timestamp(Some("T-1")), None);
    }

    #[test]
    fn sentinels_are_no_timestamps() {
        assert_eq!(parse_timestamp(None), None);
        assert_eq!(parse_timestamp(Some("PERM")), None);
        assert_eq!(parse_timestamp(Some("UFN")), None);
        assert_eq!(parse_timestamp(Some("UNKNOWN")), None);
        assert_eq!(parse_timestamp(Some("")), None);
        assert_eq!(
            try_parse_timestamp("PERM"),
            Err(Error::InvalidTimestamp("PERM".to_string()))
        );
    }

    #[test]
    fn permanent_overrides_dates() {
        let v = compute_validity(Some("2401010600"), Some("PERM"), utc(2024, 6, 1, 0, 0));
        assert_eq!(v.status, ValidityStatus::Permanent);
        assert_eq!(v.days_remaining, Some(DaysRemaining::Unbounded));
        assert_eq!(v.start, Some(utc(2024, 1, 1, 6, 0)));

        let v = compute_validity(Some("UFN"), None, utc(2024, 6, 1, 0, 0));
        assert_eq!(v.status, ValidityStatus::Permanent);
    }

    #[test]
    fn missing_dates_are_a_trigger() {
        let v = compute_validity(None, None, utc(2024, 6, 1, 0, 0));
        assert_eq!(v.status, ValidityStatus::Trigger);
        assert_eq!(v.days_remaining, None);

        let v = compute_validity(Some("2401010600"), Some("garbage"), utc(2024, 6, 1, 0, 0));
        assert_eq!(v.status, ValidityStatus::Trigger);
    }

    #[test]
    fn scheduled_counts_days_until_start() {
        let v = compute_validity(
            Some("2401101200"),
            Some("2401201200"),
            utc(2024, 1, 8, 12, 0),
        );
        assert_eq!(v.status, ValidityStatus::Scheduled);
        assert_eq!(v.days_remaining, Some(DaysRemaining::Days(2)));

        // one minute more than two days is a started third day
        let v = compute_validity(
            Some("2401101201"),
            Some("2401201200"),
            utc(2024, 1, 8, 12, 0),
        );
        assert_eq!(v.days_remaining, Some(DaysRemaining::Days(3)));
    }

    #[test]
    fn active_counts_days_until_end() {
        let v = compute_validity(
            Some("2401010600"),
            Some("2401311800"),
            utc(2024, 1, 30, 18, 0),
        );
        assert_eq!(v.status, ValidityStatus::Active);
        assert_eq!(v.days_remaining, Some(DaysRemaining::Days(1)));

        let v = compute_validity(
            Some("2401010600"),
            Some("2401311800"),
            utc(2024, 1, 31, 18, 0),
        );
        assert_eq!(v.status, ValidityStatus::Active);
        assert_eq!(v.days_remaining, Some(DaysRemaining::Days(0)));
    }

    #[test]
    fn expired_has_no_days_left() {
        let v = compute_validity(
            Some("2401010600"),
            Some("2401311800"),
            utc(2024, 2, 1, 0, 0),
        );
        assert_eq!(v.status, ValidityStatus::Expired);
        assert_eq!(v.days_remaining, Some(DaysRemaining::Days(0)));
    }

    #[test]
    fn estimated_end() {
        let v = compute_validity(
            Some("2401010600"),
            Some("2401311800EST"),
            utc(2024, 1, 15, 0, 0),
        );
        assert_eq!(v.status, ValidityStatus::Active);
        assert!(v.estimated);
        assert_eq!(v.end, Some(utc(2024, 1, 31, 18, 0)));
    }

    #[test]
    fn formats_timestamps() {
        assert_eq!(format_short(Some("2401051430")), "1/5 14:30");
        assert_eq!(format_short(Some("PERM")), "Permanent");
        assert_eq!(format_short(Some("UFN")), "Until further notice");
        assert_eq!(format_short(Some("SOMETIME")), "SOMETIME");
        assert_eq!(format_short(None), "Unknown");

        assert_eq!(format_long(Some("2401051430")), "2024-01-05 14:30");
        assert_eq!(format_long(Some("N/A")), "N/A");
        assert_eq!(format_long(None), "N/A");
    }
}
