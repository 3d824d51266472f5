// SPDX-License-Identifier: AGPL-3.0-or-later

//! Fixed Vietnam civil time frame (UTC+7).
//!
//! Lunar calendar boundaries are defined against local midnight in Vietnam,
//! so every instant-based operation in this crate first shifts the instant
//! by the constant offset and then reads calendar fields from the shifted
//! value.  A constant offset (rather than a tz database rule) is deliberate:
//! the lunar New Year tables were built against UTC+7 and must not move
//! with historical zone changes.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

/// Fixed offset of the Vietnam civil frame from UTC, in hours.
pub const VIETNAM_UTC_OFFSET_HOURS: i64 = 7;

/// Civil calendar date of `instant` in the Vietnam frame.
///
/// # Examples
///
/// ```
/// use amlich::vietnam_civil_date;
/// use chrono::{DateTime, NaiveDate};
///
/// // 18:00 UTC is already the next day in Hanoi.
/// let instant = DateTime::from_timestamp(1_707_501_600, 0).unwrap(); // 2024-02-09T18:00:00Z
/// assert_eq!(
///     vietnam_civil_date(instant),
///     NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
/// );
/// ```
#[inline]
pub fn vietnam_civil_date(instant: DateTime<Utc>) -> NaiveDate {
    (instant + TimeDelta::hours(VIETNAM_UTC_OFFSET_HOURS)).date_naive()
}
