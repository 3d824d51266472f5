// SPDX-License-Identifier: AGPL-3.0-or-later

//! Solar → lunar conversion engine.
//!
//! The engine is table-driven: the Gregorian date of every lunar New Year
//! from 1900 to 2050 is tabulated, together with the position of the
//! intercalary month for leap years.  A date is converted by locating the
//! lunar year it belongs to, taking its day offset from that New Year on
//! the JDN axis, and walking forward month by month until the offset fits.
//!
//! Month lengths come from a documented **approximation**, not from lunar
//! ephemeris: months {2, 4, 6, 9, 11} default to 29 days, the rest to 30,
//! and the two months around a tabulated leap boundary are forced to 30.
//! The walk (including its leap-month quirks) is deliberately kept
//! bit-for-bit stable so that displayed dates never shift; the expected
//! error mode is an occasional off-by-one near leap-month boundaries.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use std::fmt;

use crate::civil::vietnam_civil_date;
use crate::error::Error;
use crate::jdn::JulianDay;
use crate::tables::{LEAP_MONTH_OFFSETS, LUNAR_NEW_YEAR, TABLE_FIRST_YEAR, TABLE_YEARS};

/// A Vietnamese lunisolar calendar date.
///
/// A plain value type: computed fresh on every conversion, never mutated.
///
/// `month` is nominally `1..=12`.  For a handful of historical years whose
/// tabulated leap offset disagrees with the year length implied by the New
/// Year table, the month walk runs one month past 12; that behaviour is
/// kept rather than masked (see module docs).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarDate {
    /// Day of the lunar month, `1..=30`.
    pub day: u32,
    /// Lunar month number.
    pub month: u32,
    /// Lunar year, named after the Gregorian year its New Year fell in.
    pub year: i32,
    /// Whether the date falls after the year's intercalary month boundary.
    pub is_leap_month: bool,
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)?;
        if self.is_leap_month {
            write!(f, " nhuận")?;
        }
        Ok(())
    }
}

/// JDN of the lunar New Year at `index` into the tables.
#[inline]
fn new_year_jdn(index: usize) -> JulianDay {
    let (year, month, day) = LUNAR_NEW_YEAR[index];
    JulianDay::from_gregorian(year, month, day)
}

/// Approximate length in days of lunar month `month` of the year at `index`.
///
/// Requires `index + 1 < TABLE_YEARS` (the next New Year bounds the year).
fn lunar_month_length(index: usize, month: u32) -> i64 {
    let days_in_year = new_year_jdn(index + 1) - new_year_jdn(index);
    let has_leap = days_in_year > 380;
    let offset = LEAP_MONTH_OFFSETS[index];

    // The leap month and the month after it straddle the insertion point;
    // both are forced long so the walk does not drift short across it.
    if has_leap && (offset == month || offset + 1 == month) {
        return 30;
    }
    if matches!(month, 2 | 4 | 6 | 9 | 11) {
        29
    } else {
        30
    }
}

/// Convert a Vietnam-local civil date to its lunar date.
///
/// This is the table walk itself, for callers that already hold a civil
/// date in the UTC+7 frame.  Instant-based callers should use
/// [`to_lunar_date`].
///
/// # Errors
///
/// [`Error::UnsupportedYear`] when the date resolves outside the tabulated
/// range (before 1900-01-31 or on/after the 2050 New Year).
pub fn to_lunar_date_civil(date: NaiveDate) -> Result<LunarDate, Error> {
    let jd = JulianDay::from_civil(date);
    let year = date.year();

    let mut index = year - TABLE_FIRST_YEAR;
    if index < 0 || index >= TABLE_YEARS as i32 {
        return Err(Error::UnsupportedYear { year });
    }
    // A date before its own year's New Year belongs to the previous lunar
    // year (January / early February).
    if jd < new_year_jdn(index as usize) {
        index -= 1;
        if index < 0 {
            return Err(Error::UnsupportedYear { year });
        }
    }
    let index = index as usize;
    // The month walk needs the next New Year to bound month lengths, so
    // the final tabulated year has no usable data past its first day.
    if index + 1 >= TABLE_YEARS {
        return Err(Error::UnsupportedYear { year });
    }

    let new_year = new_year_jdn(index);
    let days_in_year = new_year_jdn(index + 1) - new_year;
    let has_leap_month = days_in_year > 365;
    let leap_offset = LEAP_MONTH_OFFSETS[index];

    // 1-based ordinal day within the lunar year.
    let mut day = jd - new_year + 1;
    let mut month: u32 = 1;
    let mut is_leap_month = false;

    while day > lunar_month_length(index, month) {
        day -= lunar_month_length(index, month);
        month += 1;
        // Crossing into the slot where the intercalary month sits: if the
        // remaining offset clears it, consume it without giving it a month
        // number of its own; otherwise the date lies inside it and keeps
        // the preceding month's number.
        if has_leap_month && month == leap_offset + 1 && !is_leap_month {
            let leap_len = lunar_month_length(index, month);
            if day > leap_len {
                day -= leap_len;
                is_leap_month = true;
            } else {
                month -= 1;
            }
        }
    }

    Ok(LunarDate {
        day: day as u32,
        month,
        year: LUNAR_NEW_YEAR[index].0,
        is_leap_month,
    })
}

/// Convert a UTC instant to its Vietnamese lunar date.
///
/// The instant is first shifted into the fixed UTC+7 civil frame; the
/// resulting calendar date drives the conversion.
///
/// # Errors
///
/// [`Error::UnsupportedYear`] outside the tabulated range; no partial
/// result is produced.
///
/// # Examples
///
/// ```
/// use amlich::to_lunar_date;
/// use chrono::DateTime;
///
/// // 2024-02-10 in Vietnam — Tết Giáp Thìn.
/// let instant = DateTime::from_timestamp(1_707_523_200, 0).unwrap();
/// let lunar = to_lunar_date(instant).unwrap();
/// assert_eq!((lunar.day, lunar.month, lunar.year), (1, 1, 2024));
/// assert!(!lunar.is_leap_month);
/// ```
pub fn to_lunar_date(instant: DateTime<Utc>) -> Result<LunarDate, Error> {
    to_lunar_date_civil(vietnam_civil_date(instant))
}

/// Compact calendar-cell label for the lunar date of `instant`.
///
/// The first day of a lunar month is the salient cue in a month grid, so
/// it renders as `"1/{month}"`; every other day renders as the bare day
/// number.
///
/// # Errors
///
/// Propagates [`Error::UnsupportedYear`] from the conversion.
pub fn lunar_day_label(instant: DateTime<Utc>) -> Result<String, Error> {
    let lunar = to_lunar_date(instant)?;
    if lunar.day == 1 {
        Ok(format!("1/{}", lunar.month))
    } else {
        Ok(lunar.day.to_string())
    }
}
