// SPDX-License-Identifier: AGPL-3.0-or-later

//! Integer Julian Day Number.
//!
//! [`JulianDay`] is the common normalised time axis shared by the lunar
//! conversion engine and the day-attribute calculator: one integer per
//! civil day, monotonic and one-to-one with the proleptic Gregorian
//! calendar.  The Gregorian→JDN formula is the standard astronomical one
//! and is exact for any date — it has no table dependency and therefore no
//! range restriction.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::ops::{Add, Sub};

/// A Julian Day Number: the integer count of days since the Julian epoch.
///
/// `JulianDay` identifies a whole civil day, not an instant; fractional
/// days never appear on this axis.
///
/// # Examples
///
/// ```
/// use amlich::JulianDay;
///
/// let jdn = JulianDay::from_gregorian(2000, 1, 1);
/// assert_eq!(jdn.value(), 2_451_545);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct JulianDay(i64);

impl JulianDay {
    /// Create from a raw day number.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The underlying day count.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// JDN of a proleptic Gregorian calendar date.
    ///
    /// Uses the standard astronomical formula (Fliegel & Van Flandern
    /// style, month-shifted so the year starts in March).  Divisions are
    /// Euclidean so the formula stays exact for pre-common-era years.
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Self {
        let a = (14 - month as i64).div_euclid(12);
        let y = year as i64 + 4800 - a;
        let m = month as i64 + 12 * a - 3;

        let jdn = day as i64
            + (153 * m + 2).div_euclid(5)
            + 365 * y
            + y.div_euclid(4)
            - y.div_euclid(100)
            + y.div_euclid(400)
            - 32_045;
        Self(jdn)
    }

    /// JDN of a `chrono` civil date.
    #[inline]
    pub fn from_civil(date: NaiveDate) -> Self {
        Self::from_gregorian(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for JulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JDN {}", self.0)
    }
}

impl Add<i64> for JulianDay {
    type Output = Self;
    #[inline]
    fn add(self, rhs: i64) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl Sub<i64> for JulianDay {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: i64) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl Sub for JulianDay {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}
