// SPDX-License-Identifier: AGPL-3.0-or-later

//! Sexagenary stem-branch (Can-Chi) cycle.
//!
//! Days repeat on a 60-day cycle formed by pairing one of ten Heavenly
//! Stems (Can) with one of twelve Earthly Branches (Chi).  Both components
//! are pure residues of the Julian Day Number with fixed phase offsets:
//! `(jdn + 9) mod 10` selects the stem and `(jdn + 1) mod 12` the branch.
//! The name tables below are stored pre-rotated to match those offsets.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::civil::vietnam_civil_date;
use crate::jdn::JulianDay;

/// Heavenly Stem names, rotated so `(jdn + 9) mod 10` indexes directly.
pub(crate) static CAN: [&str; 10] = [
    "Canh", "Tân", "Nhâm", "Quý", "Giáp", "Ất", "Bính", "Đinh", "Mậu", "Kỷ",
];

/// Earthly Branch names, rotated so `(jdn + 1) mod 12` indexes directly.
pub(crate) static CHI: [&str; 12] = [
    "Thân", "Dậu", "Tuất", "Hợi", "Tý", "Sửu", "Dần", "Mão", "Thìn", "Tỵ", "Ngọ", "Mùi",
];

/// A stem-branch pair, e.g. `Giáp Thìn`.
///
/// Identifies a position in the 60-element sexagenary cycle.  Pure derived
/// value; both fields borrow from the static name tables.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StemBranch {
    pub stem: &'static str,
    pub branch: &'static str,
}

impl fmt::Display for StemBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.stem, self.branch)
    }
}

/// Index of a day's branch into [`CHI`].  Shared with the hour/star tables.
#[inline]
pub(crate) fn day_branch_index(jdn: JulianDay) -> usize {
    (jdn.value() + 1).rem_euclid(12) as usize
}

/// Stem-branch pair of the day identified by `jdn`.
///
/// Total and deterministic for any JDN, including pre-epoch values.
///
/// # Examples
///
/// ```
/// use amlich::{day_stem_branch, JulianDay};
///
/// // Tết Giáp Thìn (2024-02-10) fell on a Canh Tý day.
/// let sb = day_stem_branch(JulianDay::from_gregorian(2024, 2, 10));
/// assert_eq!(sb.to_string(), "Canh Tý");
/// ```
pub fn day_stem_branch(jdn: JulianDay) -> StemBranch {
    let stem = CAN[(jdn.value() + 9).rem_euclid(10) as usize];
    let branch = CHI[day_branch_index(jdn)];
    StemBranch { stem, branch }
}

/// Header label for the day of `instant`: `"Ngày {can} {chi}"`.
pub fn day_stem_branch_label(instant: DateTime<Utc>) -> String {
    let jdn = JulianDay::from_civil(vietnam_civil_date(instant));
    format!("Ngày {}", day_stem_branch(jdn))
}

/// Stem-branch pair of a lunar year.
///
/// Years run on the same 60-cycle as days; the phase is anchored so that
/// 1984 opens a cycle as Giáp Tý.
///
/// # Examples
///
/// ```
/// use amlich::year_stem_branch;
///
/// assert_eq!(year_stem_branch(2024).to_string(), "Giáp Thìn");
/// assert_eq!(year_stem_branch(2025).to_string(), "Ất Tỵ");
/// ```
pub fn year_stem_branch(year: i32) -> StemBranch {
    // With the rotated tables the year phase reduces to plain residues.
    let stem = CAN[year.rem_euclid(10) as usize];
    let branch = CHI[year.rem_euclid(12) as usize];
    StemBranch { stem, branch }
}
