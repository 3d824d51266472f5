// SPDX-License-Identifier: AGPL-3.0-or-later

//! Vietnamese Lunisolar Calendar Core
//!
//! This crate converts proleptic Gregorian dates into Vietnamese lunisolar
//! dates (âm lịch) and derives the traditional astrological attributes of a
//! day: its sexagenary stem-branch pair (Can-Chi), its auspicious /
//! inauspicious two-hour windows (giờ Hoàng Đạo / Hắc Đạo), and a
//! representative set of good and bad star annotations.
//!
//! # Core types
//!
//! - [`JulianDay`] — integer Julian Day Number, the common time axis.
//! - [`LunarDate`] — lunar day / month / year plus leap-month flag.
//! - [`StemBranch`] — a day's (or year's) Can-Chi pair.
//! - [`HourRange`] — one of the twelve fixed two-hour windows of a day.
//! - [`DayAttributes`] — aggregated hour and star annotations for a day.
//!
//! # Operations
//!
//! | Function | Result |
//! |----------|--------|
//! | [`to_lunar_date`] | full lunar date for a UTC instant |
//! | [`to_lunar_date_civil`] | full lunar date for a Vietnam-local civil date |
//! | [`lunar_day_label`] | compact calendar-cell label (`"1/7"`, `"15"`, …) |
//! | [`day_stem_branch`] | Can-Chi pair of a Julian Day Number |
//! | [`day_stem_branch_label`] | header label (`"Ngày Canh Tý"`) |
//! | [`year_stem_branch`] | Can-Chi pair of a lunar year (`2024` → Giáp Thìn) |
//! | [`day_attributes`] | Hoàng Đạo hours, Hắc Đạo hours, and stars |
//!
//! # Time frame
//!
//! Every instant-based entry point first shifts the instant into the fixed
//! Vietnam civil frame (UTC+7) and works with the resulting calendar date.
//! There is no timezone ambiguity: the offset is a constant, not a tz rule.
//!
//! # Supported range
//!
//! Lunar conversion is table-driven and covers lunar years 1900–2049
//! (civil dates 1900-01-31 through 2050-01-22).  Dates outside the table
//! fail with [`Error::UnsupportedYear`]; no best-effort result is produced.
//! The stem-branch and hour/star operations are exact and total for any
//! proleptic Gregorian date.
//!
//! All lookup tables are compile-time constants; every public operation is
//! a pure function of its input date, safe to call concurrently without
//! coordination.

mod attributes;
mod can_chi;
mod civil;
mod error;
mod jdn;
mod lunar;
pub(crate) mod tables;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use attributes::{day_attributes, DayAttributes, HourRange, Star, ALL_HOURS};
pub use can_chi::{day_stem_branch, day_stem_branch_label, year_stem_branch, StemBranch};
pub use civil::{vietnam_civil_date, VIETNAM_UTC_OFFSET_HOURS};
pub use error::Error;
pub use jdn::JulianDay;
pub use lunar::{lunar_day_label, to_lunar_date, to_lunar_date_civil, LunarDate};
