// SPDX-License-Identifier: AGPL-3.0-or-later

//! Crate error type.

/// Errors reported by the lunar conversion engine.
///
/// Conversion is table-driven, so it can only fail when the input date
/// resolves outside the tabulated lunar years.  Failures are deterministic:
/// the same input always produces the same error, so retrying is pointless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The date falls outside the lunar New Year table (1900–2050).
    ///
    /// `year` is the Gregorian year of the date in the Vietnam civil frame.
    #[error("year {year} is outside the supported lunar calendar range (1900-2050)")]
    UnsupportedYear { year: i32 },
}
