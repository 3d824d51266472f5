// SPDX-License-Identifier: AGPL-3.0-or-later

//! Day attributes: Hoàng Đạo / Hắc Đạo hours and star annotations.
//!
//! The civil day divides into twelve fixed two-hour windows, each named
//! after an Earthly Branch (the Tý window spans 23:00–01:00).  For a given
//! day, six of the twelve are auspicious (giờ Hoàng Đạo) and the other six
//! inauspicious (giờ Hắc Đạo), selected by the day's branch.  Opposite
//! branch pairs — {Tý, Ngọ}, {Sửu, Mùi}, {Dần, Thân}, {Mão, Dậu},
//! {Thìn, Tuất}, {Tỵ, Hợi} — share identical hour rows; this six-ray
//! pairing is intentional domain structure, not redundancy.
//!
//! The star tables are a representative simplification of the traditional
//! system: one or two named stars per branch with a short meaning.  A full
//! star calendar is far more intricate; this set is what the day-detail
//! view presents.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::can_chi::{day_branch_index, day_stem_branch, StemBranch};
use crate::civil::vietnam_civil_date;
use crate::jdn::JulianDay;

/// One of the twelve fixed two-hour windows of a civil day.
///
/// `start`/`end` are wall-clock hours; the Tý window wraps midnight
/// (23–1).  Renders as the traditional `"Tý (23-1)"` form.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HourRange {
    /// Branch naming the window.
    pub branch: &'static str,
    /// Starting wall-clock hour (inclusive).
    pub start: u8,
    /// Ending wall-clock hour (exclusive).
    pub end: u8,
}

impl fmt::Display for HourRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-{})", self.branch, self.start, self.end)
    }
}

/// A named star with its traditional meaning.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Star {
    pub name: &'static str,
    pub meaning: &'static str,
}

/// Astrological attributes of one civil day.
///
/// Derived aggregate: computed per date from static tables, never cached
/// or mutated.  `good_hours` and `bad_hours` partition [`ALL_HOURS`] and
/// both preserve the canonical window order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DayAttributes {
    /// The day's Can-Chi pair.
    pub stem_branch: StemBranch,
    /// The six auspicious (Hoàng Đạo) windows, in canonical order.
    pub good_hours: Vec<HourRange>,
    /// The six inauspicious (Hắc Đạo) windows, in canonical order.
    pub bad_hours: Vec<HourRange>,
    /// Good stars shining on the day's branch.
    pub good_stars: &'static [Star],
    /// Bad stars afflicting the day's branch.
    pub bad_stars: &'static [Star],
}

/// The canonical sequence of the twelve two-hour windows, Tý through Hợi.
#[rustfmt::skip]
pub static ALL_HOURS: [HourRange; 12] = [
    HourRange { branch: "Tý", start: 23, end: 1 },
    HourRange { branch: "Sửu", start: 1, end: 3 },
    HourRange { branch: "Dần", start: 3, end: 5 },
    HourRange { branch: "Mão", start: 5, end: 7 },
    HourRange { branch: "Thìn", start: 7, end: 9 },
    HourRange { branch: "Tỵ", start: 9, end: 11 },
    HourRange { branch: "Ngọ", start: 11, end: 13 },
    HourRange { branch: "Mùi", start: 13, end: 15 },
    HourRange { branch: "Thân", start: 15, end: 17 },
    HourRange { branch: "Dậu", start: 17, end: 19 },
    HourRange { branch: "Tuất", start: 19, end: 21 },
    HourRange { branch: "Hợi", start: 21, end: 23 },
];

/// Auspicious-hour selectors per day branch, as indices into [`ALL_HOURS`].
///
/// Rows follow the rotated branch order of `can_chi::CHI`, so a day's
/// branch index selects its row directly.  Opposite branch pairs repeat
/// the same row by construction.
#[rustfmt::skip]
static GOOD_HOUR_INDICES: [[usize; 6]; 12] = [
    [0, 1, 4, 5, 7, 10],  // Thân
    [0, 2, 3, 6, 7, 9],   // Dậu
    [2, 4, 5, 8, 9, 11],  // Tuất
    [1, 4, 6, 7, 10, 11], // Hợi
    [0, 1, 3, 6, 8, 9],   // Tý
    [2, 3, 5, 8, 10, 11], // Sửu
    [0, 1, 4, 5, 7, 10],  // Dần
    [0, 2, 3, 6, 7, 9],   // Mão
    [2, 4, 5, 8, 9, 11],  // Thìn
    [1, 4, 6, 7, 10, 11], // Tỵ
    [0, 1, 3, 6, 8, 9],   // Ngọ
    [2, 3, 5, 8, 10, 11], // Mùi
];

/// Good stars per day branch, rows in the rotated branch order of
/// `can_chi::CHI`.
#[rustfmt::skip]
static GOOD_STARS: [&[Star]; 12] = [
    &[Star { name: "Thanh Long", meaning: "May mắn, thành công" }],
    &[Star { name: "Lộc Khố", meaning: "Tốt cho tài lộc, của cải" }],
    &[Star { name: "Thiên Giải", meaning: "Hóa giải tai ương" }],
    &[Star { name: "Nguyệt Đức", meaning: "Được quý nhân giúp đỡ" }],
    &[
        Star { name: "Thiên Quý", meaning: "May mắn, quý nhân phù trợ" },
        Star { name: "Thiên Hỷ", meaning: "Tin vui, hỷ sự" },
    ],
    &[Star { name: "Thiên Quan", meaning: "Tốt cho công danh, thi cử" }],
    &[
        Star { name: "Phúc Sinh", meaning: "Có phúc, may mắn" },
        Star { name: "Giải Thần", meaning: "Hóa giải hung hiểm" },
    ],
    &[Star { name: "Nguyệt Tài", meaning: "Tốt cho cầu tài, kinh doanh" }],
    &[Star { name: "Thiên Y", meaning: "Tốt cho chữa bệnh, sức khỏe" }],
    &[Star { name: "Dịch Mã", meaning: "Tốt cho di chuyển, xuất hành" }],
    &[
        Star { name: "Thiên Đức", meaning: "Được trời đất che chở" },
        Star { name: "Phúc Đức", meaning: "Gặp nhiều may mắn" },
    ],
    &[Star { name: "Nguyệt Ân", meaning: "Phúc lộc, được giúp đỡ" }],
];

/// Bad stars per day branch, rows in the rotated branch order of
/// `can_chi::CHI`.
#[rustfmt::skip]
static BAD_STARS: [&[Star]; 12] = [
    &[Star { name: "Bạch Hổ", meaning: "Đề phòng tai nạn, bệnh tật" }],
    &[Star { name: "Thiên Hỏa", meaning: "Đề phòng hỏa hoạn" }],
    &[Star { name: "Thổ Phủ", meaning: "Không tốt cho xây dựng, động thổ" }],
    &[Star { name: "Vãng Vong", meaning: "Dễ mất mát, thất lạc" }],
    &[
        Star { name: "Thiên Lại", meaning: "Dễ vướng vào pháp luật" },
        Star { name: "Đại Hao", meaning: "Tốn tiền, hao của" },
    ],
    &[Star { name: "Tiểu Hao", meaning: "Hao tài nhỏ" }],
    &[
        Star { name: "Kiếp Sát", meaning: "Gặp chuyện không may" },
        Star { name: "Câu Trận", meaning: "Gặp trở ngại, rắc rối" },
    ],
    &[Star { name: "Thụ Tử", meaning: "Mọi việc đều xấu, tránh làm" }],
    &[Star { name: "Hoang Vu", meaning: "Công việc không thuận lợi" }],
    &[Star { name: "Cô Thần", meaning: "Cảm thấy cô đơn, bất lợi" }],
    &[Star { name: "Thiên Cương", meaning: "Dễ gặp tranh chấp, mâu thuẫn" }],
    &[Star { name: "Quả Tú", meaning: "Bất lợi cho tình duyên" }],
];

/// Hoàng Đạo windows for a day branch, in canonical hour order.
pub(crate) fn good_hours_for_branch(branch_index: usize) -> Vec<HourRange> {
    GOOD_HOUR_INDICES[branch_index]
        .iter()
        .map(|&i| ALL_HOURS[i])
        .collect()
}

/// Hắc Đạo windows: the ordered complement of the Hoàng Đạo set.
pub(crate) fn bad_hours_for_branch(branch_index: usize) -> Vec<HourRange> {
    let good = &GOOD_HOUR_INDICES[branch_index];
    ALL_HOURS
        .iter()
        .enumerate()
        .filter(|(i, _)| !good.contains(i))
        .map(|(_, &hour)| hour)
        .collect()
}

/// Full astrological attribute set for the day of `instant`.
///
/// Pure, total, and idempotent: the same instant always yields the same
/// attributes, and nothing is retained between calls.
///
/// # Examples
///
/// ```
/// use amlich::day_attributes;
/// use chrono::DateTime;
///
/// // Tết 2024, a Canh Tý day.
/// let instant = DateTime::from_timestamp(1_707_523_200, 0).unwrap();
/// let attrs = day_attributes(instant);
/// assert_eq!(attrs.stem_branch.branch, "Tý");
/// assert_eq!(attrs.good_hours.len() + attrs.bad_hours.len(), 12);
/// ```
pub fn day_attributes(instant: DateTime<Utc>) -> DayAttributes {
    let jdn = JulianDay::from_civil(vietnam_civil_date(instant));
    let branch_index = day_branch_index(jdn);

    DayAttributes {
        stem_branch: day_stem_branch(jdn),
        good_hours: good_hours_for_branch(branch_index),
        bad_hours: bad_hours_for_branch(branch_index),
        good_stars: GOOD_STARS[branch_index],
        bad_stars: BAD_STARS[branch_index],
    }
}
