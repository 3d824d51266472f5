// SPDX-License-Identifier: AGPL-3.0-or-later

use amlich::{
    day_attributes, day_stem_branch, day_stem_branch_label, lunar_day_label, to_lunar_date,
    to_lunar_date_civil, year_stem_branch, Error, JulianDay, ALL_HOURS,
};
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

fn civil(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn instant(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

/// Exhaustive sweep of every supported civil day.
///
/// The conversion must never fail inside the tabulated range, the lunar
/// day must stay in 1..=30, and from one civil day to the next the lunar
/// day either increments by one (with every other field unchanged) or
/// resets to 1 at a month boundary.  The month number is nominally 1..=12
/// but the legacy heuristic overruns to 13 in historical years whose
/// tabulated leap offset disagrees with the year length, so 13 is the hard
/// ceiling asserted here.
#[test]
fn exhaustive_sweep_of_the_supported_range() {
    let first = civil(1900, 1, 31);
    let last = civil(2050, 1, 22);

    let mut date = first;
    let mut prev = None;
    while date <= last {
        let lunar = to_lunar_date_civil(date)
            .unwrap_or_else(|e| panic!("{date} failed inside supported range: {e}"));

        assert!((1..=30).contains(&lunar.day), "{date} → {lunar}");
        assert!((1..=13).contains(&lunar.month), "{date} → {lunar}");

        if let Some(prev) = prev {
            step_is_coherent(&prev, &lunar, date);
        }
        prev = Some(lunar);
        date += TimeDelta::days(1);
    }
}

fn step_is_coherent(prev: &amlich::LunarDate, next: &amlich::LunarDate, date: NaiveDate) {
    if next.day == prev.day + 1 {
        // Plain increment: nothing else may move.
        assert_eq!(next.month, prev.month, "{date}: {prev} → {next}");
        assert_eq!(next.year, prev.year, "{date}: {prev} → {next}");
        assert_eq!(next.is_leap_month, prev.is_leap_month, "{date}: {prev} → {next}");
    } else {
        // Month boundary: the day resets and the month increments, wraps
        // to 1 at New Year, or (legacy leap-entry quirk) keeps its number
        // while entering the unlabelled leap month.
        assert_eq!(next.day, 1, "{date}: {prev} → {next}");
        assert!(
            next.month == prev.month + 1 || next.month == 1 || next.month == prev.month,
            "{date}: {prev} → {next}"
        );
    }
}

#[test]
fn the_supported_range_is_exactly_bounded() {
    assert!(to_lunar_date_civil(civil(1900, 1, 30)).is_err());
    assert!(to_lunar_date_civil(civil(1900, 1, 31)).is_ok());
    assert!(to_lunar_date_civil(civil(2050, 1, 22)).is_ok());
    assert!(to_lunar_date_civil(civil(2050, 1, 23)).is_err());

    assert_eq!(
        to_lunar_date_civil(civil(1850, 7, 4)),
        Err(Error::UnsupportedYear { year: 1850 })
    );
    assert_eq!(
        to_lunar_date_civil(civil(2100, 7, 4)),
        Err(Error::UnsupportedYear { year: 2100 })
    );
}

#[test]
fn tet_2024_scenario_end_to_end() {
    // 2024-02-10T00:00:00Z → 07:00 local on Tết Giáp Thìn.
    let tet = instant(1_707_523_200);

    let lunar = to_lunar_date(tet).unwrap();
    assert_eq!((lunar.day, lunar.month, lunar.year), (1, 1, 2024));
    assert!(!lunar.is_leap_month);
    assert_eq!(lunar_day_label(tet).unwrap(), "1/1");
    assert_eq!(day_stem_branch_label(tet), "Ngày Canh Tý");
    assert_eq!(year_stem_branch(lunar.year).to_string(), "Giáp Thìn");

    // One day earlier resolves into the tail of the previous lunar year.
    let eve = tet - TimeDelta::days(1);
    let lunar = to_lunar_date(eve).unwrap();
    assert_eq!(lunar.year, 2023);
    assert_eq!(lunar.month, 12);
    assert!(lunar.day >= 27, "expected late month 12, got {lunar}");
}

#[test]
fn stem_branch_cycles_over_the_whole_range() {
    let base = JulianDay::from_gregorian(1900, 1, 31);
    for offset in 0..(150 * 366) {
        let here = day_stem_branch(base + offset);
        assert_eq!(
            here,
            day_stem_branch(base + offset + 60),
            "sexagenary cycle broken at offset {offset}"
        );
    }
}

#[test]
fn attributes_partition_hours_for_every_day_of_a_cycle() {
    // 60 consecutive days exercise every stem-branch combination.
    let base = instant(1_707_523_200);
    for offset in 0..60 {
        let attrs = day_attributes(base + TimeDelta::days(offset));
        assert_eq!(attrs.good_hours.len(), 6);
        assert_eq!(attrs.bad_hours.len(), 6);
        for hour in &ALL_HOURS {
            let in_good = attrs.good_hours.contains(hour);
            let in_bad = attrs.bad_hours.contains(hour);
            assert!(in_good != in_bad, "{hour} must be in exactly one set");
        }
        assert!(!attrs.good_stars.is_empty());
        assert!(!attrs.bad_stars.is_empty());
    }
}

#[test]
fn opposite_branch_days_share_hour_tables() {
    // A Tý day and the Ngọ day six days later must carry identical hour
    // rows (the six-ray pairing), though their stars differ.
    let base = instant(1_707_523_200); // Canh Tý day
    let ty = day_attributes(base);
    let ngo = day_attributes(base + TimeDelta::days(6));
    assert_eq!(ty.stem_branch.branch, "Tý");
    assert_eq!(ngo.stem_branch.branch, "Ngọ");
    assert_eq!(ty.good_hours, ngo.good_hours);
    assert_eq!(ty.bad_hours, ngo.bad_hours);
    assert_ne!(ty.good_stars, ngo.good_stars);
}

#[test]
fn labels_across_a_month_boundary() {
    // Lunar month 1 of 2024 has 30 days: 2024-03-11 is 1/2.
    let first_of_second = instant(1_710_115_200); // 2024-03-11T00:00:00Z
    assert_eq!(lunar_day_label(first_of_second).unwrap(), "1/2");
    let day_before = first_of_second - TimeDelta::days(1);
    assert_eq!(lunar_day_label(day_before).unwrap(), "30");
}

#[cfg(feature = "serde")]
#[test]
fn serde_lunar_date_roundtrip() {
    let lunar = to_lunar_date_civil(civil(2024, 2, 10)).unwrap();
    let json = serde_json::to_string(&lunar).unwrap();
    assert!(json.contains("\"is_leap_month\":false"), "{json}");
    let back: amlich::LunarDate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, lunar);
}

#[cfg(feature = "serde")]
#[test]
fn serde_day_attributes_serialize() {
    let attrs = day_attributes(instant(1_707_523_200));
    let json = serde_json::to_string(&attrs).unwrap();
    assert!(json.contains("Canh"), "{json}");
    assert!(json.contains("Thiên Quý"), "{json}");
}
