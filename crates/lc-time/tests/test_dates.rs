//! Integration tests for `Date`, `YearMonth` and the evaluation-date setting.

use lc_core::ScopedEvaluationDate;
use lc_time::date::{days_in_month, is_leap_year};
use lc_time::{Date, Weekday, YearMonth};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn weekdays_cycle_over_consecutive_days() {
    let start = date(1999, 12, 26); // Sunday
    let mut d = start;
    let end = date(2031, 1, 1);
    let mut expected = 0u8;
    while d <= end {
        assert_eq!(d.weekday().sunday_index(), expected, "{d}");
        expected = (expected + 1) % 7;
        d += 1;
    }
}

#[test]
fn serial_is_continuous_across_month_and_year_ends() {
    let mut d = date(1900, 1, 1);
    let end = date(1905, 12, 31);
    while d < end {
        let next = d + 1;
        let (y, m, day) = d.ymd();
        let expected = if day < days_in_month(y, m) {
            (y, m, day + 1)
        } else if m < 12 {
            (y, m + 1, 1)
        } else {
            (y + 1, 1, 1)
        };
        assert_eq!(next.ymd(), expected, "after {d}");
        d = next;
    }
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
    assert_eq!(days_in_month(2100, 2), 28);
}

#[test]
fn today_honours_pinned_evaluation_date() {
    let pinned = date(2025, 6, 15);
    let _pin = ScopedEvaluationDate::new(pinned.serial());
    assert_eq!(Date::today().unwrap(), pinned);
}

#[test]
fn dates_serialise_as_iso_strings() {
    let d = date(2025, 6, 12);
    assert_eq!(serde_json::to_string(&d).unwrap(), "\"2025-06-12\"");
    let back: Date = serde_json::from_str("\"2025-06-12\"").unwrap();
    assert_eq!(back, d);
    for bad in ["\"2025-06-31\"", "\"2025-06-12T00:00:00Z\""] {
        assert!(serde_json::from_str::<Date>(bad).is_err(), "{bad}");
    }

    let ym: YearMonth = serde_json::from_str("\"2025-06\"").unwrap();
    assert_eq!(ym, YearMonth::new(2025, 6).unwrap());
    assert_eq!(serde_json::to_string(&ym).unwrap(), "\"2025-06\"");
}

#[test]
fn first_days_of_2025() {
    let cases = [(1, Weekday::Wednesday), (3, Weekday::Saturday)];
    for (m, wd) in cases {
        let first = YearMonth::new(2025, m).unwrap().first_day();
        assert_eq!(first.weekday(), wd);
    }
}

proptest! {
    #[test]
    fn iso_text_round_trips(y in 1900u16..=2199, m in 1u8..=12, d in 1u8..=31) {
        prop_assume!(d <= days_in_month(y, m));
        let date = Date::from_ymd(y, m, d).unwrap();
        let text = date.to_string();
        prop_assert_eq!(text.len(), 10);
        prop_assert_eq!(text.parse::<Date>().unwrap(), date);
    }

    #[test]
    fn month_navigation_is_inverse(y in 1902u16..=2197, m in 1u8..=12) {
        let ym = YearMonth::new(y, m).unwrap();
        prop_assert_eq!(ym.next().previous(), ym);
        prop_assert_eq!(ym.previous().next(), ym);
        prop_assert_eq!(ym.last_day() + 1, ym.next().first_day());
    }
}
