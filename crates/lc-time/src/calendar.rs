//! `Calendar` trait and the weekend-only calendar.
//!
//! A calendar decides which dates are open for leave to start or end on
//! (business days) and which are blocked (weekends and holidays).

use crate::date::Date;

/// How a single date is classified for display and selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DayKind {
    /// An ordinary working day.
    Workday,
    /// Saturday or Sunday.
    Weekend,
    /// A holiday on a weekday, with its display label when one was supplied.
    Holiday {
        /// Holiday name, e.g. `"Nouvel An"`.
        label: Option<String>,
    },
}

impl DayKind {
    /// Return `true` for weekends and holidays.
    pub fn is_blocked(&self) -> bool {
        !matches!(self, DayKind::Workday)
    }
}

/// A working-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` is a weekend according to this calendar.
    fn is_weekend(&self, date: Date) -> bool {
        date.is_weekend()
    }

    /// Display label of the holiday on `date`, if any.
    fn holiday_label(&self, _date: Date) -> Option<&str> {
        None
    }

    /// Classify `date`.  Weekends win over holidays falling on a weekend.
    fn classify(&self, date: Date) -> DayKind {
        if self.is_weekend(date) {
            DayKind::Weekend
        } else if self.is_holiday(date) {
            DayKind::Holiday {
                label: self.holiday_label(date).map(str::to_owned),
            }
        } else {
            DayKind::Workday
        }
    }

    /// Count the business days in the inclusive range `[start, end]`.
    ///
    /// Returns 0 when `end < start`.
    fn business_days_between(&self, start: Date, end: Date) -> u32 {
        let mut count = 0;
        let mut d = start;
        while d <= end {
            if self.is_business_day(d) {
                count += 1;
            }
            if d == end {
                break;
            }
            d += 1;
        }
        count
    }
}

/// A calendar that treats only Saturdays and Sundays as non-business days,
/// with no additional holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn weekends_only_saturday() {
        let cal = WeekendsOnly;
        // 2025-06-14 is a Saturday
        let sat = date(2025, 6, 14);
        assert!(!cal.is_business_day(sat));
        assert_eq!(cal.classify(sat), DayKind::Weekend);
        let mon = date(2025, 6, 16);
        assert!(cal.is_business_day(mon));
        assert_eq!(cal.classify(mon), DayKind::Workday);
    }

    #[test]
    fn business_days_between_is_inclusive() {
        let count = |start, end| WeekendsOnly.business_days_between(start, end);
        // Monday through Friday
        assert_eq!(count(date(2025, 6, 9), date(2025, 6, 13)), 5);
        // Friday through Monday spans a weekend
        assert_eq!(count(date(2025, 6, 13), date(2025, 6, 16)), 2);
        // single day
        assert_eq!(count(date(2025, 6, 14), date(2025, 6, 14)), 0);
        // inverted
        assert_eq!(count(date(2025, 6, 16), date(2025, 6, 9)), 0);
    }

    #[test]
    fn business_days_between_stops_at_max() {
        let cal = WeekendsOnly;
        // 2199-12-31 is a Tuesday; the loop must not step past Date::MAX.
        assert_eq!(cal.business_days_between(Date::MAX, Date::MAX), 1);
    }
}
