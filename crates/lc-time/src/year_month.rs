//! `YearMonth` — the reference month of a calendar grid.

use std::str::FromStr;

use crate::date::{days_in_month, Date};
use lc_core::errors::{Error, Result};
use lc_core::utilities::data_parsers::parse_year_month;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A year/month pair.
///
/// Years are restricted to 1901–2198 so that the six-week window around any
/// month, padding included, stays inside the [`Date`] range.  Ordering is
/// chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: u16,
    month: u8,
}

impl YearMonth {
    /// Earliest supported month.
    pub const MIN: YearMonth = YearMonth::at(1901, 1);

    /// Latest supported month.
    pub const MAX: YearMonth = YearMonth::at(2198, 12);

    const fn at(year: u16, month: u8) -> Self {
        Self { year, month }
    }

    /// Create a year/month pair.
    pub fn new(year: u16, month: u8) -> Result<Self> {
        if !(Self::MIN.year..=Self::MAX.year).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN.year,
                Self::MAX.year
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn containing(date: Date) -> Result<Self> {
        let (y, m, _) = date.ymd();
        Self::new(y, m)
    }

    /// Return the year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Full English month name.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize - 1]
    }

    /// Number of days in this month (28–31).
    pub fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// First calendar day of the month.
    pub fn first_day(&self) -> Date {
        Date::from_ymd(self.year, self.month, 1).expect("YearMonth range is inside Date range")
    }

    /// Last calendar day of the month.
    pub fn last_day(&self) -> Date {
        self.first_day().end_of_month()
    }

    /// Return `true` if `date` falls in this month.
    pub fn contains(&self, date: Date) -> bool {
        let (y, m, _) = date.ymd();
        y == self.year && m == self.month
    }

    /// The following month, saturating at [`YearMonth::MAX`].
    pub fn next(&self) -> Self {
        match (self.year, self.month) {
            (y, 12) if y < Self::MAX.year => Self { year: y + 1, month: 1 },
            (_, 12) => *self,
            (y, m) => Self { year: y, month: m + 1 },
        }
    }

    /// The preceding month, saturating at [`YearMonth::MIN`].
    pub fn previous(&self) -> Self {
        match (self.year, self.month) {
            (y, 1) if y > Self::MIN.year => Self { year: y - 1, month: 12 },
            (_, 1) => *self,
            (y, m) => Self { year: y, month: m - 1 },
        }
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (y, m) = parse_year_month(s).ok_or_else(|| Error::Parse {
            what: "month",
            input: s.to_owned(),
        })?;
        YearMonth::new(y, m)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
