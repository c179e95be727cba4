//! Blocked dates — weekends plus a supplied holiday list.
//!
//! Weekend membership is computed from the weekday on every query; only the
//! holidays are stored.  The set is rebuilt wholesale whenever the holiday
//! source changes.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::calendar::Calendar;
use crate::date::Date;
use serde::{Deserialize, Serialize};

/// One entry of the holiday source: `{ "date": "2025-01-01", "name": "Nouvel An" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The holiday's calendar date.
    pub date: Date,
    /// Display label; may be absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Holiday {
    /// Create a labelled holiday.
    pub fn new(date: Date, name: impl Into<String>) -> Self {
        Self {
            date,
            name: Some(name.into()),
        }
    }

    /// Create a holiday without a label.
    pub fn unnamed(date: Date) -> Self {
        Self { date, name: None }
    }
}

/// The set of dates on which leave may not start or end.
///
/// An empty set still blocks every Saturday and Sunday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockedDateSet {
    holidays: BTreeMap<Date, Option<String>>,
}

impl BlockedDateSet {
    /// A set blocking weekends only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set from a holiday list.
    ///
    /// Duplicate dates are merged; the first non-empty label wins.
    pub fn from_holidays<I>(holidays: I) -> Self
    where
        I: IntoIterator<Item = Holiday>,
    {
        let mut map: BTreeMap<Date, Option<String>> = BTreeMap::new();
        let mut merged = 0usize;
        for Holiday { date, name } in holidays {
            let name = name.filter(|n| !n.trim().is_empty());
            match map.entry(date) {
                Entry::Vacant(slot) => {
                    slot.insert(name);
                }
                Entry::Occupied(mut slot) => {
                    merged += 1;
                    if slot.get().is_none() {
                        slot.insert(name);
                    }
                }
            }
        }
        tracing::debug!(holidays = map.len(), merged, "rebuilt blocked date set");
        Self { holidays: map }
    }

    /// Return `true` if `date` is a weekend or a listed holiday.
    pub fn contains(&self, date: Date) -> bool {
        date.is_weekend() || self.holidays.contains_key(&date)
    }

    /// Holiday display name for `date`.
    ///
    /// `None` for plain weekends, ordinary days, and unnamed holidays.
    pub fn label_for(&self, date: Date) -> Option<&str> {
        self.holidays.get(&date).and_then(|name| name.as_deref())
    }

    /// Return `true` if `date` is in the holiday list (regardless of weekday).
    pub fn is_listed_holiday(&self, date: Date) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Iterate over the listed holidays in date order.
    pub fn holidays(&self) -> impl Iterator<Item = (Date, Option<&str>)> + '_ {
        self.holidays
            .iter()
            .map(|(date, name)| (*date, name.as_deref()))
    }

    /// Number of distinct listed holidays.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Return `true` if no holidays are listed (weekends are still blocked).
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

impl FromIterator<Holiday> for BlockedDateSet {
    fn from_iter<T: IntoIterator<Item = Holiday>>(iter: T) -> Self {
        Self::from_holidays(iter)
    }
}

impl Calendar for BlockedDateSet {
    fn name(&self) -> &str {
        "Weekends and holidays"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.contains(date)
    }

    fn holiday_label(&self, date: Date) -> Option<&str> {
        self.label_for(date)
    }
}
