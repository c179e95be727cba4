//! Property and scenario tests for the month grid.

use lc_leave::grid::{CELLS_PER_GRID, DAYS_PER_WEEK};
use lc_leave::{CalendarGrid, LeaveInterval, LeaveStatus};
use lc_time::{Date, Weekday, YearMonth};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// (row, column) of `date` in `grid`.
fn position(grid: &CalendarGrid, date: Date) -> Option<(usize, usize)> {
    for (row, week) in grid.weeks().iter().enumerate() {
        if let Some(column) = week.iter().position(|cell| cell.date == date) {
            return Some((row, column));
        }
    }
    None
}

fn june() -> YearMonth {
    YearMonth::new(2025, 6).unwrap()
}

#[test]
fn june_2025_single_request() {
    let (start, end) = (date(2025, 6, 10), date(2025, 6, 12));
    let leave = LeaveInterval::new("a0X1", start, end, LeaveStatus::Pending)
        .unwrap()
        .with_type("Vacation");
    let requests = [leave.clone()];
    let grid = CalendarGrid::build(june(), date(2025, 6, 2), &requests);

    assert_eq!(position(&grid, date(2025, 6, 1)), Some((0, 0)));
    let twelfth = grid.cell(date(2025, 6, 12)).unwrap();
    assert_eq!(twelfth.overlapping, vec![leave]);
    assert!(grid.cell(date(2025, 6, 13)).unwrap().overlapping.is_empty());
    assert!(grid.cell(date(2025, 6, 2)).unwrap().is_today);
    let covered: Vec<u8> = grid
        .cells()
        .filter(|cell| cell.has_leave())
        .map(|cell| cell.day())
        .collect();
    assert_eq!(covered, [10, 11, 12]);
}

#[test]
fn overlapping_keeps_input_order() {
    let day = date(2025, 6, 11);
    let (start, end) = (date(2025, 6, 9), date(2025, 6, 20));
    let requests = [
        LeaveInterval::new("b", day, day, LeaveStatus::Rejected).unwrap(),
        LeaveInterval::new("a", start, end, LeaveStatus::Approved).unwrap(),
    ];
    let grid = CalendarGrid::build(june(), day, &requests);
    let ids: Vec<&str> = grid
        .cell(day)
        .unwrap()
        .overlapping
        .iter()
        .map(|r| r.id().as_str())
        .collect();
    assert_eq!(ids, ["b", "a"]);
}

fn any_month() -> impl Strategy<Value = YearMonth> {
    (1901u16..=2198, 1u8..=12).prop_map(|(y, m)| YearMonth::new(y, m).unwrap())
}

proptest! {
    #[test]
    fn every_grid_is_six_sunday_first_weeks(month in any_month()) {
        let grid = CalendarGrid::build(month, month.first_day(), &[]);
        prop_assert_eq!(grid.cells().count(), CELLS_PER_GRID);
        prop_assert_eq!(grid.weeks().len(), CELLS_PER_GRID / DAYS_PER_WEEK);
        prop_assert_eq!(grid.first_date().weekday(), Weekday::Sunday);
        prop_assert_eq!(grid.last_date() - grid.first_date(), CELLS_PER_GRID as i32 - 1);

        let dates: Vec<Date> = grid.cells().map(|cell| cell.date).collect();
        prop_assert!(dates.windows(2).all(|pair| pair[1] - pair[0] == 1));

        let in_month = grid.cells().filter(|cell| cell.is_current_month).count();
        prop_assert_eq!(in_month, month.days_in_month() as usize);
        for cell in grid.cells() {
            prop_assert_eq!(cell.is_current_month, month.contains(cell.date));
        }
        // The first of the month sits in row 0.
        prop_assert_eq!(position(&grid, month.first_day()).map(|p| p.0), Some(0));
    }

    #[test]
    fn padding_never_carries_leave(month in any_month(), before in 0i32..20, after in 0i32..20) {
        let request = LeaveInterval::new(
            "all",
            month.first_day() - before,
            month.last_day() + after,
            LeaveStatus::Approved,
        )
        .unwrap();
        let grid = CalendarGrid::build(month, month.first_day(), std::slice::from_ref(&request));
        for cell in grid.cells() {
            prop_assert_eq!(cell.has_leave(), cell.is_current_month);
        }
    }

    #[test]
    fn today_flag_appears_at_most_once(month in any_month(), shift in -45i32..45) {
        let today = month.first_day() + shift;
        let grid = CalendarGrid::build(month, today, &[]);
        let flagged: Vec<Date> = grid.cells().filter(|c| c.is_today).map(|c| c.date).collect();
        if month.contains(today) {
            prop_assert_eq!(flagged, vec![today]);
        } else {
            prop_assert!(flagged.is_empty());
        }
    }

    #[test]
    fn adjoining_grids_agree_on_shared_dates(month in (1901u16..=2197, 1u8..=12)
        .prop_map(|(y, m)| YearMonth::new(y, m).unwrap()))
    {
        let next = month.next();
        let this_grid = CalendarGrid::build(month, month.first_day(), &[]);
        let next_grid = CalendarGrid::build(next, next.first_day(), &[]);

        for cell in this_grid.cells().filter(|c| !c.is_current_month && c.date > month.last_day()) {
            let other = next_grid.cell(cell.date).unwrap();
            prop_assert!(other.is_current_month);
            prop_assert_eq!(other.kind.clone(), cell.kind.clone());
            prop_assert_eq!(
                position(&next_grid, cell.date).map(|p| p.1),
                position(&this_grid, cell.date).map(|p| p.1)
            );
        }
        for cell in next_grid.cells().filter(|c| !c.is_current_month && c.date < next.first_day()) {
            let other = this_grid.cell(cell.date).unwrap();
            prop_assert!(other.is_current_month);
        }
    }
}
