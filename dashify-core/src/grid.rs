//! Month grid generation.

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::day_key::DayKey;

/// Cells in a rendered month: six full weeks, regardless of month length.
pub const GRID_CELLS: usize = 42;

/// One day slot in the 6-week month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub date: NaiveDate,
    pub key: DayKey,
    /// False for leading/trailing cells borrowed from adjacent months.
    pub in_month: bool,
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Anchor of the month before the one containing `date`.
pub fn prev_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date) - Months::new(1)
}

/// Anchor of the month after the one containing `date`.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date) + Months::new(1)
}

/// Build the 42-cell grid for the month containing `anchor`.
///
/// Leading cells come from the previous month, one per weekday slot before
/// day 1 (Sunday first); trailing cells pad the tail so every month renders
/// with the same six-row height.
pub fn month_grid(anchor: NaiveDate) -> Vec<GridCell> {
    let first = first_of_month(anchor);
    let lead = first.weekday().num_days_from_sunday() as i64;
    let start = first - Duration::days(lead);

    (0..GRID_CELLS as i64)
        .map(|offset| {
            let date = start + Duration::days(offset);
            GridCell {
                date,
                key: DayKey::from_date(date),
                in_month: date.year() == first.year() && date.month() == first.month(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn always_42_cells() {
        for month in 1..=12 {
            assert_eq!(month_grid(ymd(2026, month, 1)).len(), GRID_CELLS);
        }
    }

    #[test]
    fn february_2026_starts_on_sunday() {
        // 28-day month starting on a Sunday: no leading cells, 14 trailing
        let grid = month_grid(ymd(2026, 2, 1));
        assert!(grid[0].in_month);
        assert_eq!(grid.iter().filter(|c| c.in_month).count(), 28);
        assert_eq!(grid[27].date, ymd(2026, 2, 28));
        assert!(grid[28..].iter().all(|c| !c.in_month));
        assert_eq!(grid[41].date, ymd(2026, 3, 14));
    }

    #[test]
    fn leading_cells_match_first_weekday() {
        // July 1 2026 is a Wednesday: three leading cells from June
        let grid = month_grid(ymd(2026, 7, 1));
        assert!(grid[..3].iter().all(|c| !c.in_month));
        assert_eq!(grid[2].date, ymd(2026, 6, 30));
        assert_eq!(grid[3].date, ymd(2026, 7, 1));
    }

    #[test]
    fn in_month_count_matches_month_length() {
        let lengths = [
            (ymd(2026, 2, 1), 28),
            (ymd(2024, 2, 1), 29),
            (ymd(2026, 4, 1), 30),
            (ymd(2026, 1, 1), 31),
        ];
        for (anchor, days) in lengths {
            let grid = month_grid(anchor);
            assert_eq!(grid.iter().filter(|c| c.in_month).count(), days);
        }
    }

    #[test]
    fn in_month_cells_are_one_contiguous_run() {
        let grid = month_grid(ymd(2026, 7, 1));
        let first = grid.iter().position(|c| c.in_month).unwrap();
        let last = grid.iter().rposition(|c| c.in_month).unwrap();
        assert!(grid[first..=last].iter().all(|c| c.in_month));
    }

    #[test]
    fn cells_are_consecutive_days() {
        let grid = month_grid(ymd(2026, 9, 1));
        for pair in grid.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    #[test]
    fn grid_is_idempotent() {
        let anchor = ymd(2026, 2, 1);
        assert_eq!(month_grid(anchor), month_grid(anchor));
    }

    #[test]
    fn anchor_need_not_be_first_of_month() {
        assert_eq!(month_grid(ymd(2026, 2, 17)), month_grid(ymd(2026, 2, 1)));
    }

    #[test]
    fn month_navigation() {
        assert_eq!(prev_month(ymd(2026, 1, 15)), ymd(2025, 12, 1));
        assert_eq!(next_month(ymd(2026, 12, 15)), ymd(2027, 1, 1));
    }
}
