use serde::{Deserialize, Serialize};

use super::date::{days_in_month, first_weekday, CalendarDate};
use super::month::Month;

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarDay {
    /// Padding before the 1st of the month.
    Empty,
    Date(CalendarDate),
}

impl CalendarDay {
    pub fn date(&self) -> Option<CalendarDate> {
        match self {
            CalendarDay::Empty => None,
            CalendarDay::Date(date) => Some(*date),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CalendarDay::Empty)
    }
}

/// Builds the Sunday-first day sequence of a month: `first_weekday` empty
/// slots followed by every day of the month in order.
pub fn build_month_grid(year: i32, month: Month) -> Vec<CalendarDay> {
    let leading = first_weekday(year, month) as usize;
    let total_days = days_in_month(year, month);

    let mut days = Vec::with_capacity(leading + total_days as usize);
    days.extend(std::iter::repeat_n(CalendarDay::Empty, leading));
    days.extend(
        (1..=total_days)
            .filter_map(|day| CalendarDate::new(year, month, day))
            .map(CalendarDay::Date),
    );

    tracing::debug!(year, month = month.number(), leading, total_days, "built month grid");
    days
}

/// Past dates cannot be booked; today and later can.
pub fn is_selectable(day: CalendarDate, today: CalendarDate) -> bool {
    day >= today
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, Month::from_number(month).unwrap(), day).unwrap()
    }

    #[test]
    fn december_2024_starts_on_sunday_without_padding() {
        let grid = build_month_grid(2024, Month::December);

        assert_eq!(grid.len(), 31);
        assert_eq!(grid[0], CalendarDay::Date(date(2024, 12, 1)));
    }

    #[test]
    fn january_2025_has_three_empty_slots() {
        let grid = build_month_grid(2025, Month::January);

        assert_eq!(grid.len(), 3 + 31);
        assert!(grid[..3].iter().all(CalendarDay::is_empty));
        assert_eq!(grid[3], CalendarDay::Date(date(2025, 1, 1)));
    }

    #[test]
    fn leap_february_ends_on_29th() {
        let grid = build_month_grid(2024, Month::February);

        assert_eq!(grid.last().and_then(CalendarDay::date), Some(date(2024, 2, 29)));
    }

    #[test]
    fn today_is_selectable() {
        let today = date(2024, 12, 15);
        assert!(is_selectable(today, today));
    }

    #[test]
    fn yesterday_is_not_selectable() {
        let today = date(2024, 12, 15);
        assert!(!is_selectable(today.pred_opt().unwrap(), today));
    }

    #[test]
    fn tomorrow_is_selectable() {
        let today = date(2024, 12, 15);
        assert!(is_selectable(today.succ_opt().unwrap(), today));
    }

    #[test]
    fn earlier_month_with_later_day_is_not_selectable() {
        let today = date(2025, 3, 1);
        assert!(!is_selectable(date(2025, 2, 28), today));
        assert!(!is_selectable(date(2024, 12, 31), today));
    }

    proptest! {
        #[test]
        fn grid_has_padding_then_consecutive_days(
            year in -100_000i32..100_000,
            month0 in 0u32..12,
        ) {
            let month = Month::from_index0(month0).unwrap();
            let leading = first_weekday(year, month) as usize;
            let total = days_in_month(year, month) as usize;
            let grid = build_month_grid(year, month);

            prop_assert!(leading < DAYS_PER_WEEK);
            prop_assert!((28..=31).contains(&total));
            prop_assert_eq!(grid.len(), leading + total);
            prop_assert!(grid[..leading].iter().all(CalendarDay::is_empty));
            for (offset, cell) in grid[leading..].iter().enumerate() {
                let cell_date = cell.date().unwrap();
                prop_assert_eq!(cell_date.year(), year);
                prop_assert_eq!(cell_date.month(), month);
                prop_assert_eq!(cell_date.day() as usize, offset + 1);
            }
        }
    }
}
