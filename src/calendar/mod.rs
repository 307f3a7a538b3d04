pub mod date;
pub mod grid;
pub mod month;

pub use date::{days_in_month, first_weekday, is_leap_year, CalendarDate, ParseError, YearMonth};
pub use grid::{build_month_grid, is_selectable, CalendarDay, DAYS_PER_WEEK};
pub use month::Month;
