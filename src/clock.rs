use chrono::Local;

use crate::calendar::CalendarDate;

/// Source of "today" for selectability checks.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        Local::now().date_naive().into()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Month;

    #[test]
    fn system_clock_matches_local_date() {
        let expected: CalendarDate = Local::now().date_naive().into();
        let today = SystemClock.today();
        // Midnight may pass between the two reads.
        assert!(today == expected || today == expected.succ_opt().unwrap());
    }

    #[test]
    fn fixed_clock_returns_its_date() {
        let date = CalendarDate::new(2024, Month::December, 15).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
