use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::month::Month;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Data inválida '{0}'. Use AAAA-MM-DD, AAAA/MM/DD ou DD/MM/AAAA.")]
    InvalidDate(String),
    #[error("Mês inválido '{0}'. Use AAAA/MM.")]
    InvalidMonth(String),
    #[error("Horário inválido '{0}'. Use um dos horários HH:MM oferecidos.")]
    InvalidTime(String),
}

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"];

// Sakamoto's month offsets, January first.
const WEEKDAY_OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: Month) -> u32 {
    match month {
        Month::February if is_leap_year(year) => 29,
        Month::February => 28,
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

/// Day of week for a proleptic Gregorian date, 0 = Sunday.
pub fn weekday_from_sunday(year: i32, month: Month, day: u32) -> u32 {
    let mut y = year as i64;
    if month.number() < 3 {
        y -= 1;
    }
    let sum = y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        + WEEKDAY_OFFSETS[month.index0() as usize]
        + day as i64;
    sum.rem_euclid(7) as u32
}

pub fn first_weekday(year: i32, month: Month) -> u32 {
    weekday_from_sunday(year, month, 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: Month,
}

impl YearMonth {
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    pub fn of(date: CalendarDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// Following month, or `None` past December of `i32::MAX`.
    pub fn succ_opt(self) -> Option<Self> {
        match self.month {
            Month::December => Some(Self::new(self.year.checked_add(1)?, Month::January)),
            month => Some(Self::new(self.year, month.succ())),
        }
    }

    /// Preceding month, or `None` before January of `i32::MIN`.
    pub fn pred_opt(self) -> Option<Self> {
        match self.month {
            Month::January => Some(Self::new(self.year.checked_sub(1)?, Month::December)),
            month => Some(Self::new(self.year, month.pred())),
        }
    }

    pub fn days_in_month(self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn first_weekday(self) -> u32 {
        first_weekday(self.year, self.month)
    }

    pub fn title_pt(self) -> String {
        format!("{} {}", self.month.name_pt(), self.year)
    }

    /// Parses `YYYY/MM` or `YYYY-MM`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidMonth(input.to_string());
        let (year, month) = input
            .trim()
            .split_once(['/', '-'])
            .ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month
            .parse::<u32>()
            .ok()
            .and_then(Month::from_number)
            .ok_or_else(invalid)?;
        Ok(Self::new(year, month))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCalendarDate")]
pub struct CalendarDate {
    year: i32,
    month: Month,
    day: u32,
}

#[derive(Deserialize)]
struct RawCalendarDate {
    year: i32,
    month: Month,
    day: u32,
}

impl TryFrom<RawCalendarDate> for CalendarDate {
    type Error = ParseError;

    fn try_from(raw: RawCalendarDate) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month, raw.day).ok_or_else(|| {
            let label = format!("{:04}-{:02}-{:02}", raw.year, raw.month.number(), raw.day);
            ParseError::InvalidDate(label)
        })
    }
}

impl CalendarDate {
    pub fn new(year: i32, month: Month, day: u32) -> Option<Self> {
        (1..=days_in_month(year, month))
            .contains(&day)
            .then_some(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn weekday_from_sunday(&self) -> u32 {
        weekday_from_sunday(self.year, self.month, self.day)
    }

    pub fn succ_opt(&self) -> Option<Self> {
        if self.day < days_in_month(self.year, self.month) {
            return Some(Self { day: self.day + 1, ..*self });
        }
        let next = YearMonth::of(*self).succ_opt()?;
        Some(Self { year: next.year, month: next.month, day: 1 })
    }

    pub fn pred_opt(&self) -> Option<Self> {
        if self.day > 1 {
            return Some(Self { day: self.day - 1, ..*self });
        }
        let prev = YearMonth::of(*self).pred_opt()?;
        Some(Self { year: prev.year, month: prev.month, day: prev.days_in_month() })
    }

    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.number(), self.day)
    }

    /// Formats with a chrono format string, falling back to `dd/mm/yyyy`
    /// for years chrono cannot represent.
    pub fn format(&self, fmt: &str) -> String {
        match self.to_naive() {
            Some(date) => date.format(fmt).to_string(),
            None => self.to_string(),
        }
    }

    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let trimmed = input.trim();
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
            .map(Self::from)
            .ok_or_else(|| ParseError::InvalidDate(input.to_string()))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: Month::ALL[date.month0() as usize],
            day: date.day(),
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month.number(), self.year)
    }
}
