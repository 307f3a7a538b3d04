use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::calendar::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Morning,
    Afternoon,
}

impl Period {
    pub fn label_pt(self) -> &'static str {
        match self {
            Period::Morning => "Manhã",
            Period::Afternoon => "Tarde",
        }
    }
}

/// A half-hour mark offered for booking. Only the values in
/// [`TimeSlot::ALL`] exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    hour: u8,
    minute: u8,
}

const fn slot(hour: u8, minute: u8) -> TimeSlot {
    TimeSlot { hour, minute }
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 18] = [
        slot(8, 0),
        slot(8, 30),
        slot(9, 0),
        slot(9, 30),
        slot(10, 0),
        slot(10, 30),
        slot(11, 0),
        slot(11, 30),
        slot(14, 0),
        slot(14, 30),
        slot(15, 0),
        slot(15, 30),
        slot(16, 0),
        slot(16, 30),
        slot(17, 0),
        slot(17, 30),
        slot(18, 0),
        slot(18, 30),
    ];

    // Morning window closes at noon, afternoon reopens at 14:00.
    const AFTERNOON_START_HOUR: u8 = 12;

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn period(&self) -> Period {
        if self.hour < Self::AFTERNOON_START_HOUR {
            Period::Morning
        } else {
            Period::Afternoon
        }
    }

    pub fn in_period(period: Period) -> impl Iterator<Item = TimeSlot> {
        Self::ALL.into_iter().filter(move |slot| slot.period() == period)
    }

    /// Accepts `HH:MM`, `H:MM` or `HHMM`; the result must be an offered slot.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        static TIME_RE: OnceLock<Regex> = OnceLock::new();
        let pattern = TIME_RE.get_or_init(|| {
            Regex::new(r"^(\d{1,2}):?(\d{2})$").expect("invalid time slot regex")
        });

        let invalid = || ParseError::InvalidTime(input.to_string());
        let captures = pattern.captures(input.trim()).ok_or_else(invalid)?;
        let hour = captures[1].parse::<u8>().map_err(|_| invalid())?;
        let minute = captures[2].parse::<u8>().map_err(|_| invalid())?;

        Self::ALL
            .into_iter()
            .find(|slot| slot.hour == hour && slot.minute == minute)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeSlot {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}
