use serde::{Deserialize, Serialize};

const MONTH_NAMES_PT: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Maps a 0-based month index (0 = January) to a month.
    pub fn from_index0(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Maps a 1-based month number (1 = January) to a month.
    pub fn from_number(number: u32) -> Option<Self> {
        number.checked_sub(1).and_then(Self::from_index0)
    }

    pub fn index0(self) -> u32 {
        self as u32
    }

    pub fn number(self) -> u32 {
        self.index0() + 1
    }

    pub fn succ(self) -> Self {
        Self::ALL[(self.index0() as usize + 1) % 12]
    }

    pub fn pred(self) -> Self {
        Self::ALL[(self.index0() as usize + 11) % 12]
    }

    pub fn name_pt(self) -> &'static str {
        MONTH_NAMES_PT[self.index0() as usize]
    }
}

impl From<Month> for chrono::Month {
    fn from(month: Month) -> Self {
        match month {
            Month::January => chrono::Month::January,
            Month::February => chrono::Month::February,
            Month::March => chrono::Month::March,
            Month::April => chrono::Month::April,
            Month::May => chrono::Month::May,
            Month::June => chrono::Month::June,
            Month::July => chrono::Month::July,
            Month::August => chrono::Month::August,
            Month::September => chrono::Month::September,
            Month::October => chrono::Month::October,
            Month::November => chrono::Month::November,
            Month::December => chrono::Month::December,
        }
    }
}

impl From<chrono::Month> for Month {
    fn from(month: chrono::Month) -> Self {
        Self::ALL[month.number_from_month() as usize - 1]
    }
}
