use serde::{Deserialize, Serialize};

use crate::calendar::CalendarDate;

use super::service::Service;
use super::time_slot::TimeSlot;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSelection {
    pub service: Service,
    pub date: Option<CalendarDate>,
    pub time: Option<TimeSlot>,
}

impl BookingSelection {
    pub fn new(service: Service) -> Self {
        Self {
            service,
            date: None,
            time: None,
        }
    }
}

/// Returns a copy of `selection` with the given fields replaced; `None`
/// leaves the current value in place.
pub fn select_slot(
    selection: &BookingSelection,
    date: Option<CalendarDate>,
    time: Option<TimeSlot>,
) -> BookingSelection {
    BookingSelection {
        service: selection.service.clone(),
        date: date.or(selection.date),
        time: time.or(selection.time),
    }
}

pub fn is_complete(selection: &BookingSelection) -> bool {
    selection.date.is_some() && selection.time.is_some()
}

pub fn is_selected(day: CalendarDate, selection: &BookingSelection) -> bool {
    selection.date == Some(day)
}
