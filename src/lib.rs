pub mod booking;
pub mod calendar;
pub mod clock;
pub mod storage;
pub mod ui;

pub use booking::{Appointment, AppointmentStatus, BookingFlow, BookingSelection, TimeSlot};
pub use calendar::{CalendarDate, CalendarDay, Month, YearMonth};
pub use clock::{Clock, SystemClock};
