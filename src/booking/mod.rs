pub mod appointment;
pub mod flow;
pub mod selection;
pub mod service;
pub mod time_slot;

pub use appointment::{appointments_on, has_appointments, Appointment, AppointmentStatus};
pub use flow::{confirmation_message, BookingFlow, FlowError, FlowState, CONFIRMATION_TITLE};
pub use selection::{is_complete, is_selected, select_slot, BookingSelection};
pub use service::{filter_services, format_price, Salon, Service, ServiceCategory};
pub use time_slot::{Period, TimeSlot};
