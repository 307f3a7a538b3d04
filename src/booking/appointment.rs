use serde::{Deserialize, Serialize};

use crate::calendar::CalendarDate;

use super::time_slot::TimeSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[serde(rename = "confirmado")]
    Confirmed,
    #[serde(rename = "pendente")]
    Pending,
}

impl AppointmentStatus {
    pub fn label_pt(self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "confirmado",
            AppointmentStatus::Pending => "pendente",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub service: String,
    pub salon: String,
    pub date: CalendarDate,
    pub time: TimeSlot,
    pub duration_minutes: u32,
    pub price: f64,
    pub status: AppointmentStatus,
}

pub fn has_appointments(day: CalendarDate, appointments: &[Appointment]) -> bool {
    appointments.iter().any(|appointment| appointment.date == day)
}

pub fn appointments_on(day: CalendarDate, appointments: &[Appointment]) -> Vec<&Appointment> {
    let mut matching: Vec<&Appointment> = appointments
        .iter()
        .filter(|appointment| appointment.date == day)
        .collect();
    matching.sort_by_key(|appointment| appointment.time);
    matching
}
