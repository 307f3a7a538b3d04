use thiserror::Error;
use uuid::Uuid;

use crate::calendar::{is_selectable, CalendarDate};
use crate::clock::Clock;

use super::appointment::{Appointment, AppointmentStatus};
use super::selection::{is_complete, select_slot, BookingSelection};
use super::service::Service;
use super::time_slot::TimeSlot;

pub const CONFIRMATION_TITLE: &str = "Agendamento Confirmado!";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowError {
    #[error("Nenhum serviço escolhido")]
    NoServiceChosen,
    #[error("O serviço '{0}' está indisponível no momento")]
    ServiceUnavailable(String),
    #[error("A data {0} já passou")]
    DateNotSelectable(CalendarDate),
    #[error("Escolha uma data e um horário antes de confirmar")]
    Incomplete,
    #[error("Agendamento já confirmado")]
    AlreadyConfirmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    ServiceChosen,
    DatePicked,
    Complete,
    Confirmed,
}

pub struct BookingFlow<C: Clock> {
    clock: C,
    state: FlowState,
    selection: Option<BookingSelection>,
}

impl<C: Clock> BookingFlow<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            state: FlowState::Idle,
            selection: None,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn selection(&self) -> Option<&BookingSelection> {
        self.selection.as_ref()
    }

    pub fn today(&self) -> CalendarDate {
        self.clock.today()
    }

    /// Starts over with `service`, dropping any date or time picked so far.
    pub fn choose_service(&mut self, service: Service) -> Result<(), FlowError> {
        self.ensure_not_confirmed()?;
        if !service.available {
            tracing::warn!(service = %service.name, "rejected unavailable service");
            return Err(FlowError::ServiceUnavailable(service.name));
        }

        tracing::info!(service = %service.name, "service chosen");
        self.selection = Some(BookingSelection::new(service));
        self.state = FlowState::ServiceChosen;
        Ok(())
    }

    pub fn pick_date(&mut self, date: CalendarDate) -> Result<(), FlowError> {
        self.ensure_not_confirmed()?;
        let today = self.clock.today();
        let selection = self.selection.as_ref().ok_or(FlowError::NoServiceChosen)?;
        if !is_selectable(date, today) {
            tracing::warn!(%date, %today, "rejected past date");
            return Err(FlowError::DateNotSelectable(date));
        }

        let updated = select_slot(selection, Some(date), None);
        self.apply(updated);
        Ok(())
    }

    pub fn pick_time(&mut self, time: TimeSlot) -> Result<(), FlowError> {
        self.ensure_not_confirmed()?;
        let selection = self.selection.as_ref().ok_or(FlowError::NoServiceChosen)?;

        let updated = select_slot(selection, None, Some(time));
        self.apply(updated);
        Ok(())
    }

    pub fn confirm(
        &mut self,
        salon: &str,
        status: AppointmentStatus,
    ) -> Result<Appointment, FlowError> {
        self.ensure_not_confirmed()?;
        let selection = self.selection.as_ref().ok_or(FlowError::NoServiceChosen)?;
        let (Some(date), Some(time)) = (selection.date, selection.time) else {
            return Err(FlowError::Incomplete);
        };

        let appointment = Appointment {
            id: Uuid::new_v4().to_string(),
            service: selection.service.name.clone(),
            salon: salon.to_string(),
            date,
            time,
            duration_minutes: selection.service.duration_minutes,
            price: selection.service.price,
            status,
        };

        tracing::info!(
            id = %appointment.id,
            service = %appointment.service,
            salon = %appointment.salon,
            date = %appointment.date,
            time = %appointment.time,
            status = appointment.status.label_pt(),
            "service booked"
        );
        self.state = FlowState::Confirmed;
        Ok(appointment)
    }

    pub fn cancel(&mut self) {
        if self.state != FlowState::Idle {
            tracing::info!(state = ?self.state, "booking cancelled");
        }
        self.selection = None;
        self.state = FlowState::Idle;
    }

    pub fn can_confirm(&self) -> bool {
        self.state != FlowState::Confirmed && self.selection.as_ref().is_some_and(is_complete)
    }

    fn ensure_not_confirmed(&self) -> Result<(), FlowError> {
        if self.state == FlowState::Confirmed {
            return Err(FlowError::AlreadyConfirmed);
        }
        Ok(())
    }

    fn apply(&mut self, selection: BookingSelection) {
        self.state = match (selection.date, selection.time) {
            (Some(_), Some(_)) => FlowState::Complete,
            (Some(_), None) => FlowState::DatePicked,
            (None, _) => FlowState::ServiceChosen,
        };
        tracing::debug!(state = ?self.state, "selection updated");
        self.selection = Some(selection);
    }
}

pub fn confirmation_message(appointment: &Appointment) -> String {
    format!(
        "{} agendado para {} às {}",
        appointment.service, appointment.date, appointment.time
    )
}
