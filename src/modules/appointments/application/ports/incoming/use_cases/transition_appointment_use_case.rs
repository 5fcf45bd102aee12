use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::appointments::application::domain::entities::{AppointmentAction, AppointmentStatus};
use crate::appointments::application::ports::outgoing::AppointmentRecord;

//
// ──────────────────────────────────────────────────────────
// Transition Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct TransitionAppointmentCommand {
    appointment_id: Uuid,
    action: AppointmentAction,
    new_date_time: Option<DateTime<Utc>>,
}

#[derive(Debug, thiserror::Error)]
pub enum TransitionAppointmentCommandError {
    #[error("Reschedule requires a new date_time")]
    MissingRescheduleDate,
}

impl TransitionAppointmentCommand {
    pub fn new(
        appointment_id: Uuid,
        action: AppointmentAction,
        new_date_time: Option<DateTime<Utc>>,
    ) -> Result<Self, TransitionAppointmentCommandError> {
        if action == AppointmentAction::Reschedule && new_date_time.is_none() {
            return Err(TransitionAppointmentCommandError::MissingRescheduleDate);
        }

        Ok(Self {
            appointment_id,
            action,
            new_date_time,
        })
    }

    pub fn appointment_id(&self) -> Uuid {
        self.appointment_id
    }

    pub fn action(&self) -> AppointmentAction {
        self.action
    }

    /// Only present for a reschedule.
    pub fn new_date_time(&self) -> Option<DateTime<Utc>> {
        match self.action {
            AppointmentAction::Reschedule => self.new_date_time,
            _ => None,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error + Incoming Port
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum TransitionAppointmentError {
    #[error("Appointment not found")]
    AppointmentNotFound,

    #[error("Cannot {action} an appointment that is {from}")]
    InvalidTransition {
        from: AppointmentStatus,
        action: AppointmentAction,
    },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait TransitionAppointmentUseCase: Send + Sync {
    async fn execute(
        &self,
        command: TransitionAppointmentCommand,
    ) -> Result<AppointmentRecord, TransitionAppointmentError>;
}
