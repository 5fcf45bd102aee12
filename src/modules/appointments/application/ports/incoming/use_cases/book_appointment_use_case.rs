use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::accounts::application::domain::entities::UserId;
use crate::appointments::application::ports::outgoing::AppointmentRecord;

//
// ──────────────────────────────────────────────────────────
// Book Appointment Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct BookAppointmentCommand {
    user_id: UserId,
    vet_id: Uuid,
    date_time: DateTime<Utc>,
    reason: String,
    notes: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum BookAppointmentCommandError {
    #[error("Reason cannot be empty")]
    EmptyReason,
}

impl BookAppointmentCommand {
    pub fn new(
        user_id: UserId,
        vet_id: Uuid,
        date_time: DateTime<Utc>,
        reason: String,
        notes: Option<String>,
    ) -> Result<Self, BookAppointmentCommandError> {
        let reason = reason.trim().to_string();
        if reason.is_empty() {
            return Err(BookAppointmentCommandError::EmptyReason);
        }

        Ok(Self {
            user_id,
            vet_id,
            date_time,
            reason,
            notes,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn vet_id(&self) -> Uuid {
        self.vet_id
    }

    pub fn date_time(&self) -> DateTime<Utc> {
        self.date_time
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn notes(&self) -> Option<&String> {
        self.notes.as_ref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error + Incoming Port
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum BookAppointmentError {
    #[error("Veterinarian not found")]
    VetNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Every new booking starts pending; the vet moves it on from there.
#[async_trait]
pub trait BookAppointmentUseCase: Send + Sync {
    async fn execute(
        &self,
        command: BookAppointmentCommand,
    ) -> Result<AppointmentRecord, BookAppointmentError>;
}
