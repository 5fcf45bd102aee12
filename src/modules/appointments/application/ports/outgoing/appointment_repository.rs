use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::accounts::application::domain::entities::UserId;
use crate::appointments::application::domain::entities::AppointmentStatus;
use crate::shared::store::StoreError;

#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub user_id: UserId,
    pub vet_id: Uuid,
    pub date_time: DateTime<Utc>,
    pub reason: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppointmentRecord {
    pub id: Uuid,
    pub user_id: UserId,
    pub vet_id: Uuid,
    pub date_time: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub reason: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One status write against an appointment row. A no-op keeps the
/// stored status but still bumps updated_at.
#[derive(Debug, Clone, Copy)]
pub enum StatusWrite {
    Set(AppointmentStatus),
    Touch,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppointmentRepositoryError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn book(
        &self,
        appointment: NewAppointment,
    ) -> Result<AppointmentRecord, AppointmentRepositoryError>;

    /// `new_date_time` only accompanies a reschedule.
    async fn write_status(
        &self,
        id: Uuid,
        write: StatusWrite,
        new_date_time: Option<DateTime<Utc>>,
    ) -> Result<AppointmentRecord, AppointmentRepositoryError>;
}
