use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::appointments::application::domain::entities::AppointmentStatus;
use crate::appointments::application::ports::outgoing::{
    AppointmentRecord, AppointmentRepository, AppointmentRepositoryError, NewAppointment,
    StatusWrite,
};
use crate::shared::store::StoreError;

use super::sea_orm_entity::{
    ActiveModel as AppointmentActiveModel, Entity as AppointmentEntity, Model as AppointmentModel,
};

#[derive(Debug, Clone)]
pub struct AppointmentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AppointmentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_or_not_found(
        &self,
        id: Uuid,
    ) -> Result<AppointmentModel, AppointmentRepositoryError> {
        AppointmentEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| AppointmentRepositoryError::Store(StoreError::from_db("appointment", e)))?
            .ok_or(AppointmentRepositoryError::Store(StoreError::NotFound {
                entity: "appointment",
            }))
    }
}

#[async_trait]
impl AppointmentRepository for AppointmentRepositoryPostgres {
    async fn book(
        &self,
        appointment: NewAppointment,
    ) -> Result<AppointmentRecord, AppointmentRepositoryError> {
        let active = AppointmentActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(appointment.user_id.value()),
            vet_id: Set(appointment.vet_id),
            date_time: Set(appointment.date_time.into()),
            status: Set(AppointmentStatus::Pending.as_str().to_string()),
            reason: Set(appointment.reason),
            notes: Set(appointment.notes),
            ..Default::default()
        };

        let inserted: AppointmentModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| AppointmentRepositoryError::Store(StoreError::from_db("appointment", e)))?;

        Ok(inserted.to_record()?)
    }

    async fn write_status(
        &self,
        id: Uuid,
        write: StatusWrite,
        new_date_time: Option<DateTime<Utc>>,
    ) -> Result<AppointmentRecord, AppointmentRepositoryError> {
        let existing = self.find_or_not_found(id).await?;
        let current_status = existing.status.clone();
        let mut active: AppointmentActiveModel = existing.into();

        match write {
            StatusWrite::Set(status) => {
                active.status = Set(status.as_str().to_string());
            }
            // A clean ActiveModel short-circuits into a re-SELECT and no
            // UPDATE ever reaches the row. Re-set the stored status so the
            // write happens and before_save (or the DB trigger) moves
            // updated_at.
            StatusWrite::Touch => {
                active.status = Set(current_status);
            }
        }
        if let Some(date_time) = new_date_time {
            active.date_time = Set(date_time.into());
        }

        let updated: AppointmentModel = active
            .update(&*self.db)
            .await
            .map_err(|e| AppointmentRepositoryError::Store(StoreError::from_db("appointment", e)))?;

        Ok(updated.to_record()?)
    }
}
