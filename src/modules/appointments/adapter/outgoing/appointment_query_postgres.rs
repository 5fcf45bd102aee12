use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::accounts::application::domain::entities::UserId;
use crate::appointments::application::ports::outgoing::{AppointmentQuery, AppointmentRecord};
use crate::shared::store::StoreError;

use super::sea_orm_entity::{Column, Entity as AppointmentEntity, Model as AppointmentModel};

#[derive(Debug, Clone)]
pub struct AppointmentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AppointmentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_records(models: Vec<AppointmentModel>) -> Result<Vec<AppointmentRecord>, StoreError> {
    models.iter().map(AppointmentModel::to_record).collect()
}

#[async_trait]
impl AppointmentQuery for AppointmentQueryPostgres {
    async fn get_appointment(&self, id: Uuid) -> Result<Option<AppointmentRecord>, StoreError> {
        let found = AppointmentEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| StoreError::from_db("appointment", e))?;

        found.map(|model| model.to_record()).transpose()
    }

    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<AppointmentRecord>, StoreError> {
        // Owners read their history newest-first.
        let models = AppointmentEntity::find()
            .filter(Column::UserId.eq(user_id.value()))
            .order_by_desc(Column::DateTime)
            .all(&*self.db)
            .await
            .map_err(|e| StoreError::from_db("appointment", e))?;

        to_records(models)
    }

    async fn list_for_vet(&self, vet_id: Uuid) -> Result<Vec<AppointmentRecord>, StoreError> {
        // Vets read a schedule, soonest first.
        let models = AppointmentEntity::find()
            .filter(Column::VetId.eq(vet_id))
            .order_by_asc(Column::DateTime)
            .all(&*self.db)
            .await
            .map_err(|e| StoreError::from_db("appointment", e))?;

        to_records(models)
    }

    async fn count_appointments(&self) -> Result<u64, StoreError> {
        AppointmentEntity::find()
            .count(&*self.db)
            .await
            .map_err(|e| StoreError::from_db("appointment", e))
    }

    async fn recent_appointments(&self, limit: u64) -> Result<Vec<AppointmentRecord>, StoreError> {
        let models = AppointmentEntity::find()
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(|e| StoreError::from_db("appointment", e))?;

        to_records(models)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase};

    use crate::appointments::application::domain::entities::AppointmentStatus;

    fn appointment_model(status: &str, days_out: i64) -> AppointmentModel {
        let now = Utc::now().fixed_offset();

        AppointmentModel {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            vet_id: Uuid::new_v4(),
            date_time: (Utc::now() + Duration::days(days_out)).fixed_offset(),
            status: status.to_string(),
            reason: "Calf vaccination".to_string(),
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn get_appointment_maps_row() {
        let model = appointment_model("confirmed", 2);
        let id = model.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let query = AppointmentQueryPostgres::new(Arc::new(db));

        let record = query.get_appointment(id).await.unwrap().unwrap();

        assert_eq!(record.id, id);
        assert_eq!(record.status, AppointmentStatus::Confirmed);
    }

    #[tokio::test]
    async fn get_appointment_misses_cleanly() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<AppointmentModel>::new()])
            .into_connection();

        let query = AppointmentQueryPostgres::new(Arc::new(db));

        let result = query.get_appointment(Uuid::new_v4()).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn list_for_vet_returns_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                appointment_model("pending", 1),
                appointment_model("approved", 3),
            ]])
            .into_connection();

        let query = AppointmentQueryPostgres::new(Arc::new(db));

        let records = query.list_for_vet(Uuid::new_v4()).await.unwrap();

        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn corrupt_status_surfaces_as_unknown() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![appointment_model("limbo", 1)]])
            .into_connection();

        let query = AppointmentQueryPostgres::new(Arc::new(db));

        let result = query.list_for_user(UserId::from(Uuid::new_v4())).await;

        assert!(matches!(result, Err(StoreError::Unknown(_))));
    }
}
