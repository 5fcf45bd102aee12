use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::accounts::application::domain::entities::UserId;
use crate::shared::store::StoreError;
use crate::veterinarians::application::domain::entities::VerificationStatus;
use crate::veterinarians::application::ports::outgoing::{VetQuery, VetRecord};

use super::sea_orm_entity::{Column, Entity as VetEntity};

#[derive(Debug, Clone)]
pub struct VetQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VetQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VetQuery for VetQueryPostgres {
    async fn get_vet(&self, id: Uuid) -> Result<Option<VetRecord>, StoreError> {
        let found = VetEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| StoreError::from_db("veterinarian", e))?;

        found.map(|model| model.to_vet_record()).transpose()
    }

    async fn get_vet_by_user(&self, user_id: UserId) -> Result<Option<VetRecord>, StoreError> {
        let found = VetEntity::find()
            .filter(Column::UserId.eq(user_id.value()))
            .one(&*self.db)
            .await
            .map_err(|e| StoreError::from_db("veterinarian", e))?;

        found.map(|model| model.to_vet_record()).transpose()
    }

    async fn list_vets(
        &self,
        status: Option<VerificationStatus>,
    ) -> Result<Vec<VetRecord>, StoreError> {
        let mut select = VetEntity::find().order_by_desc(Column::CreatedAt);

        if let Some(status) = status {
            select = select.filter(Column::VerificationStatus.eq(status.as_str()));
        }

        let models = select
            .all(&*self.db)
            .await
            .map_err(|e| StoreError::from_db("veterinarian", e))?;

        models.iter().map(|model| model.to_vet_record()).collect()
    }

    async fn count_pending(&self) -> Result<u64, StoreError> {
        VetEntity::find()
            .filter(Column::VerificationStatus.eq(VerificationStatus::Pending.as_str()))
            .count(&*self.db)
            .await
            .map_err(|e| StoreError::from_db("veterinarian", e))
    }

    async fn recent_pending(&self, limit: u64) -> Result<Vec<VetRecord>, StoreError> {
        let models = VetEntity::find()
            .filter(Column::VerificationStatus.eq(VerificationStatus::Pending.as_str()))
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(|e| StoreError::from_db("veterinarian", e))?;

        models.iter().map(|model| model.to_vet_record()).collect()
    }
}
