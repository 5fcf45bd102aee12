use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect};
use std::sync::Arc;

use crate::accounts::application::domain::entities::UserId;
use crate::accounts::application::ports::outgoing::{UserProfileRecord, UserQuery};
use crate::shared::store::StoreError;

use super::sea_orm_entity::{Column, Entity as UserEntity};

#[derive(Debug, Clone)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn get_profile(&self, id: UserId) -> Result<Option<UserProfileRecord>, StoreError> {
        let found = UserEntity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map_err(|e| StoreError::from_db("user", e))?;

        found.map(|model| model.to_profile_record()).transpose()
    }

    async fn count_users(&self) -> Result<u64, StoreError> {
        UserEntity::find()
            .count(&*self.db)
            .await
            .map_err(|e| StoreError::from_db("user", e))
    }

    async fn recent_users(&self, limit: u64) -> Result<Vec<UserProfileRecord>, StoreError> {
        let models = UserEntity::find()
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(|e| StoreError::from_db("user", e))?;

        models
            .iter()
            .map(|model| model.to_profile_record())
            .collect()
    }
}
