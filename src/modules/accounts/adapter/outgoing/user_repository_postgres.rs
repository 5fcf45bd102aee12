use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use std::sync::Arc;

use crate::accounts::application::domain::entities::UserId;
use crate::accounts::application::ports::outgoing::{
    NewUserProfile, UpdateUserProfileData, UserProfileRecord, UserRepository, UserRepositoryError,
};
use crate::shared::store::StoreError;

use super::sea_orm_entity::{ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel};

#[derive(Debug, Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    let text = err.to_string();
    text.contains("duplicate key") || text.contains("unique constraint")
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_profile(
        &self,
        profile: NewUserProfile,
    ) -> Result<UserProfileRecord, UserRepositoryError> {
        let active = UserActiveModel {
            id: Set(profile.id.value()),
            name: Set(profile.name),
            email: Set(profile.email),
            role: Set(profile.role.as_str().to_string()),
            location: Set(profile.location),
            farm_type: Set(profile.farm_type),
            bio: Set(profile.bio),
            contact_number: Set(profile.contact_number),
            vet_profile_id: Set(profile.vet_profile_id),
            ..Default::default()
        };

        let inserted: UserModel = active.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                UserRepositoryError::AlreadyExists
            } else {
                UserRepositoryError::Store(StoreError::from_db("user", e))
            }
        })?;

        Ok(inserted.to_profile_record()?)
    }

    async fn update_profile(
        &self,
        id: UserId,
        data: UpdateUserProfileData,
    ) -> Result<UserProfileRecord, UserRepositoryError> {
        let existing = UserEntity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::Store(StoreError::from_db("user", e)))?
            .ok_or(UserRepositoryError::Store(StoreError::NotFound {
                entity: "user",
            }))?;

        let mut active: UserActiveModel = existing.into();

        if let Some(name) = data.name {
            active.name = Set(name);
        }
        if let Some(location) = data.location {
            active.location = Set(Some(location));
        }
        if let Some(farm_type) = data.farm_type {
            active.farm_type = Set(Some(farm_type));
        }
        if let Some(bio) = data.bio {
            active.bio = Set(Some(bio));
        }
        if let Some(contact_number) = data.contact_number {
            active.contact_number = Set(Some(contact_number));
        }
        if let Some(vet_profile_id) = data.vet_profile_id {
            active.vet_profile_id = Set(Some(vet_profile_id));
        }

        let updated: UserModel = active
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::Store(StoreError::from_db("user", e)))?;

        Ok(updated.to_profile_record()?)
    }

    async fn delete_profile(&self, id: UserId) -> Result<(), UserRepositoryError> {
        let existing = UserEntity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::Store(StoreError::from_db("user", e)))?
            .ok_or(UserRepositoryError::Store(StoreError::NotFound {
                entity: "user",
            }))?;

        existing
            .delete(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::Store(StoreError::from_db("user", e)))?;

        Ok(())
    }
}
