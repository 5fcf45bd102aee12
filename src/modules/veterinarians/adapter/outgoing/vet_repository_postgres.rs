use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::shared::store::StoreError;
use crate::veterinarians::application::domain::entities::VerificationStatus;
use crate::veterinarians::application::ports::outgoing::{
    NewVeterinarian, UpdateVetProfileData, VetRecord, VetRepository, VetRepositoryError,
};

use super::sea_orm_entity::{ActiveModel as VetActiveModel, Entity as VetEntity, Model as VetModel};

#[derive(Debug, Clone)]
pub struct VetRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VetRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_or_not_found(&self, id: Uuid) -> Result<VetModel, VetRepositoryError> {
        VetEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| VetRepositoryError::Store(StoreError::from_db("veterinarian", e)))?
            .ok_or(VetRepositoryError::Store(StoreError::NotFound {
                entity: "veterinarian",
            }))
    }
}

fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    let text = err.to_string();
    text.contains("duplicate key") || text.contains("unique constraint")
}

#[async_trait]
impl VetRepository for VetRepositoryPostgres {
    async fn register(&self, vet: NewVeterinarian) -> Result<VetRecord, VetRepositoryError> {
        let active = VetActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(vet.user_id.value()),
            qualifications: Set(vet.qualifications),
            specialization: Set(vet.specialization),
            service_regions: Set(serde_json::json!(vet.service_regions)),
            animal_types: Set(serde_json::json!(vet.animal_types)),
            verification_status: Set(VerificationStatus::Pending.as_str().to_string()),
            bio: Set(vet.bio),
            contact_number: Set(vet.contact_number),
            ..Default::default()
        };

        let inserted: VetModel = active.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                VetRepositoryError::AlreadyRegistered
            } else {
                VetRepositoryError::Store(StoreError::from_db("veterinarian", e))
            }
        })?;

        Ok(inserted.to_vet_record()?)
    }

    async fn update_profile(
        &self,
        id: Uuid,
        data: UpdateVetProfileData,
    ) -> Result<VetRecord, VetRepositoryError> {
        let existing = self.find_or_not_found(id).await?;
        let mut active: VetActiveModel = existing.into();

        if let Some(qualifications) = data.qualifications {
            active.qualifications = Set(qualifications);
        }
        if let Some(specialization) = data.specialization {
            active.specialization = Set(specialization);
        }
        if let Some(service_regions) = data.service_regions {
            active.service_regions = Set(serde_json::json!(service_regions));
        }
        if let Some(animal_types) = data.animal_types {
            active.animal_types = Set(serde_json::json!(animal_types));
        }
        if let Some(bio) = data.bio {
            active.bio = Set(Some(bio));
        }
        if let Some(contact_number) = data.contact_number {
            active.contact_number = Set(Some(contact_number));
        }

        let updated: VetModel = active
            .update(&*self.db)
            .await
            .map_err(|e| VetRepositoryError::Store(StoreError::from_db("veterinarian", e)))?;

        Ok(updated.to_vet_record()?)
    }

    async fn set_verification_status(
        &self,
        id: Uuid,
        status: VerificationStatus,
    ) -> Result<VetRecord, VetRepositoryError> {
        let existing = self.find_or_not_found(id).await?;
        let mut active: VetActiveModel = existing.into();
        active.verification_status = Set(status.as_str().to_string());

        let updated: VetModel = active
            .update(&*self.db)
            .await
            .map_err(|e| VetRepositoryError::Store(StoreError::from_db("veterinarian", e)))?;

        Ok(updated.to_vet_record()?)
    }
}
