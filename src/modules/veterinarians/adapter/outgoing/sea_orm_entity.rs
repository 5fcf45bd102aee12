use sea_orm::entity::prelude::*;
use std::str::FromStr;

use crate::accounts::application::domain::entities::UserId;
use crate::shared::store::StoreError;
use crate::veterinarians::application::domain::entities::VerificationStatus;
use crate::veterinarians::application::ports::outgoing::VetRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "veterinarians")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub user_id: Uuid,

    pub qualifications: String,

    pub specialization: String,

    /// JSON array of region names.
    pub service_regions: Json,

    /// JSON array of animal type names.
    pub animal_types: Json,

    pub verification_status: String,

    pub bio: Option<String>,

    pub contact_number: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::accounts::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::UserId",
        to = "crate::accounts::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    User,
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}

fn string_list(column: &'static str, value: &Json) -> Result<Vec<String>, StoreError> {
    serde_json::from_value(value.clone())
        .map_err(|e| StoreError::Unknown(format!("bad {column} json: {e}")))
}

impl Model {
    pub fn to_vet_record(&self) -> Result<VetRecord, StoreError> {
        let verification_status =
            VerificationStatus::from_str(&self.verification_status).map_err(|_| {
                StoreError::Unknown(format!(
                    "unknown verification status in veterinarians row: {}",
                    self.verification_status
                ))
            })?;

        Ok(VetRecord {
            id: self.id,
            user_id: UserId::from(self.user_id),
            qualifications: self.qualifications.clone(),
            specialization: self.specialization.clone(),
            service_regions: string_list("service_regions", &self.service_regions)?,
            animal_types: string_list("animal_types", &self.animal_types)?,
            verification_status,
            bio: self.bio.clone(),
            contact_number: self.contact_number.clone(),
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        })
    }
}
