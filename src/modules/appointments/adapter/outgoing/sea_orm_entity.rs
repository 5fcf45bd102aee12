use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::entity::prelude::*;
use std::str::FromStr;

use crate::accounts::application::domain::entities::UserId;
use crate::appointments::application::domain::entities::AppointmentStatus;
use crate::appointments::application::ports::outgoing::AppointmentRecord;
use crate::shared::store::StoreError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub vet_id: Uuid,
    pub date_time: DateTime<FixedOffset>,
    pub status: String,
    pub reason: String,
    pub notes: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::accounts::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::UserId",
        to = "crate::accounts::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "crate::veterinarians::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::VetId",
        to = "crate::veterinarians::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Veterinarian,
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use sea_orm::ActiveValue::Set;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }
        Ok(self)
    }
}

impl Model {
    pub fn to_record(&self) -> Result<AppointmentRecord, StoreError> {
        let status = AppointmentStatus::from_str(&self.status).map_err(|e| {
            StoreError::Unknown(e.to_string())
        })?;

        Ok(AppointmentRecord {
            id: self.id,
            user_id: UserId::from(self.user_id),
            vet_id: self.vet_id,
            date_time: self.date_time.with_timezone(&Utc),
            status,
            reason: self.reason.clone(),
            notes: self.notes.clone(),
            created_at: self.created_at.with_timezone(&Utc),
            updated_at: self.updated_at.with_timezone(&Utc),
        })
    }
}
