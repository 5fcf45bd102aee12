use sea_orm::entity::prelude::*;
use std::str::FromStr;

use crate::accounts::application::domain::entities::{UserId, UserRole};
use crate::accounts::application::ports::outgoing::UserProfileRecord;
use crate::shared::store::StoreError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key comes from the identity provider's subject claim,
    /// never generated here.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub role: String,
    pub location: Option<String>,
    pub farm_type: Option<String>,
    pub bio: Option<String>,
    pub contact_number: Option<String>,
    pub vet_profile_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

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

impl Model {
    pub fn to_profile_record(&self) -> Result<UserProfileRecord, StoreError> {
        let role = UserRole::from_str(&self.role)
            .map_err(|_| StoreError::Unknown(format!("unknown role in users row: {}", self.role)))?;

        Ok(UserProfileRecord {
            id: UserId::from(self.id),
            name: self.name.clone(),
            email: self.email.clone(),
            role,
            location: self.location.clone(),
            farm_type: self.farm_type.clone(),
            bio: self.bio.clone(),
            contact_number: self.contact_number.clone(),
            vet_profile_id: self.vet_profile_id,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        })
    }
}
