use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::messaging::application::ports::outgoing::{
    MessageRecord, MessageRepository, MessageRepositoryError, NewMessage,
};
use crate::shared::store::StoreError;

use super::sea_orm_entity::{
    ActiveModel as MessageActiveModel, Entity as MessageEntity, Model as MessageModel,
};

#[derive(Debug, Clone)]
pub struct MessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageRepository for MessageRepositoryPostgres {
    async fn send(&self, message: NewMessage) -> Result<MessageRecord, MessageRepositoryError> {
        let active = MessageActiveModel {
            id: Set(Uuid::new_v4()),
            sender_id: Set(message.sender_id.value()),
            receiver_id: Set(message.receiver_id.value()),
            content: Set(message.content),
            sent_at: Set(Utc::now().into()),
            read: Set(false),
            appointment_id: Set(message.appointment_id),
        };

        let inserted: MessageModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| MessageRepositoryError::Store(StoreError::from_db("message", e)))?;

        Ok(inserted.to_record())
    }

    async fn mark_read(&self, id: Uuid) -> Result<MessageRecord, MessageRepositoryError> {
        let existing = MessageEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| MessageRepositoryError::Store(StoreError::from_db("message", e)))?
            .ok_or(MessageRepositoryError::Store(StoreError::NotFound {
                entity: "message",
            }))?;

        let mut active: MessageActiveModel = existing.into();
        active.read = Set(true);

        let updated: MessageModel = active
            .update(&*self.db)
            .await
            .map_err(|e| MessageRepositoryError::Store(StoreError::from_db("message", e)))?;

        Ok(updated.to_record())
    }
}
