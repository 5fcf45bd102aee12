use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::accounts::application::domain::entities::UserId;
use crate::messaging::application::ports::outgoing::{MessageQuery, MessageRecord};
use crate::shared::store::StoreError;

use super::sea_orm_entity::{Column, Entity as MessageEntity, Model as MessageModel};

#[derive(Debug, Clone)]
pub struct MessageQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_records(models: Vec<MessageModel>) -> Vec<MessageRecord> {
    models.iter().map(MessageModel::to_record).collect()
}

#[async_trait]
impl MessageQuery for MessageQueryPostgres {
    async fn get_message(&self, id: Uuid) -> Result<Option<MessageRecord>, StoreError> {
        let found = MessageEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| StoreError::from_db("message", e))?;

        Ok(found.map(|model| model.to_record()))
    }

    async fn list_between(&self, a: UserId, b: UserId) -> Result<Vec<MessageRecord>, StoreError> {
        let endpoints = [a.value(), b.value()];

        let models = MessageEntity::find()
            .filter(
                Condition::all()
                    .add(Column::SenderId.is_in(endpoints))
                    .add(Column::ReceiverId.is_in(endpoints)),
            )
            .order_by_asc(Column::SentAt)
            .all(&*self.db)
            .await
            .map_err(|e| StoreError::from_db("message", e))?;

        Ok(to_records(models))
    }

    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<MessageRecord>, StoreError> {
        let models = MessageEntity::find()
            .filter(
                Condition::any()
                    .add(Column::SenderId.eq(user_id.value()))
                    .add(Column::ReceiverId.eq(user_id.value())),
            )
            .order_by_desc(Column::SentAt)
            .all(&*self.db)
            .await
            .map_err(|e| StoreError::from_db("message", e))?;

        Ok(to_records(models))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn message_model(minutes_ago: i64, read: bool) -> MessageModel {
        MessageModel {
            id: Uuid::new_v4(),
            sender_id: Uuid::new_v4(),
            receiver_id: Uuid::new_v4(),
            content: "hello".to_string(),
            sent_at: (Utc::now() - Duration::minutes(minutes_ago)).fixed_offset(),
            read,
            appointment_id: None,
        }
    }

    #[tokio::test]
    async fn get_message_maps_row() {
        let model = message_model(1, false);
        let id = model.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let query = MessageQueryPostgres::new(Arc::new(db));

        let record = query.get_message(id).await.unwrap().unwrap();

        assert_eq!(record.id, id);
        assert!(!record.read);
    }

    #[tokio::test]
    async fn list_between_returns_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![message_model(10, true), message_model(5, false)]])
            .into_connection();

        let query = MessageQueryPostgres::new(Arc::new(db));

        let records = query
            .list_between(UserId::from(Uuid::new_v4()), UserId::from(Uuid::new_v4()))
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn list_for_user_handles_empty_inbox() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<MessageModel>::new()])
            .into_connection();

        let query = MessageQueryPostgres::new(Arc::new(db));

        let records = query
            .list_for_user(UserId::from(Uuid::new_v4()))
            .await
            .unwrap();

        assert!(records.is_empty());
    }
}
