use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::entity::prelude::*;

use crate::accounts::application::domain::entities::UserId;
use crate::messaging::application::ports::outgoing::MessageRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub content: String,
    pub sent_at: DateTime<FixedOffset>,
    pub read: bool,
    pub appointment_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::accounts::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::SenderId",
        to = "crate::accounts::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Sender,
    #[sea_orm(
        belongs_to = "crate::accounts::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::ReceiverId",
        to = "crate::accounts::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Receiver,
}

// Rows are append-only apart from the read flag; nothing to stamp.
impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_record(&self) -> MessageRecord {
        MessageRecord {
            id: self.id,
            sender_id: UserId::from(self.sender_id),
            receiver_id: UserId::from(self.receiver_id),
            content: self.content.clone(),
            sent_at: self.sent_at.with_timezone(&Utc),
            read: self.read,
            appointment_id: self.appointment_id,
        }
    }
}
