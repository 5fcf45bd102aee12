mod message_query;
mod message_repository;

pub use message_query::MessageQuery;
pub use message_repository::{
    MessageRecord, MessageRepository, MessageRepositoryError, NewMessage,
};
