use std::sync::Arc;

use crate::messaging::application::ports::incoming::use_cases::{
    GetConversationsUseCase, GetThreadUseCase, MarkMessageReadUseCase, SendMessageUseCase,
};

#[derive(Clone)]
pub struct MessagingUseCases {
    pub send_message: Arc<dyn SendMessageUseCase + Send + Sync>,
    pub get_thread: Arc<dyn GetThreadUseCase + Send + Sync>,
    pub get_conversations: Arc<dyn GetConversationsUseCase + Send + Sync>,
    pub mark_message_read: Arc<dyn MarkMessageReadUseCase + Send + Sync>,
}
