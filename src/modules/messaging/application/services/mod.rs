mod get_conversations_service;
mod get_thread_service;
mod mark_message_read_service;
mod send_message_service;

pub use get_conversations_service::GetConversationsService;
pub use get_thread_service::GetThreadService;
pub use mark_message_read_service::MarkMessageReadService;
pub use send_message_service::SendMessageService;
