mod get_conversations_use_case;
mod get_thread_use_case;
mod mark_message_read_use_case;
mod send_message_use_case;

pub use get_conversations_use_case::{GetConversationsError, GetConversationsUseCase};
pub use get_thread_use_case::{GetThreadError, GetThreadUseCase};
pub use mark_message_read_use_case::{MarkMessageReadError, MarkMessageReadUseCase};
pub use send_message_use_case::{
    SendMessageCommand, SendMessageCommandError, SendMessageError, SendMessageUseCase,
};
