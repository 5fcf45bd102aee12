pub mod get_conversations;
pub mod get_thread;
pub mod mark_message_read;
pub mod send_message;

pub use get_conversations::get_conversations_handler;
pub use get_thread::get_thread_handler;
pub use mark_message_read::mark_message_read_handler;
pub use send_message::send_message_handler;
