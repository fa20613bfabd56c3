//! Lead notifications delivered to a Telegram chat.

pub mod chat_id;
pub mod dispatcher;
pub mod message;

pub use chat_id::normalize_chat_id;
pub use dispatcher::TelegramDispatcher;
