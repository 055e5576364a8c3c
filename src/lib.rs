//! chat-object
//!
//! Role-tagged messages, ordered chat histories and indentation-normalized
//! prompt text, shaped as the `{"role", "content"}` arrays chat-completion
//! APIs take.

mod chat;
pub mod config;
pub mod error;
pub mod utils;

pub use chat::{
    Chat, DictMessage, Message, Prompt, Role, TemplateVariables, chat, msg_assistant, msg_system,
    msg_user, msgs, normalize, prmt,
};
pub use config::store::ChatConfig;
pub use error::ChatError;
