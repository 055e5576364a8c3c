mod context;
mod prompt;
mod shorthand;

pub use context::{Chat, DictMessage, Message, Role};
pub use prompt::{Prompt, TemplateVariables, normalize};
pub use shorthand::{chat, msg_assistant, msg_system, msg_user, msgs, prmt};
