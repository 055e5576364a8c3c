mod context;
mod message;
mod role;

pub use context::Chat;
pub use message::{DictMessage, Message};
pub use role::Role;
