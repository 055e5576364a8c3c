use serde::Deserialize;

use crate::chat::Message;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ChatConfigTOML {
    pub config: ChatConfigInner,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ChatConfigInner {
    /// System prompt block; normalized before it becomes the first message.
    pub system: Option<String>,
    pub log_level: Option<String>,
    #[serde(default)]
    pub messages: Vec<Message>,
}
