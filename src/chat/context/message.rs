use std::fmt::Display;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ChatError;

use super::role::Role;

/// The `{"role": ..., "content": ...}` mapping chat-completion APIs take.
pub type DictMessage = IndexMap<String, String>;

/// One role-tagged utterance.
///
/// Never mutated in place; use [`Message::with_content`] or
/// [`Message::with_role`] to derive a changed copy.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Builds a message from a [`Role`] or a raw role string such as `"user"`.
    pub fn try_new<R>(role: R, content: impl Into<String>) -> Result<Self, ChatError>
    where
        R: TryInto<Role>,
        ChatError: From<R::Error>,
    {
        Ok(Self::new(role.try_into()?, content))
    }

    pub fn from_dict(dict: &DictMessage) -> Result<Self, ChatError> {
        let role = dict
            .get("role")
            .ok_or_else(|| ChatError::MissingField("role".to_string()))?;
        let content = dict
            .get("content")
            .ok_or_else(|| ChatError::MissingField("content".to_string()))?;

        Self::try_new(role, content.as_str())
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }

    pub fn to_dict(&self) -> DictMessage {
        let mut dict = IndexMap::with_capacity(2);
        dict.insert("role".to_string(), self.role.to_string());
        dict.insert("content".to_string(), self.content.clone());
        dict
    }

    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self::new(self.role, content)
    }

    pub fn with_role(&self, role: Role) -> Self {
        Self::new(role, self.content.clone())
    }
}

impl TryFrom<DictMessage> for Message {
    type Error = ChatError;

    fn try_from(dict: DictMessage) -> Result<Self, Self::Error> {
        Self::from_dict(&dict)
    }
}

impl<S: Into<String>> From<(Role, S)> for Message {
    fn from((role, content): (Role, S)) -> Self {
        Self::new(role, content)
    }
}

impl From<Message> for DictMessage {
    fn from(message: Message) -> Self {
        message.to_dict()
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.role, self.content)
    }
}
