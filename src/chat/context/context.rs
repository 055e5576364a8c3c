use std::{fmt::Display, ops::Deref};

use serde::{Deserialize, Serialize};

use crate::error::ChatError;

use super::{
    message::{DictMessage, Message},
    role::Role,
};

/// Ordered conversation history.
///
/// Messages are kept in insertion order. There are no constraints on how
/// roles are interleaved, and nothing is deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chat {
    messages: Vec<Message>,
}

impl Chat {
    pub fn new(messages: impl IntoIterator<Item = Message>) -> Self {
        let chat = Self {
            messages: messages.into_iter().collect(),
        };
        log::debug!("created chat with {} messages", chat.messages.len());
        chat
    }

    /// Builds a chat from `{"role", "content"}` mappings, failing on the first invalid one.
    pub fn from_dicts<'a>(
        dicts: impl IntoIterator<Item = &'a DictMessage>,
    ) -> Result<Self, ChatError> {
        dicts
            .into_iter()
            .map(Message::from_dict)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    pub fn from_json(json: &str) -> Result<Self, ChatError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Appends `message` at the tail. Returns the chat so calls can be chained.
    pub fn add_message(&mut self, message: impl Into<Message>) -> &mut Self {
        let message = message.into();
        log::trace!("appending {} message at index {}", message.role(), self.messages.len());
        self.messages.push(message);
        self
    }

    /// Inserts before `index`; indices past the end append at the tail.
    pub fn insert(&mut self, index: usize, message: impl Into<Message>) {
        let index = index.min(self.messages.len());
        self.messages.insert(index, message.into());
    }

    /// Validates a `{"role", "content"}` mapping and appends it.
    pub fn try_add_dict(&mut self, dict: &DictMessage) -> Result<&mut Self, ChatError> {
        let message = Message::from_dict(dict)?;
        Ok(self.add_message(message))
    }

    pub fn pop(&mut self) -> Option<Message> {
        self.messages.pop()
    }

    pub fn remove(&mut self, index: usize) -> Option<Message> {
        match index < self.messages.len() {
            true => Some(self.messages.remove(index)),
            false => None,
        }
    }

    pub fn clear(&mut self) {
        log::trace!("clearing {} messages", self.messages.len());
        self.messages.clear();
    }

    /// Stable sort by role wire string; messages of the same role keep their order.
    pub fn sort_by_role(&mut self) {
        self.messages.sort_by_key(|m| m.role());
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn latest(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn latest_with_role(&self, role: Role) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.role() == role)
    }

    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(move |m| m.role() == role)
    }

    /// Whether any message content contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.content().contains(needle))
    }

    pub fn as_dict(&self) -> Vec<DictMessage> {
        self.messages.iter().map(Message::to_dict).collect()
    }

    pub fn as_content_list(&self) -> Vec<&str> {
        self.messages.iter().map(Message::content).collect()
    }

    pub fn to_json(&self) -> Result<String, ChatError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ChatError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}

impl Deref for Chat {
    type Target = [Message];

    fn deref(&self) -> &Self::Target {
        &self.messages
    }
}

impl FromIterator<Message> for Chat {
    fn from_iter<T: IntoIterator<Item = Message>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl Extend<Message> for Chat {
    fn extend<T: IntoIterator<Item = Message>>(&mut self, iter: T) {
        self.messages.extend(iter);
    }
}

impl From<Vec<Message>> for Chat {
    fn from(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}

impl IntoIterator for Chat {
    type Item = Message;
    type IntoIter = std::vec::IntoIter<Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl<'a> IntoIterator for &'a Chat {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl Display for Chat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines = self
            .messages
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        f.write_str(&lines)
    }
}
