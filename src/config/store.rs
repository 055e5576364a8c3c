use anyhow::Context;
use log::LevelFilter;

use super::structure::{ChatConfigInner, ChatConfigTOML};
use crate::{
    chat::{Chat, Message, Prompt, Role},
    utils::log::Logger,
};
use std::ops::Deref;

/// A chat seed: an optional system prompt followed by seed messages.
///
/// Parsed from a TOML string the caller already holds; nothing is read
/// from or written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    cached: ChatConfigTOML,
}

impl ChatConfig {
    pub fn from_toml(config_str: &str) -> Result<Self, anyhow::Error> {
        let cached: ChatConfigTOML = toml::from_str(config_str).context("invalid chat config")?;
        log::debug!(
            "parsed chat seed with {} messages",
            cached.config.messages.len()
        );

        Ok(Self { cached })
    }

    pub fn log_level(&self) -> LevelFilter {
        Logger::parse_level(self.cached.config.log_level.as_deref())
    }

    /// Builds the seeded chat: the normalized system prompt first, then the seed messages.
    pub fn to_chat(&self) -> Chat {
        let system = self
            .cached
            .config
            .system
            .as_deref()
            .map(|system| Message::new(Role::System, Prompt::from(system)));

        Chat::new(system.into_iter().chain(self.cached.config.messages.iter().cloned()))
    }
}

impl Deref for ChatConfig {
    type Target = ChatConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.cached.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = r#"
[config]
log_level = "debug"
system = """
    You are an expert code reviewer.

    Be constructive.
"""

[[config.messages]]
role = "user"
content = "Review this please."

[[config.messages]]
role = "assistant"
content = "Sure."
"#;

    #[test]
    fn seed_builds_normalized_chat() {
        let config = ChatConfig::from_toml(SEED).unwrap();
        let chat = config.to_chat();

        assert_eq!(chat.len(), 3);
        assert_eq!(chat[0].role(), Role::System);
        assert_eq!(
            chat[0].content(),
            "You are an expert code reviewer.\n\nBe constructive."
        );
        assert_eq!(&chat.as_content_list()[1..], &["Review this please.", "Sure."]);
        assert_eq!(config.log_level(), LevelFilter::Debug);
        assert_eq!(config.messages.len(), 2);
    }

    #[test]
    fn no_system_prompt_means_no_system_message() {
        let config = ChatConfig::from_toml("[config]\n").unwrap();
        assert!(config.system.is_none());
        assert!(config.to_chat().is_empty());
        assert_eq!(config.log_level(), LevelFilter::Info);
    }

    #[test]
    fn unknown_roles_fail_to_parse() {
        let err = ChatConfig::from_toml(
            "[config]\n[[config.messages]]\nrole = \"tool\"\ncontent = \"x\"\n",
        );
        assert!(err.is_err());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = ChatConfig::from_toml("[config\nsystem = ").unwrap_err();
        assert!(err.to_string().contains("invalid chat config"));
    }
}
