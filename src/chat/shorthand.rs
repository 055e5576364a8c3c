//! One-line constructors for the common cases.

use super::{
    context::{Chat, Message, Role},
    prompt::Prompt,
};

pub fn msg_system(text: impl Into<String>) -> Message {
    Message::new(Role::System, text)
}

pub fn msg_user(text: impl Into<String>) -> Message {
    Message::new(Role::User, text)
}

pub fn msg_assistant(text: impl Into<String>) -> Message {
    Message::new(Role::Assistant, text)
}

pub fn chat(messages: impl IntoIterator<Item = Message>) -> Chat {
    Chat::new(messages)
}

pub fn prmt<I>(parts: I) -> Prompt
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Prompt::new(parts)
}

/// Collects messages (or `(Role, text)` pairs) into an ordered list for [`chat`].
pub fn msgs<I>(messages: I) -> Vec<Message>
where
    I: IntoIterator,
    I::Item: Into<Message>,
{
    messages.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_shorthands_pick_the_role() {
        assert_eq!(msg_system("s").role(), Role::System);
        assert_eq!(msg_user("u").role(), Role::User);
        assert_eq!(msg_assistant("a").role(), Role::Assistant);
        assert_eq!(msg_user("u"), Message::new(Role::User, "u"));
    }

    #[test]
    fn msgs_passes_messages_through_in_order() {
        let list = msgs([msg_user("one"), msg_assistant("two")]);
        assert_eq!(list, vec![msg_user("one"), msg_assistant("two")]);

        let list = msgs([(Role::System, "sys"), (Role::User, "hi")]);
        assert_eq!(list, vec![msg_system("sys"), msg_user("hi")]);
    }

    #[test]
    fn chat_and_prmt_delegate() {
        let c = chat(msgs([msg_user("a"), msg_user("b")]));
        assert_eq!(c.as_content_list(), vec!["a", "b"]);

        assert_eq!(prmt(["  x", "  y"]).render(), "x\ny");
    }

    #[test]
    fn prompts_feed_message_content() {
        let system = prmt(["\n    Be brief.\n"]);
        assert_eq!(msg_system(system).content(), "Be brief.");
    }
}
