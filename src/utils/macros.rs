/// Builds a [`Chat`](crate::Chat) from a list of messages.
///
/// ```
/// use chat_object::{chat, msg_system, msg_user};
///
/// let history = chat![msg_system("You are helpful."), msg_user("Hi!")];
/// assert_eq!(history.len(), 2);
/// ```
#[macro_export]
macro_rules! chat {
    ($($message:expr),* $(,)?) => {{
        let messages: ::std::vec::Vec<$crate::Message> =
            ::std::vec![$($crate::Message::from($message)),*];
        $crate::Chat::new(messages)
    }};
}

/// Builds a [`Prompt`](crate::Prompt) from string parts, joined by newlines.
///
/// ```
/// use chat_object::prmt;
///
/// assert_eq!(prmt!["a", "b"].render(), "a\nb");
/// ```
#[macro_export]
macro_rules! prmt {
    ($($part:expr),* $(,)?) => {{
        let parts: ::std::vec::Vec<::std::string::String> =
            ::std::vec![$(::std::string::String::from($part)),*];
        $crate::Prompt::new(parts)
    }};
}

/// Collects messages or `(Role, text)` pairs into a `Vec<Message>`.
///
/// ```
/// use chat_object::{Role, msgs};
///
/// let list = msgs![(Role::User, "hi"), (Role::Assistant, "hello")];
/// assert_eq!(list[1].content(), "hello");
/// ```
#[macro_export]
macro_rules! msgs {
    ($($message:expr),* $(,)?) => {{
        let messages: ::std::vec::Vec<$crate::Message> =
            ::std::vec![$($crate::Message::from($message)),*];
        messages
    }};
}
