use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// Speaker of a chat message.
///
/// Serializes to the lowercase strings chat-completion APIs expect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "system")]
    System,

    #[serde(rename = "user")]
    User,

    #[serde(rename = "assistant")]
    Assistant,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::System, Role::User, Role::Assistant];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    /// Looks up the role for a wire string. Matching is exact and case-sensitive.
    pub fn from_string(value: &str) -> Result<Self, ChatError> {
        serde_plain::from_str(value).map_err(|_| {
            log::warn!("rejected unknown role {value:?}");
            ChatError::InvalidRole(value.to_string())
        })
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        serde_plain::to_string(self)
            .map_err(|_| std::fmt::Error::default())?
            .fmt(f)
    }
}

impl FromStr for Role {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl TryFrom<&str> for Role {
    type Error = ChatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_string(value)
    }
}

impl TryFrom<String> for Role {
    type Error = ChatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_string(&value)
    }
}

impl TryFrom<&String> for Role {
    type Error = ChatError;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        Self::from_string(value)
    }
}

// sorted by wire string, so assistant < system < user
impl Ord for Role {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Role {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<str> for Role {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Role {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_strings_round_trip() {
        for s in ["system", "user", "assistant"] {
            let role = Role::from_string(s).unwrap();
            assert_eq!(role.to_string(), s);
            assert_eq!(role.as_str(), s);
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(matches!(
            Role::from_string("User"),
            Err(ChatError::InvalidRole(s)) if s == "User"
        ));
        assert!(Role::from_string("").is_err());
        assert!(Role::from_string("tool").is_err());
    }

    #[test]
    fn parses_through_std_traits() {
        assert_eq!("assistant".parse::<Role>().unwrap(), Role::Assistant);
        assert_eq!(Role::try_from("system".to_string()).unwrap(), Role::System);
        assert_eq!(Role::User, "user");
    }

    #[test]
    fn sorts_by_wire_string() {
        let mut roles = vec![Role::Assistant, Role::User, Role::System];
        roles.sort();
        assert_eq!(roles, vec![Role::Assistant, Role::System, Role::User]);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert!(serde_json::from_str::<Role>("\"USER\"").is_err());
    }
}
