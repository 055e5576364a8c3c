use std::convert::Infallible;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("invalid role: {0:?} (expected one of \"system\", \"user\", \"assistant\")")]
    InvalidRole(String),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// lets `Message::try_new` take a `Role` directly, whose conversion can't fail
impl From<Infallible> for ChatError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
