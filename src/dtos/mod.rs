pub mod post_dtos;
pub mod user_dtos;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Reads a field as a string when it is one and as absent otherwise, so a
/// mistyped value fails the same checks a missing one would.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Envelope shared by every message-only response, success or error.
#[derive(Debug, Serialize)]
pub struct MessageOut {
    pub status: u16,
    pub message: String,
}

impl MessageOut {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(200, message)
    }
}
