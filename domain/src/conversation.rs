//! Conversation history types for the diagnosis endpoint

use serde::{Deserialize, Serialize};

/// Who produced a conversation turn. Wire strings are lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of the diagnostic conversation sent to the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryTurn {
    pub role: Role,
    pub content: String,
}

impl HistoryTurn {
    /// Creates a user turn from a problem description.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}
