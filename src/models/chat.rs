use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single entry of the chat transcript. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            role: Role::User,
            text: text.into(),
            query: None,
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(id: u64, text: impl Into<String>, query: Option<String>) -> Self {
        Self {
            id,
            role: Role::Assistant,
            text: text.into(),
            query,
            timestamp: Utc::now(),
        }
    }

    pub fn has_query(&self) -> bool {
        self.query.is_some()
    }
}
