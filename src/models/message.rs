use serde::Serialize;
use uuid::Uuid;

use super::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Assistant,
}

/// One chat line. A `pending` message is the assistant's typing
/// placeholder; it is removed and replaced when the reply lands.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub id: Uuid,
    pub content: String,
    pub author: Author,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: Timestamp,
    pub pending: bool,
}

impl Message {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content.into(), Author::User, false)
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(content.into(), Author::Assistant, false)
    }

    #[must_use]
    pub fn typing() -> Self {
        Self::new(String::new(), Author::Assistant, true)
    }

    #[must_use]
    pub fn is_user(&self) -> bool {
        self.author == Author::User
    }

    fn new(content: String, author: Author, pending: bool) -> Self {
        Self { id: Uuid::new_v4(), content, author, timestamp: super::now(), pending }
    }
}
