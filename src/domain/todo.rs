use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage-assigned identifier. `0` means "not yet assigned".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct TodoId(pub i64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    #[serde(default)]
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_complete: bool,
}

impl TodoItem {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self { id: TodoId::default(), title: title.into(), description, is_complete: false }
    }

    /// Returns a copy carrying `id`, leaving every other field untouched.
    pub fn with_id(self, id: TodoId) -> Self { Self { id, ..self } }
}
