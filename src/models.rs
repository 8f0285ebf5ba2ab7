//! Frontend Models
//!
//! Data structures matching the guestbook backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned entry identifier.
///
/// The backend may hand out numeric or textual ids; both are kept verbatim,
/// including floats and integers beyond `i64`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Number(n) => write!(f, "{}", n),
            EntryId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntryId {
    fn from(n: i64) -> Self {
        EntryId::Number(n.into())
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        EntryId::Text(s.to_string())
    }
}

/// Guestbook entry (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body of create and update requests; also the form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub name: String,
    pub message: String,
}

impl EntryDraft {
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            name: entry.name.clone(),
            message: entry.message.clone(),
        }
    }

    /// Both fields are required by the form.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.message.is_empty()
    }
}
