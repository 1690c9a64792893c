use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A todo record as stored and as returned by the API.
///
/// The wire shape follows omitempty semantics: an absent `task` and a false
/// `completed` are omitted from the JSON body rather than emitted as
/// null/false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    /// Store-assigned identifier, immutable after creation.
    pub id: Uuid,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    /// Completion flag, false when never set.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub completed: bool,
}

/// Client-submitted content for create and update.
///
/// Deserialization is purely structural: unknown fields, including a
/// client-supplied `id`, are dropped. The identifier is always assigned by
/// the store.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TodoInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub completed: bool,
}
