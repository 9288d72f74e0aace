//! Wire types for the Task & CRM REST API.
//!
//! The backend sends Mongo-style documents, so entity ids arrive as `_id`
//! and a deal's display name may be under `name` or `title` — serde aliases
//! absorb both spellings. `status` and `priority` are free-form strings on
//! the wire; they decode into closed enums with an `Other` fallback so the
//! grouping and badge logic stays total.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// A task as returned by `GET /api/tasks`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Task {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Priority,
    /// ISO-8601 timestamp, kept opaque; only the date part is displayed.
    #[serde(default)]
    pub due_date: Option<String>,
}

/// A contact as returned by `GET /api/contacts`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Contact {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A deal as returned by `GET /api/deals`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Deal {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub stage: Option<String>,
}

/// Task workflow status. Unrecognized wire values are preserved in `Other`
/// and treated as to-do by the grouping logic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
    Other(String),
}

impl From<String> for TaskStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "todo" => Self::Todo,
            "in_progress" => Self::InProgress,
            "done" => Self::Done,
            _ => Self::Other(raw),
        }
    }
}

/// Task priority. Unrecognized wire values are preserved in `Other` and
/// rendered with the medium-priority styling, like the original UI.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Other(String),
}

impl From<String> for Priority {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Other(raw),
        }
    }
}

impl Priority {
    /// Wire/display label for the priority badge.
    pub fn label(&self) -> &str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Other(raw) => raw,
        }
    }
}
