//! Wire DTOs for the remote task API.
//!
//! DESIGN
//! ======
//! Field names follow the remote service's JSON (`_id`, `taskName`,
//! `dueDate`) through serde renames so the rest of the client can use plain
//! Rust names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// A task record as owned by the remote service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Short task title.
    #[serde(rename = "taskName")]
    pub name: String,
    /// Free-form description.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Due timestamp as sent by the server (ISO 8601).
    #[serde(rename = "dueDate", default, deserialize_with = "null_as_empty")]
    pub due_date: String,
}

/// Missing and `null` strings both decode as empty.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Editable task fields submitted on create and update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    #[serde(rename = "taskName")]
    pub name: String,
    pub description: String,
    /// `datetime-local` input value (`YYYY-MM-DDTHH:MM`).
    #[serde(rename = "dueDate")]
    pub due_date: String,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: Option<String>,
    pub message: Option<String>,
}

/// Body of `POST /api/auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Any response that may carry a human-readable `message`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageBody {
    pub message: Option<String>,
}

/// `{ "data": ... }` wrapper used by every task endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}
