//! Wire DTOs for the task store REST endpoints.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads so serde round-trips stay
//! lossless. `Task.status` stays a raw wire token; the UI groups tasks
//! through the closed `Status` enum in `state::board`, and a task carrying a
//! token outside that enum simply renders in no column.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A task as represented on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier, immutable after creation.
    pub id: i64,
    /// Non-empty title (the server rejects blank titles).
    pub title: String,
    /// Optional free-form description; the server omits it when empty.
    #[serde(default)]
    pub description: String,
    /// Status token: `"todo"`, `"in_progress"`, or `"done"`.
    pub status: String,
}

/// Payload for `POST /tasks`.
///
/// `status` is omitted from the JSON when `None`, letting the server default
/// the new task to `"todo"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
