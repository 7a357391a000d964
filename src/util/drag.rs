//! Source-identifier transfer protocol for drag-and-drop moves.
//!
//! DESIGN
//! ======
//! The card attaches the dragged task's encoded id under [`TRANSFER_KEY`];
//! the drop target reads it back and resolves it against the current
//! collection here. The browser `DragEvent`/`DataTransfer` wiring stays in
//! the components; everything in this module is pure and testable.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::net::types::Task;
use crate::state::board::Status;

/// `DataTransfer` key under which the dragged task id travels.
pub const TRANSFER_KEY: &str = "taskId";

/// Encode a task id for the transfer payload.
pub fn encode_task_id(id: i64) -> String {
    id.to_string()
}

/// Decode a transfer payload back into a task id.
pub fn decode_task_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Resolve a drop: decode the payload, look the task up, and return it only
/// when the move would actually change its column. Unknown ids, garbage
/// payloads, and same-column drops all resolve to `None`.
pub fn drop_action(tasks: &[Task], raw: &str, target: Status) -> Option<Task> {
    let id = decode_task_id(raw)?;
    let task = tasks.iter().find(|t| t.id == id)?;
    if task.status == target.token() {
        return None;
    }
    Some(task.clone())
}
