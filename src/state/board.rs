//! Board state: the task collection, operation flags, and the edit session.
//!
//! DESIGN
//! ======
//! All remote operations funnel through the reducers here: an action sets
//! `loading` with [`BoardState::begin`], applies exactly one `apply_*`
//! transition on success (never on failure), and clears `loading` with
//! [`BoardState::finish`]. `loading` doubles as a best-effort soft lock —
//! mutating controls are disabled while it is set, but a fast double-click
//! before the flag renders is an accepted race.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use crate::net::types::Task;

/// The three fixed status columns of the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// All statuses in display order, left to right.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// The wire token used by the task store.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    /// The column heading shown to the user.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Todo => "A Fazer",
            Self::InProgress => "Em Progresso",
            Self::Done => "Concluídas",
        }
    }
}

/// Board-level state: the task cache, in-flight flag, error banner, and the
/// at-most-one active edit session.
#[derive(Clone, Debug, Default)]
pub struct BoardState {
    /// Local cache of the server's task collection, keyed by `Task::id`.
    pub tasks: Vec<Task>,
    /// True exactly while a remote operation is in flight.
    pub loading: bool,
    /// Last error message, shown in the banner until the next operation.
    pub error: Option<String>,
    /// Task currently being edited, if any.
    pub editing: Option<Task>,
}

impl BoardState {
    /// Mark a remote operation as started.
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Drop the error banner. Only the initial load does this up front; the
    /// mutating operations leave a previous banner in place until they
    /// succeed or overwrite it.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Mark the in-flight remote operation as settled.
    pub fn finish(&mut self) {
        self.loading = false;
    }

    /// Record a failed operation. Local task state is never touched here.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Replace the whole collection with the server's view.
    pub fn apply_loaded(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Append a freshly created task.
    pub fn apply_created(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Replace the entry matching the returned task's id and close the edit
    /// session. Leaves the collection untouched if the id is unknown.
    pub fn apply_updated(&mut self, task: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
        }
        self.editing = None;
    }

    /// Remove the entry with the given id, if present.
    pub fn apply_deleted(&mut self, id: i64) {
        self.tasks.retain(|t| t.id != id);
    }

    /// Open an edit session for the given task snapshot.
    pub fn start_editing(&mut self, task: Task) {
        self.editing = Some(task);
    }

    /// Close the edit session without applying anything.
    pub fn cancel_editing(&mut self) {
        self.editing = None;
    }

    /// Look a task up by id.
    pub fn task_by_id(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks belonging to one column, by wire-token equality.
    ///
    /// A task whose status token matches none of the three columns appears
    /// nowhere; the source behaves the same way and the behavior is kept
    /// deliberately.
    pub fn tasks_with_status(&self, status: Status) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.status == status.token())
            .cloned()
            .collect()
    }
}
