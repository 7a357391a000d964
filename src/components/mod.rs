//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the board chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers. None of them
//! perform network I/O; remote calls stay in the page-level actions.

pub mod status_column;
pub mod task_card;
pub mod task_form;
pub mod toast_stack;
