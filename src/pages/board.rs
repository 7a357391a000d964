//! The board page: startup load, the create/update/delete/move actions, the
//! three status columns, and the edit dialog.
//!
//! CONTROL FLOW
//! ============
//! Every action follows the same shape: `begin` (sets the loading soft
//! lock), one API call, exactly one reducer on success or `fail` plus an
//! error toast on failure, then `finish`. Local state is only mutated after
//! a confirmed success response.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use leptos::prelude::*;

use crate::components::status_column::StatusColumn;
use crate::components::task_form::TaskForm;
use crate::net::api;
use crate::net::types::{NewTask, Task};
use crate::state::board::{BoardState, Status};
use crate::state::toasts::{DEFAULT_DURATION_MS, Severity, ToastState, toast_id_seed};
use crate::util::drag;

const TASK_CREATED: &str = "Tarefa criada";
const TASK_UPDATED: &str = "Tarefa atualizada";
const TASK_DELETED: &str = "Tarefa excluída";
const CONFIRM_DELETE: &str = "Excluir tarefa?";

/// Merge an edit-form draft over the task being edited. The id always comes
/// from the current task; the status falls back to the current one when the
/// draft carries none.
fn merged_for_edit(current: &Task, draft: &NewTask) -> Task {
    Task {
        id: current.id,
        title: draft.title.clone(),
        description: draft.description.clone(),
        status: draft
            .status
            .clone()
            .unwrap_or_else(|| current.status.clone()),
    }
}

/// The task as it should read after a move to `target`.
fn moved(task: &Task, target: Status) -> Task {
    Task {
        status: target.token().to_owned(),
        ..task.clone()
    }
}

/// Move guard: a task dropped on (or moved to) its own column is a no-op.
fn is_same_column(task: &Task, target: Status) -> bool {
    task.status == target.token()
}

fn push_toast(toasts: RwSignal<ToastState>, message: String, severity: Severity) {
    toasts.update(|state| {
        state.push(toast_id_seed(), message, severity, DEFAULT_DURATION_MS);
    });
}

fn report_failure(
    board: RwSignal<BoardState>,
    toasts: RwSignal<ToastState>,
    error: &crate::net::error::ApiError,
) {
    let message = error.message().to_owned();
    board.update(|b| b.fail(message.clone()));
    push_toast(toasts, message, Severity::Error);
}

fn load_tasks(board: RwSignal<BoardState>) {
    board.update(|b| {
        b.begin();
        b.clear_error();
    });
    leptos::task::spawn_local(async move {
        match api::fetch_tasks().await {
            Ok(tasks) => board.update(|b| b.apply_loaded(tasks)),
            Err(e) => board.update(|b| b.fail(e.message())),
        }
        board.update(BoardState::finish);
    });
}

fn create_task(board: RwSignal<BoardState>, toasts: RwSignal<ToastState>, draft: NewTask) {
    board.update(BoardState::begin);
    leptos::task::spawn_local(async move {
        match api::create_task(&draft).await {
            Ok(task) => {
                board.update(|b| b.apply_created(task));
                push_toast(toasts, TASK_CREATED.to_owned(), Severity::Success);
            }
            Err(e) => report_failure(board, toasts, &e),
        }
        board.update(BoardState::finish);
    });
}

/// Full-replacement update; shared by edit-form submits and moves.
fn save_task(board: RwSignal<BoardState>, toasts: RwSignal<ToastState>, task: Task) {
    board.update(BoardState::begin);
    leptos::task::spawn_local(async move {
        match api::update_task(task.id, &task).await {
            Ok(updated) => {
                board.update(|b| b.apply_updated(updated));
                push_toast(toasts, TASK_UPDATED.to_owned(), Severity::Success);
            }
            Err(e) => report_failure(board, toasts, &e),
        }
        board.update(BoardState::finish);
    });
}

fn delete_task(board: RwSignal<BoardState>, toasts: RwSignal<ToastState>, id: i64) {
    if !confirm_delete() {
        return;
    }
    board.update(BoardState::begin);
    leptos::task::spawn_local(async move {
        match api::delete_task(id).await {
            Ok(()) => {
                board.update(|b| b.apply_deleted(id));
                push_toast(toasts, TASK_DELETED.to_owned(), Severity::Success);
            }
            Err(e) => report_failure(board, toasts, &e),
        }
        board.update(BoardState::finish);
    });
}

/// The single status-change path, used by move buttons and drops alike.
fn move_task(
    board: RwSignal<BoardState>,
    toasts: RwSignal<ToastState>,
    task: Task,
    target: Status,
) {
    if is_same_column(&task, target) {
        return;
    }
    save_task(board, toasts, moved(&task, target));
}

fn confirm_delete() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(CONFIRM_DELETE).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// The board screen.
#[component]
pub fn BoardPage() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    // Load the collection once, client-side.
    let started = RwSignal::new(false);
    Effect::new(move || {
        if started.get_untracked() {
            return;
        }
        started.set(true);
        load_tasks(board);
    });

    let loading = Signal::derive(move || board.get().loading);

    let on_create = Callback::new(move |draft: NewTask| create_task(board, toasts, draft));
    let on_edit = Callback::new(move |task: Task| board.update(|b| b.start_editing(task)));
    let on_delete = Callback::new(move |id: i64| delete_task(board, toasts, id));
    let on_move =
        Callback::new(move |(task, target): (Task, Status)| move_task(board, toasts, task, target));
    let on_transfer = Callback::new(move |(raw, target): (String, Status)| {
        if let Some(task) = drag::drop_action(&board.get_untracked().tasks, &raw, target) {
            move_task(board, toasts, task, target);
        }
    });

    view! {
        <div class="app">
            <header>
                <h1>"Mini Kanban"</h1>
            </header>

            <section class="controls">
                <h2>"Nova tarefa"</h2>
                <TaskForm loading=loading on_submit=on_create/>
            </section>

            <Show when=move || board.get().loading>
                <div class="msg">"Carregando..."</div>
            </Show>
            {move || {
                board.get().error.map(|message| view! { <div class="msg error">{message}</div> })
            }}

            <main class="board">
                {Status::ALL
                    .into_iter()
                    .map(|status| {
                        view! {
                            <StatusColumn
                                status=status
                                loading=loading
                                on_edit=on_edit
                                on_delete=on_delete
                                on_move=on_move
                                on_transfer=on_transfer
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </main>

            {move || {
                board
                    .get()
                    .editing
                    .map(|task| view! { <EditTaskDialog task=task loading=loading/> })
            }}
        </div>
    }
}

/// Modal wrapper around the edit-mode [`TaskForm`].
#[component]
fn EditTaskDialog(task: Task, #[prop(into)] loading: Signal<bool>) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let current = task.clone();
    let on_submit = Callback::new(move |draft: NewTask| {
        save_task(board, toasts, merged_for_edit(&current, &draft));
    });
    let on_cancel = Callback::new(move |()| board.update(BoardState::cancel_editing));

    view! {
        <div class="modal">
            <div class="modal-content">
                <h3>"Editar tarefa"</h3>
                <TaskForm initial=task loading=loading on_submit=on_submit on_cancel=on_cancel/>
            </div>
        </div>
    }
}
