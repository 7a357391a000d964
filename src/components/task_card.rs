//! Draggable task card with edit, delete, and move controls.

use leptos::prelude::*;

use crate::net::types::Task;
use crate::state::board::Status;
use crate::util::drag;

/// A single task rendered inside its status column.
///
/// Dragging the card attaches the task's encoded id to the transfer; the
/// move buttons cover every column except the one the task is already in.
#[component]
pub fn TaskCard(
    task: Task,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<i64>,
    #[prop(into)] on_move: Callback<(Task, Status)>,
) -> impl IntoView {
    let id = task.id;
    let drag_payload = drag::encode_task_id(id);

    let on_dragstart = move |ev: leptos::ev::DragEvent| {
        #[cfg(feature = "hydrate")]
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_effect_allowed("move");
            let _ = transfer.set_data(drag::TRANSFER_KEY, &drag_payload);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&ev, &drag_payload);
    };

    let edit_task = task.clone();
    let description = task.description.clone();
    let has_description = !description.is_empty();
    let move_buttons = {
        let task = task.clone();
        Status::ALL
            .into_iter()
            .filter(|target| target.token() != task.status)
            .map(|target| {
                let task = task.clone();
                view! {
                    <button
                        disabled=move || loading.get()
                        on:click=move |_| on_move.run((task.clone(), target))
                    >
                        {format!("Mover para {}", target.label())}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="task" draggable="true" on:dragstart=on_dragstart>
            <div class="task-header">
                <strong>{task.title.clone()}</strong>
                <div class="task-actions">
                    <button
                        disabled=move || loading.get()
                        on:click=move |_| on_edit.run(edit_task.clone())
                    >
                        "Editar"
                    </button>
                    <button
                        disabled=move || loading.get()
                        on:click=move |_| on_delete.run(id)
                    >
                        "Excluir"
                    </button>
                </div>
            </div>
            <Show when=move || has_description>
                <p class="desc">{description.clone()}</p>
            </Show>
            <div class="move-controls">{move_buttons}</div>
        </div>
    }
}
