//! One status column: heading, its tasks, and the drop target.

use leptos::prelude::*;

use crate::components::task_card::TaskCard;
use crate::net::types::Task;
use crate::state::board::{BoardState, Status};
use crate::util::drag;

/// A single board column for one [`Status`].
///
/// Accepts drops by reading the transferred task id and forwarding it upward
/// together with this column's status; resolving the id (and the same-column
/// no-op check) happens in the page so there is exactly one move code path.
#[component]
pub fn StatusColumn(
    status: Status,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<i64>,
    #[prop(into)] on_move: Callback<(Task, Status)>,
    #[prop(into)] on_transfer: Callback<(String, Status)>,
) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    let on_dragover = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_drop_effect("move");
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        if let Some(raw) = ev
            .data_transfer()
            .and_then(|transfer| transfer.get_data(drag::TRANSFER_KEY).ok())
        {
            on_transfer.run((raw, status));
        }
    };

    view! {
        <div class="column" on:dragover=on_dragover on:drop=on_drop>
            <h3>{status.label()}</h3>
            <div class="tasks">
                {move || {
                    board
                        .get()
                        .tasks_with_status(status)
                        .into_iter()
                        .map(|task| {
                            view! {
                                <TaskCard
                                    task=task
                                    loading=loading
                                    on_edit=on_edit
                                    on_delete=on_delete
                                    on_move=on_move
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
