//! Task create/edit form with required-title validation.
//!
//! The form reports a validated payload upward and performs no network I/O.
//! In create mode (no `initial`) it clears itself after a successful submit;
//! in edit mode the caller closes the edit session instead.

use leptos::prelude::*;

use crate::net::types::{NewTask, Task};

#[cfg(test)]
#[path = "task_form_test.rs"]
mod task_form_test;

/// Validation message rendered once the title field has been touched.
pub const TITLE_REQUIRED: &str = "Título é obrigatório";

/// Build the submit payload: trims both fields, passes the (uneditable)
/// status through, and yields `None` when the trimmed title is empty.
fn build_draft(title: &str, description: &str, status: Option<&str>) -> Option<NewTask> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    Some(NewTask {
        title: title.to_owned(),
        description: description.trim().to_owned(),
        status: status.map(str::to_owned),
    })
}

/// Create/edit form for a task's title and description.
///
/// `initial` switches the form into edit mode: fields are pre-filled and the
/// initial task's status travels through the payload untouched.
#[component]
pub fn TaskForm(
    #[prop(optional)] initial: Option<Task>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] on_submit: Callback<NewTask>,
    #[prop(optional, into)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let is_edit = initial.is_some();
    let passthrough_status = initial.as_ref().map(|t| t.status.clone());

    let title = RwSignal::new(initial.as_ref().map(|t| t.title.clone()).unwrap_or_default());
    let description = RwSignal::new(
        initial
            .as_ref()
            .map(|t| t.description.clone())
            .unwrap_or_default(),
    );
    let touched = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        touched.set(true);
        let Some(draft) = build_draft(&title.get(), &description.get(), passthrough_status.as_deref())
        else {
            return;
        };
        on_submit.run(draft);
        // Only a create-mode form resets itself for the next entry.
        if !is_edit {
            title.set(String::new());
            description.set(String::new());
            touched.set(false);
        }
    };

    let show_title_error = move || touched.get() && title.get().trim().is_empty();
    let submit_disabled = move || loading.get() || title.get().trim().is_empty();
    let submit_label = move || if loading.get() { "Salvando..." } else { "Salvar" };

    view! {
        <form class="task-form" on:submit=submit>
            <input
                placeholder="Título (obrigatório)"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
                on:blur=move |_| touched.set(true)
            />
            <Show when=show_title_error>
                <div class="input-error">{TITLE_REQUIRED}</div>
            </Show>
            <textarea
                placeholder="Descrição (opcional)"
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            ></textarea>
            <div class="form-actions">
                <button type="submit" disabled=submit_disabled>
                    {submit_label}
                </button>
                {on_cancel.map(|cancel| {
                    view! {
                        <button
                            type="button"
                            class="btn-secondary"
                            disabled=move || loading.get()
                            on:click=move |_| cancel.run(())
                        >
                            "Cancelar"
                        </button>
                    }
                })}
            </div>
        </form>
    }
}
