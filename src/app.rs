//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::toast_stack::ToastStack;
use crate::pages::board::BoardPage;
use crate::state::board::BoardState;
use crate::state::toasts::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the board and toast state contexts and renders the single board
/// screen with the toast overlay.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let board = RwSignal::new(BoardState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(board);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/kanban-client.css"/>
        <Title text="Mini Kanban"/>

        <BoardPage/>
        <ToastStack/>
    }
}
