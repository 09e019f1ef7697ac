//! Placeholder bodies for the built-in hosted apps.

use desktop_app_contract::{AppControlPanel, AppMountContext, ControlMenu};
use leptos::*;

pub(super) fn memory_game_control_panel() -> AppControlPanel {
    AppControlPanel::default().with_menu(
        ControlMenu::new("game", "Game")
            .with_item("new-2x2", "New 2x2")
            .with_item("new-2x4", "New 2x4")
            .with_item("new-4x4", "New 4x4"),
    )
}

fn board_label(item_id: &str) -> &'static str {
    match item_id {
        "new-2x2" => "2x2",
        "new-2x4" => "2x4",
        _ => "4x4",
    }
}

pub(super) fn mount_memory_game(context: AppMountContext) -> View {
    let selection = context.menu_selection;
    let board = move || {
        selection
            .get()
            .map(|selection| board_label(&selection.item_id))
            .unwrap_or("4x4")
    };
    let host = context.host;

    view! {
        <div class="app-shell app-memory-shell">
            <p><strong>{context.title}</strong></p>
            <p>"Board: " {board}</p>
            <button type="button" class="app-action" on:click=move |_| host.request_close()>
                "Quit"
            </button>
        </div>
    }
    .into_view()
}

pub(super) fn mount_chat(context: AppMountContext) -> View {
    let focused = context.is_focused();
    view! {
        <div class="app-shell app-chat-shell">
            <ul class="app-chat-log" aria-live="polite"></ul>
            <input
                type="text"
                class="app-chat-input"
                placeholder="Type a message"
                disabled=move || !focused.get()
            />
        </div>
    }
    .into_view()
}

pub(super) fn mount_quiz(context: AppMountContext) -> View {
    view! {
        <div class="app-shell app-quiz-shell">
            <p><strong>{context.title}</strong></p>
            <p>"Enter a nickname to start."</p>
        </div>
    }
    .into_view()
}

pub(super) fn mount_product_key(context: AppMountContext) -> View {
    let host = context.host;
    view! {
        <div class="app-shell app-product-key-shell">
            <p>"Enter your product key"</p>
            <input type="text" class="app-product-key-input" maxlength="29" />
            <button type="button" class="app-action" on:click=move |_| host.request_close()>
                "Cancel"
            </button>
        </div>
    }
    .into_view()
}

pub(super) fn mount_blank(_: AppMountContext) -> View {
    view! { <div class="app-shell app-blank-shell"></div> }.into_view()
}
