use super::*;

#[component]
/// Horizontal control-panel menu bar rendered above a window body.
pub fn MenuBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menubar", layout_class)
            role="menubar"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menubar"
        >
            {children()}
        </div>
    }
}

#[component]
/// Menu bar entry that opens one dropdown.
pub fn MenuBarButton(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] aria_controls: String,
    #[prop(optional, into)] expanded: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            id=id
            class=merge_layout_class("ui-menubar-button", layout_class)
            aria-haspopup="menu"
            aria-controls=aria_controls
            aria-expanded=move || bool_token(expanded.get())
            data-ui-primitive="true"
            data-ui-kind="menubar-button"
            on:mousedown=move |ev: MouseEvent| ev.stop_propagation()
            on:click=move |ev| forward(on_click.as_ref(), ev)
        >
            {label}
        </button>
    }
}

#[component]
/// Dropdown surface. Mouse-down inside never counts as an outside click.
pub fn MenuSurface(
    #[prop(into)] id: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class=merge_layout_class("ui-menu-surface", layout_class)
            role="menu"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
            on:mousedown=move |ev: MouseEvent| ev.stop_propagation()
        >
            {children()}
        </div>
    }
}

#[component]
/// Dropdown entry.
pub fn MenuItem(
    #[prop(into)] label: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            role="menuitem"
            class=merge_layout_class("ui-menu-item", layout_class)
            data-ui-primitive="true"
            data-ui-kind="menu-item"
            on:click=move |ev| forward(on_click.as_ref(), ev)
        >
            {label}
        </button>
    }
}
