use leptos::ev::{DragEvent, PointerEvent};

use super::*;

#[component]
/// Root desktop surface. Pointer tracking for window drags is attached here.
pub fn DesktopRoot(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_pointermove: Option<Callback<PointerEvent>>,
    #[prop(optional)] on_pointerup: Option<Callback<PointerEvent>>,
    #[prop(optional)] on_pointerleave: Option<Callback<PointerEvent>>,
    #[prop(optional)] on_mousedown: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class=merge_layout_class("desktop-shell", layout_class)
            tabindex="-1"
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            on:pointermove=move |ev| forward(on_pointermove.as_ref(), ev)
            on:pointerup=move |ev| forward(on_pointerup.as_ref(), ev)
            on:pointercancel=move |ev| forward(on_pointerup.as_ref(), ev)
            on:pointerleave=move |ev| forward(on_pointerleave.as_ref(), ev)
            on:mousedown=move |ev| forward(on_mousedown.as_ref(), ev)
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop icon grid. Drop handling is delegated to the caller.
pub fn DesktopIconGrid(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_drop: Option<Callback<DragEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class=merge_layout_class("ui-desktop-icon-grid", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-grid"
            on:click=move |ev| forward(on_click.as_ref(), ev)
            on:dragover=move |ev: DragEvent| {
                ev.prevent_default();
                if let Some(transfer) = ev.data_transfer() {
                    transfer.set_drop_effect("move");
                }
            }
            on:drop=move |ev: DragEvent| {
                ev.prevent_default();
                forward(on_drop.as_ref(), ev);
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Draggable desktop icon placed on an explicit grid cell.
pub fn DesktopIconButton(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] label: String,
    #[prop(into)] icon_src: String,
    #[prop(into)] column: MaybeSignal<u32>,
    #[prop(into)] row: MaybeSignal<u32>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] dragging: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_dragstart: Option<Callback<DragEvent>>,
    #[prop(optional)] on_dragend: Option<Callback<DragEvent>>,
) -> impl IntoView {
    let aria_label = label.clone();
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-desktop-icon-button", layout_class)
            style=move || format!("grid-column-start:{};grid-row-start:{};", column.get(), row.get())
            draggable="true"
            title=label.clone()
            aria-label=aria_label
            aria-pressed=move || bool_token(selected.get())
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-button"
            data-ui-selected=move || bool_token(selected.get())
            data-ui-dragging=move || bool_token(dragging.get())
            on:click=move |ev| forward(on_click.as_ref(), ev)
            on:dblclick=move |ev| forward(on_dblclick.as_ref(), ev)
            on:dragstart=move |ev| forward(on_dragstart.as_ref(), ev)
            on:dragend=move |ev| forward(on_dragend.as_ref(), ev)
        >
            <img src=icon_src alt="" draggable="false" />
            <span data-ui-slot="icon-label">{label}</span>
        </button>
    }
}

#[component]
/// Layer hosting all managed windows above the icon grid.
pub fn DesktopWindowLayer(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-layer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared window frame primitive.
pub fn WindowFrame(
    #[prop(into)] id: String,
    #[prop(into)] window_id: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] focused: MaybeSignal<bool>,
    #[prop(optional, into)] hidden: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            id=id
            class=merge_layout_class("ui-window-frame", layout_class)
            style=move || style.get()
            role="dialog"
            aria-label=move || aria_label.get()
            data-window-id=window_id
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-focused=move || bool_token(focused.get())
            data-ui-hidden=move || bool_token(hidden.get())
            on:pointerdown=move |ev| forward(on_pointerdown.as_ref(), ev)
        >
            {children()}
        </section>
    }
}

#[component]
/// Window title bar; the drag handle of a frame.
pub fn WindowTitleBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-window-titlebar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            on:pointerdown=move |ev| forward(on_pointerdown.as_ref(), ev)
        >
            {children()}
        </header>
    }
}

#[component]
/// Window title text.
pub fn WindowTitle(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-title", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-title"
        >
            {children()}
        </div>
    }
}

#[component]
/// Title bar controls row.
pub fn WindowControls(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-controls", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-controls"
        >
            {children()}
        </div>
    }
}

#[component]
/// Title bar control button.
///
/// Pointer-down is swallowed so pressing a control never starts a title-bar drag.
pub fn WindowControlButton(
    #[prop(into)] aria_label: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-window-control", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="window-control"
            on:pointerdown=move |ev: PointerEvent| ev.stop_propagation()
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                forward(on_click.as_ref(), ev);
            }
        ></button>
    }
}

#[component]
/// Window body host for a mounted application.
pub fn WindowBody(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-body", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-body"
        >
            {children()}
        </div>
    }
}

#[component]
/// Bottom taskbar container.
pub fn Taskbar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class=merge_layout_class("ui-taskbar", layout_class)
            role="toolbar"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="taskbar"
        >
            {children()}
        </footer>
    }
}

#[component]
/// Named taskbar region (`start`, `tabs`, `clock`).
pub fn TaskbarSection(
    ui_slot: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-taskbar-section", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="taskbar-section"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Decorative start badge at the leading edge of the taskbar. It carries no action.
pub fn TaskbarStartBadge(
    #[prop(into)] label: String,
    #[prop(into)] icon_src: String,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-taskbar-start", layout_class)
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="taskbar-start"
        >
            <img src=icon_src alt="" draggable="false" />
            <span data-ui-slot="start-label">{label}</span>
        </div>
    }
}

#[component]
/// Taskbar tab mirroring one open window.
pub fn TaskbarButton(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            id=id
            class=merge_layout_class("ui-taskbar-button", layout_class)
            title=label.clone()
            aria-pressed=move || bool_token(pressed.get())
            data-ui-primitive="true"
            data-ui-kind="taskbar-button"
            on:click=move |ev| forward(on_click.as_ref(), ev)
        >
            <span data-ui-slot="taskbar-label">{label}</span>
        </button>
    }
}

#[component]
/// Taskbar clock readout.
pub fn ClockButton(
    #[prop(into)] id: String,
    #[prop(into)] text: MaybeSignal<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <time
            id=id
            class=merge_layout_class("ui-clock", layout_class)
            aria-live="off"
            data-ui-primitive="true"
            data-ui-kind="clock"
        >
            {move || text.get()}
        </time>
    }
}
