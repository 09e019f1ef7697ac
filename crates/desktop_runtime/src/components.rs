//! Desktop shell UI composition and interaction surfaces.

mod icon_grid;
mod menus;
mod taskbar;
mod window;

use leptos::ev::PointerEvent;
use leptos::*;
use system_ui::{DesktopRoot, DesktopWindowLayer};

use self::{icon_grid::DesktopIcons, taskbar::DesktopTaskbar, window::DesktopWindow};

use crate::{
    bus::ShellMessage,
    model::{DragSubject, PointerPosition, WindowId},
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

pub(crate) const DESKTOP_ROOT_DOM_ID: &str = "desktop-shell-root";
pub(crate) const ICON_GRID_DOM_ID: &str = "desktop-icon-grid";

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn window_drag_active(runtime: DesktopRuntimeContext) -> bool {
    runtime.interaction.with_untracked(|interaction| {
        matches!(
            interaction.drag.as_ref().map(|session| &session.subject),
            Some(DragSubject::Window(_))
        )
    })
}

#[component]
/// Root desktop surface: icon grid, window layer, and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_ids = create_memo(move |_| runtime.state.with(|state| state.window_ids()));

    let on_pointermove = Callback::new(move |ev: PointerEvent| {
        if window_drag_active(runtime) {
            runtime.publish(ShellMessage::PointerMoved(pointer_from_pointer_event(&ev)));
        }
    });
    let on_pointerup = Callback::new(move |_: PointerEvent| {
        if window_drag_active(runtime) {
            runtime.publish(ShellMessage::PointerReleased);
        }
    });
    let on_pointerleave = Callback::new(move |_: PointerEvent| {
        if window_drag_active(runtime) {
            runtime.publish(ShellMessage::PointerLeftSurface);
        }
    });

    view! {
        <DesktopRoot
            id=DESKTOP_ROOT_DOM_ID
            on_pointermove=on_pointermove
            on_pointerup=on_pointerup
            on_pointerleave=on_pointerleave
        >
            <DesktopIcons />
            <DesktopWindowLayer>
                <For
                    each=move || window_ids.get()
                    key=|window_id: &WindowId| window_id.clone()
                    let:window_id
                >
                    <DesktopWindow window_id=window_id />
                </For>
            </DesktopWindowLayer>
            <DesktopTaskbar />
        </DesktopRoot>
    }
}
