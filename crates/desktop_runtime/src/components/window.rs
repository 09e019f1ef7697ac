use super::*;
use crate::{apps, model::window_dom_id};
use desktop_app_contract::{AppHost, AppMountContext, MenuSelection};
use system_ui::{
    WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::menus::WindowControlPanel;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let Some(record) = runtime
        .state
        .with_untracked(|state| state.window(&window_id).cloned())
    else {
        return ().into_view();
    };
    let dom_id = window_dom_id(&window_id);
    let id = store_value(window_id);

    let window = create_memo(move |_| {
        runtime
            .state
            .with(|state| state.window(&id.get_value()).cloned())
    });
    let focused = Signal::derive(move || {
        window.with(|w| w.as_ref().map(|w| w.is_focused).unwrap_or(false))
    });
    let hidden = Signal::derive(move || window.with(|w| w.as_ref().map(|w| !w.visible).unwrap_or(true)));
    let style = Signal::derive(move || {
        window.with(|w| match w {
            Some(w) => format!(
                "left:{}px;top:{}px;z-index:{};{}",
                w.position.x,
                w.position.y,
                w.z_index,
                if w.visible { "" } else { "display:none;" }
            ),
            None => "display:none;".to_string(),
        })
    });

    let on_frame_pointerdown = Callback::new(move |_: PointerEvent| {
        if !focused.get_untracked() {
            runtime.publish(ShellMessage::WindowPointerDown(id.get_value()));
        }
    });
    let on_title_pointerdown = Callback::new(move |ev: PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.publish(ShellMessage::WindowDragStarted {
            window_id: id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
        });
    });
    let minimize = Callback::new(move |_| {
        runtime.publish(ShellMessage::WindowMinimizeRequested(id.get_value()))
    });
    let close = Callback::new(move |_| {
        runtime.publish(ShellMessage::WindowCloseRequested(id.get_value()))
    });

    let menu_selection = create_rw_signal(None::<MenuSelection>);
    let control_panel = apps::control_panel(record.app).map(|panel| {
        view! { <WindowControlPanel window_dom_id=dom_id.clone() panel=panel selection=menu_selection /> }
    });
    let body = apps::mount_app(
        record.app,
        AppMountContext {
            window_id: record.id.0.clone(),
            title: record.title.clone(),
            focused_window: Signal::derive(move || {
                runtime.focus_broadcast.get().map(|focused| focused.0)
            }),
            menu_selection: menu_selection.into(),
            host: AppHost::new(Callback::new(move |_| {
                runtime.publish(ShellMessage::WindowCloseRequested(id.get_value()))
            })),
        },
    );

    view! {
        <WindowFrame
            id=dom_id
            window_id=record.id.0.clone()
            style=style
            aria_label=record.title.clone()
            focused=focused
            hidden=hidden
            on_pointerdown=on_frame_pointerdown
        >
            <WindowTitleBar on_pointerdown=on_title_pointerdown>
                <WindowTitle>{record.title.clone()}</WindowTitle>
                <WindowControls>
                    <WindowControlButton
                        aria_label="Minimize window"
                        layout_class="minimize"
                        on_click=minimize
                    />
                    <WindowControlButton
                        aria_label="Close window"
                        layout_class="close"
                        on_click=close
                    />
                </WindowControls>
            </WindowTitleBar>
            {control_panel}
            <WindowBody>{body}</WindowBody>
        </WindowFrame>
    }
    .into_view()
}
