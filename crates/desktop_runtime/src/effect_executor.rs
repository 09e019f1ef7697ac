//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::{
    host::FALLBACK_WINDOW_SIZE,
    model::{window_dom_id, WindowId},
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the queue before processing so nested dispatches enqueue a fresh batch instead of
    // being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_runtime_effect(runtime, effect);
        }
    });
}

/// Applies one effect through the component that owns the affected state.
pub fn run_runtime_effect(runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::MeasureAndPlaceWindow(window_id) => measure_and_place(runtime, window_id),
        RuntimeEffect::BroadcastFocus(focused) => runtime.focus_broadcast.set(focused),
        RuntimeEffect::AddTaskbarTab { window_id, label } => {
            runtime
                .taskbar
                .update(|taskbar| taskbar.add_tab(window_id, label));
        }
        RuntimeEffect::RemoveTaskbarTab(window_id) => {
            runtime.taskbar.update(|taskbar| {
                taskbar.remove_tab(&window_id);
            });
        }
    }
}

fn measure_and_place(runtime: DesktopRuntimeContext, window_id: WindowId) {
    let host = runtime.host.get_value();
    host.after_layout(move || {
        // Closed windows are dropped; hidden ones are placed again when their tab shows them.
        let visible = runtime
            .state
            .with_untracked(|state| state.window(&window_id).map(|window| window.visible));
        if visible != Some(true) {
            return;
        }

        let host = runtime.host.get_value();
        let size = host
            .measure_element(&window_dom_id(&window_id))
            .unwrap_or_else(|| {
                logging::warn!("window `{window_id}` was not laid out; placing with fallback size");
                FALLBACK_WINDOW_SIZE
            });
        runtime.dispatch_action(DesktopAction::PlaceWindow {
            window_id,
            size,
            viewport: host.viewport(),
        });
    });
}
