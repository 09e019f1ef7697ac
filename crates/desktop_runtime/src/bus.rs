//! Typed shell messages and their routing to the owning reducer.
//!
//! Components never mutate each other's state. They publish a [`ShellMessage`] through
//! [`crate::runtime_context::DesktopRuntimeContext::publish`], and [`route_message`] decides which
//! owner handles it.

use leptos::logging;

use crate::{
    host::DesktopHostContext,
    icon_grid::IconGridAction,
    model::{
        window_dom_id, AppKind, DesktopState, DragEndReason, PointerPosition, WindowId, WindowSize,
    },
    reducer::DesktopAction,
};

#[derive(Debug, Clone, PartialEq)]
/// Cross-component messages published by shell components.
pub enum ShellMessage {
    /// An icon was double-activated.
    IconActivated { app_type: String, title: String },
    /// A taskbar tab was clicked.
    TabClicked(WindowId),
    /// Pointer pressed anywhere inside a window frame.
    WindowPointerDown(WindowId),
    /// Close control pressed, or the hosted app asked to close.
    WindowCloseRequested(WindowId),
    WindowMinimizeRequested(WindowId),
    /// Pointer pressed on a window's title bar.
    WindowDragStarted {
        window_id: WindowId,
        pointer: PointerPosition,
    },
    PointerMoved(PointerPosition),
    PointerReleased,
    /// Pointer left the desktop surface.
    PointerLeftSurface,
    Icon(IconGridAction),
}

#[derive(Debug, Clone, PartialEq)]
/// Owner selected for a message.
pub enum Route {
    Desktop(DesktopAction),
    IconGrid(IconGridAction),
}

/// Maps a message onto the action of the component that owns the affected state.
///
/// Drag starts are enriched with the frame's measured size and the current viewport so the
/// reducer can compute drag bounds without touching the DOM.
pub fn route_message(
    message: ShellMessage,
    host: &DesktopHostContext,
    state: &DesktopState,
) -> Route {
    match message {
        ShellMessage::IconActivated { app_type, title } => {
            if AppKind::from_tag(&app_type).is_none() {
                logging::warn!("unrecognized app type `{app_type}`; opening a blank window");
            }
            Route::Desktop(DesktopAction::ActivateIcon { app_type, title })
        }
        ShellMessage::TabClicked(window_id) => {
            Route::Desktop(DesktopAction::ToggleTab { window_id })
        }
        ShellMessage::WindowPointerDown(window_id) => {
            Route::Desktop(DesktopAction::FocusWindow { window_id })
        }
        ShellMessage::WindowCloseRequested(window_id) => {
            Route::Desktop(DesktopAction::CloseWindow { window_id })
        }
        ShellMessage::WindowMinimizeRequested(window_id) => {
            Route::Desktop(DesktopAction::MinimizeWindow { window_id })
        }
        ShellMessage::WindowDragStarted { window_id, pointer } => {
            let frame_size = host
                .measure_element(&window_dom_id(&window_id))
                .or_else(|| state.window(&window_id).and_then(|w| w.size))
                .unwrap_or(WindowSize { w: 0, h: 0 });
            Route::Desktop(DesktopAction::BeginMove {
                window_id,
                pointer,
                frame_size,
                viewport: host.viewport(),
            })
        }
        ShellMessage::PointerMoved(pointer) => {
            Route::Desktop(DesktopAction::UpdateMove { pointer })
        }
        ShellMessage::PointerReleased => Route::Desktop(DesktopAction::EndMove {
            reason: DragEndReason::PointerUp,
        }),
        ShellMessage::PointerLeftSurface => Route::Desktop(DesktopAction::EndMove {
            reason: DragEndReason::PointerLeft,
        }),
        ShellMessage::Icon(action) => Route::IconGrid(action),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{IconId, Viewport};

    #[test]
    fn window_messages_route_to_the_desktop_reducer() {
        let host = DesktopHostContext::default();
        let state = DesktopState::default();
        let id = WindowId("w1".to_string());

        assert_eq!(
            route_message(ShellMessage::TabClicked(id.clone()), &host, &state),
            Route::Desktop(DesktopAction::ToggleTab {
                window_id: id.clone()
            })
        );
        assert_eq!(
            route_message(ShellMessage::WindowPointerDown(id.clone()), &host, &state),
            Route::Desktop(DesktopAction::FocusWindow {
                window_id: id.clone()
            })
        );
        assert_eq!(
            route_message(ShellMessage::PointerLeftSurface, &host, &state),
            Route::Desktop(DesktopAction::EndMove {
                reason: DragEndReason::PointerLeft
            })
        );
    }

    #[test]
    fn drag_start_carries_measured_frame_and_viewport() {
        let host = DesktopHostContext::default();
        let state = DesktopState::default();
        let id = WindowId("w3".to_string());
        let pointer = PointerPosition { x: 12, y: 40 };

        assert_eq!(
            route_message(
                ShellMessage::WindowDragStarted {
                    window_id: id.clone(),
                    pointer
                },
                &host,
                &state
            ),
            Route::Desktop(DesktopAction::BeginMove {
                window_id: id,
                pointer,
                frame_size: WindowSize { w: 400, h: 300 },
                viewport: Viewport::default(),
            })
        );
    }

    #[test]
    fn icon_messages_route_to_the_grid() {
        let host = DesktopHostContext::default();
        let state = DesktopState::default();
        let action = IconGridAction::Select {
            icon_id: IconId::new("chat"),
        };
        assert_eq!(
            route_message(ShellMessage::Icon(action.clone()), &host, &state),
            Route::IconGrid(action)
        );
    }
}
