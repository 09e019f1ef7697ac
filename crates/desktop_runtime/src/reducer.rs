//! Reducer actions, side-effect intents, and transition logic for the desktop coordinator.

use thiserror::Error;

use crate::{
    drag::DragCoordinator,
    model::{
        AppKind, DesktopState, DragEndReason, DragSubject, InteractionState, PointerPosition,
        Viewport, WindowId, WindowPhase, WindowRecord, WindowSize,
    },
    window_manager::{apply_focus, focus_window_internal, release_focus_if},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a new window for an activated desktop icon.
    ActivateIcon {
        /// Catalog app tag. Unknown tags open a blank window.
        app_type: String,
        /// Window title; empty falls back to the app's default title.
        title: String,
    },
    /// Apply the cascading placement once a new window has been measured.
    PlaceWindow {
        window_id: WindowId,
        size: WindowSize,
        viewport: Viewport,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        window_id: WindowId,
    },
    /// Taskbar tab click: flip visibility, focusing when the window comes back.
    ToggleTab {
        window_id: WindowId,
    },
    MinimizeWindow {
        window_id: WindowId,
    },
    /// Close a window by id. Closing an absent window is a no-op.
    CloseWindow {
        window_id: WindowId,
    },
    /// Begin dragging a window by its title bar.
    BeginMove {
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
        /// Measured frame size, used for the horizontal bound.
        frame_size: WindowSize,
        viewport: Viewport,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove {
        reason: DragEndReason,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the runtime to execute.
pub enum RuntimeEffect {
    /// Measure the freshly mounted frame after layout, then dispatch `PlaceWindow`.
    MeasureAndPlaceWindow(WindowId),
    /// Deliver the focus-change broadcast to every open window.
    BroadcastFocus(Option<WindowId>),
    AddTaskbarTab {
        window_id: WindowId,
        label: String,
    },
    RemoveTaskbarTab(WindowId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference an unusable window.
pub enum ReducerError {
    /// The target window id was not found in the current state.
    #[error("window `{0}` not found")]
    WindowNotFound(WindowId),
    /// The target window is minimized and cannot take focus or be dragged.
    #[error("window `{0}` is hidden")]
    WindowHidden(WindowId),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// State is left untouched whenever an error is returned.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action (other than close) references a window
/// that is not present, and [`ReducerError::WindowHidden`] when focusing or dragging a minimized
/// window.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::ActivateIcon { app_type, title } => {
            let app = AppKind::resolve(&app_type);
            let window_id = next_window_id(state);
            let title = if title.trim().is_empty() {
                app.default_title().to_string()
            } else {
                title
            };
            let z_index = state.highest_z_index.saturating_add(1);
            state.highest_z_index = z_index;
            state.windows.push(WindowRecord {
                id: window_id.clone(),
                app,
                title: title.clone(),
                position: state.cascade.peek(&state.config),
                size: None,
                z_index,
                visible: true,
                is_focused: false,
                phase: WindowPhase::Opening,
            });
            apply_focus(state, Some(window_id.clone()));

            effects.push(RuntimeEffect::AddTaskbarTab {
                window_id: window_id.clone(),
                label: title,
            });
            effects.push(RuntimeEffect::BroadcastFocus(Some(window_id.clone())));
            effects.push(RuntimeEffect::MeasureAndPlaceWindow(window_id));
        }
        DesktopAction::PlaceWindow {
            window_id,
            size,
            viewport,
        } => {
            let config = state.config;
            let index = find_window_index(state, &window_id)?;
            // Hidden frames measure as 0x0; placement waits until the tab shows them again.
            let window = &state.windows[index];
            if window.phase != WindowPhase::Opening || !window.visible {
                return Ok(effects);
            }
            let position = state.cascade.place(size, viewport, &config);
            let window = &mut state.windows[index];
            window.position = position;
            window.size = Some(size);
            window.phase = WindowPhase::Open;
        }
        DesktopAction::FocusWindow { window_id } => {
            let index = find_window_index(state, &window_id)?;
            if !state.windows[index].visible {
                return Err(ReducerError::WindowHidden(window_id));
            }
            if focus_window_internal(state, &window_id) {
                effects.push(RuntimeEffect::BroadcastFocus(Some(window_id)));
            }
        }
        DesktopAction::ToggleTab { window_id } => {
            let index = find_window_index(state, &window_id)?;
            let visible = !state.windows[index].visible;
            state.windows[index].visible = visible;

            if visible {
                let awaiting_placement = state.windows[index].phase == WindowPhase::Opening;
                if focus_window_internal(state, &window_id) {
                    effects.push(RuntimeEffect::BroadcastFocus(Some(window_id.clone())));
                }
                if awaiting_placement {
                    effects.push(RuntimeEffect::MeasureAndPlaceWindow(window_id));
                }
            } else {
                hide_window_cleanup(state, interaction, &window_id, &mut effects);
            }
        }
        DesktopAction::MinimizeWindow { window_id } => {
            let index = find_window_index(state, &window_id)?;
            if state.windows[index].visible {
                state.windows[index].visible = false;
                hide_window_cleanup(state, interaction, &window_id, &mut effects);
            }
        }
        DesktopAction::CloseWindow { window_id } => {
            let Ok(index) = find_window_index(state, &window_id) else {
                return Ok(effects);
            };
            state.windows.remove(index);
            DragCoordinator::new(interaction).end_if(&DragSubject::Window(window_id.clone()));
            if release_focus_if(state, &window_id) {
                effects.push(RuntimeEffect::BroadcastFocus(None));
            }
            effects.push(RuntimeEffect::RemoveTaskbarTab(window_id));
        }
        DesktopAction::BeginMove {
            window_id,
            pointer,
            frame_size,
            viewport,
        } => {
            let index = find_window_index(state, &window_id)?;
            let window = &state.windows[index];
            if !window.visible {
                return Err(ReducerError::WindowHidden(window_id));
            }
            let origin = window.position;
            DragCoordinator::new(interaction).begin_window(
                window_id,
                pointer,
                origin,
                frame_size,
                viewport,
                &state.config,
            );
        }
        DesktopAction::UpdateMove { pointer } => {
            let coordinator = DragCoordinator::new(interaction);
            let Some((window_id, position)) = coordinator.window_position_for(pointer) else {
                return Ok(effects);
            };
            match state.windows.iter_mut().find(|w| w.id == window_id) {
                Some(window) => window.position = position,
                None => {
                    DragCoordinator::new(interaction).end(DragEndReason::PointerLeft);
                }
            }
        }
        DesktopAction::EndMove { reason } => {
            let mut coordinator = DragCoordinator::new(interaction);
            if coordinator.window_subject().is_some() {
                coordinator.end(reason);
            }
        }
    }

    Ok(effects)
}

fn next_window_id(state: &mut DesktopState) -> WindowId {
    let id = WindowId::from_sequence(state.next_window_seq);
    state.next_window_seq = state.next_window_seq.saturating_add(1);
    id
}

fn find_window_index(state: &DesktopState, window_id: &WindowId) -> Result<usize, ReducerError> {
    state
        .windows
        .iter()
        .position(|w| &w.id == window_id)
        .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))
}

fn hide_window_cleanup(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    window_id: &WindowId,
    effects: &mut Vec<RuntimeEffect>,
) {
    DragCoordinator::new(interaction).end_if(&DragSubject::Window(window_id.clone()));
    if release_focus_if(state, window_id) {
        effects.push(RuntimeEffect::BroadcastFocus(None));
    }
}
