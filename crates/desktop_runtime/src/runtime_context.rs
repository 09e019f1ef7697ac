//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer containers, the runtime effect queue, and the message
//! bus entry point. UI composition stays in [`crate::components`].
#![allow(clippy::clone_on_copy)]

use leptos::*;

use crate::{
    bus::{route_message, Route, ShellMessage},
    catalog, effect_executor,
    host::DesktopHostContext,
    icon_grid::{reduce_icon_grid, IconGridAction, IconGridEvent, IconGridState},
    model::{DesktopState, InteractionState, WindowId},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
    taskbar::TaskbarRegistry,
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and publishing [`ShellMessage`] values.
pub struct DesktopRuntimeContext {
    /// Host hooks for measurement and deferred scheduling.
    pub host: StoredValue<DesktopHostContext>,
    /// Window registry owned by the desktop coordinator.
    pub state: RwSignal<DesktopState>,
    /// The single drag slot shared by windows and icons.
    pub interaction: RwSignal<InteractionState>,
    /// Icon placement and selection owned by the icon grid.
    pub icons: RwSignal<IconGridState>,
    /// Tab registry owned by the taskbar.
    pub taskbar: RwSignal<TaskbarRegistry>,
    /// Focus-change broadcast observed by every open window.
    pub focus_broadcast: RwSignal<Option<WindowId>>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Desktop reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Publishes a message on the shell bus. This is the only cross-component entry point.
    pub fn publish(&self, message: ShellMessage) {
        let host = self.host.get_value();
        let route = self
            .state
            .with_untracked(|state| route_message(message, &host, state));
        match route {
            Route::Desktop(action) => self.dispatch_action(action),
            Route::IconGrid(action) => self.dispatch_icon_action(action),
        }
    }

    fn dispatch_icon_action(&self, action: IconGridAction) {
        let mut grid = self.icons.get_untracked();
        let mut ui = self.interaction.get_untracked();
        let previous_grid = grid.clone();
        let previous_ui = ui.clone();

        let events = reduce_icon_grid(&mut grid, &mut ui, action);
        if grid != previous_grid {
            self.icons.set(grid);
        }
        if ui != previous_ui {
            self.interaction.set(ui);
        }

        for event in events {
            match event {
                IconGridEvent::Activated(activation) => self.publish(ShellMessage::IconActivated {
                    app_type: activation.app_type,
                    title: activation.title,
                }),
                IconGridEvent::Moved { .. } => {}
            }
        }
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let catalog = catalog::desktop_catalog();
    let host = store_value(DesktopHostContext::new(catalog.layout));
    let state = create_rw_signal(DesktopState::with_config(catalog.layout));
    let interaction = create_rw_signal(InteractionState::default());
    let icons = create_rw_signal(catalog.icon_grid());
    let taskbar = create_rw_signal(TaskbarRegistry::default());
    let focus_broadcast = create_rw_signal(None::<WindowId>);
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        icons,
        taskbar,
        focus_broadcast,
        effects,
        dispatch,
    };

    provide_context(runtime.clone());
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
