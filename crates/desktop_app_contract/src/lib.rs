//! Shared contract types between the desktop coordination layer and hosted applications.
//!
//! A hosted application is opaque to the window manager: it receives a title and a stable
//! window id at mount time, owns its body view completely, and talks back to the shell through
//! a single upward signal (close). The shell pushes two things down: the focus-change broadcast
//! and, for apps that declare a control panel, the most recent menu selection.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{Callable, Callback, Signal, SignalGetUntracked, SignalWith, View};
use serde::{Deserialize, Serialize};

/// Stable identifier for a runtime-managed window.
pub type WindowRuntimeId = String;

#[derive(Debug, Clone, Copy)]
/// Upward channel from a hosted app to the shell that owns its window.
pub struct AppHost {
    close: Callback<()>,
}

impl AppHost {
    /// Creates a host handle that forwards close requests to `close`.
    pub fn new(close: Callback<()>) -> Self {
        Self { close }
    }

    /// Asks the shell to close the window hosting this app.
    ///
    /// The app never tears itself down; the coordinator decides and removes the window.
    pub fn request_close(&self) {
        self.close.call(());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// One entry in a control-panel dropdown.
pub struct ControlMenuItem {
    /// Stable item id reported back to the app on selection.
    pub id: String,
    /// Display label.
    pub label: String,
}

impl ControlMenuItem {
    /// Creates a menu item.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A single dropdown in a control panel.
pub struct ControlMenu {
    /// Stable menu id.
    pub id: String,
    /// Label rendered on the menu bar.
    pub label: String,
    /// Dropdown entries in display order.
    pub items: Vec<ControlMenuItem>,
}

impl ControlMenu {
    /// Creates an empty dropdown.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            items: Vec::new(),
        }
    }

    /// Appends an item and returns the menu.
    pub fn with_item(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.items.push(ControlMenuItem::new(id, label));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Optional menu region a hosted app renders above its body.
pub struct AppControlPanel {
    /// Dropdowns in menu-bar order.
    pub menus: Vec<ControlMenu>,
}

impl AppControlPanel {
    /// Appends a dropdown and returns the panel.
    pub fn with_menu(mut self, menu: ControlMenu) -> Self {
        self.menus.push(menu);
        self
    }

    /// Looks up a dropdown by id.
    pub fn menu(&self, menu_id: &str) -> Option<&ControlMenu> {
        self.menus.iter().find(|menu| menu.id == menu_id)
    }

    /// Looks up a dropdown item, returning `None` when either id is unknown.
    pub fn item(&self, menu_id: &str, item_id: &str) -> Option<&ControlMenuItem> {
        self.menu(menu_id)?
            .items
            .iter()
            .find(|item| item.id == item_id)
    }

    /// Returns `true` when no dropdowns are declared.
    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Menu selection delivered to the hosted app.
pub struct MenuSelection {
    /// Dropdown the item belongs to.
    pub menu_id: String,
    /// Selected item id.
    pub item_id: String,
    /// Per-window sequence number so repeated selections of the same item are observable.
    pub sequence: u64,
}

#[derive(Clone)]
/// Runtime-provided context passed to a hosted app when its window body mounts.
pub struct AppMountContext {
    /// Stable runtime window id.
    pub window_id: WindowRuntimeId,
    /// Window title supplied by the shell.
    pub title: String,
    /// Focus-change broadcast carrying the currently focused window id, if any.
    pub focused_window: Signal<Option<WindowRuntimeId>>,
    /// Latest control-panel selection for this window.
    pub menu_selection: Signal<Option<MenuSelection>>,
    /// Upward channel to the shell.
    pub host: AppHost,
}

impl AppMountContext {
    /// Returns a derived signal that is `true` while this window holds focus.
    ///
    /// Apps use this to decide whether to react to global keyboard input.
    pub fn is_focused(&self) -> Signal<bool> {
        let focused_window = self.focused_window;
        let window_id = self.window_id.clone();
        Signal::derive(move || {
            focused_window.with(|focused| focused.as_deref() == Some(window_id.as_str()))
        })
    }

    /// Returns the latest menu selection without subscribing to it.
    pub fn current_selection(&self) -> Option<MenuSelection> {
        self.menu_selection.get_untracked()
    }
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

/// Static control-panel factory used by the runtime registry.
pub type AppControlPanelFn = fn() -> AppControlPanel;

#[derive(Debug, Clone, Copy)]
/// Mountable app module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
    control_panel_fn: Option<AppControlPanelFn>,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self {
            mount_fn,
            control_panel_fn: None,
        }
    }

    /// Declares a control panel for this module.
    pub const fn with_control_panel(mut self, control_panel_fn: AppControlPanelFn) -> Self {
        self.control_panel_fn = Some(control_panel_fn);
        self
    }

    /// Returns the declared control panel, if the module has one.
    pub fn control_panel(self) -> Option<AppControlPanel> {
        self.control_panel_fn
            .map(|build| build())
            .filter(|panel| !panel.is_empty())
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}
