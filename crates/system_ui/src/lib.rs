//! Shared UI primitive library for the desktop shell.
//!
//! The crate owns the Leptos primitives the coordination layer renders (desktop surface, icon
//! grid, window frame, taskbar, control-panel menus) and the stable `data-ui-*` DOM contract the
//! shell stylesheet targets. Primitives hold no desktop state; callers pass values and callbacks.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    ClockButton, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, MenuBar,
    MenuBarButton, MenuItem, MenuSurface, Taskbar, TaskbarButton, TaskbarSection,
    TaskbarStartBadge, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};

/// Convenience imports for crates composing the shell.
pub mod prelude {
    pub use crate::{
        ClockButton, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, MenuBar,
        MenuBarButton, MenuItem, MenuSurface, Taskbar, TaskbarButton, TaskbarSection,
        TaskbarStartBadge, WindowBody, WindowControlButton, WindowControls, WindowFrame,
        WindowTitle, WindowTitleBar,
    };
}
