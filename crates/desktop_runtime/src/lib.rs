//! Window and desktop coordination layer for the browser-hosted desktop shell.
//!
//! State lives in plain reducers ([`reducer`], [`icon_grid`]) that are unit-testable off the
//! browser; [`runtime_context`] wires them into Leptos signals and [`components`] renders them.

pub mod apps;
pub mod bus;
pub mod catalog;
pub mod components;
pub mod control_panel;
pub mod drag;
pub mod effect_executor;
pub mod host;
pub mod icon_grid;
pub mod model;
pub mod reducer;
pub mod runtime_context;
pub mod taskbar;
pub mod window_manager;

pub use bus::ShellMessage;
pub use components::{DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use icon_grid::{reduce_icon_grid, IconGridAction, IconGridEvent, IconGridState};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use taskbar::TaskbarRegistry;
