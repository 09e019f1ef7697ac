//! Built-in hosted-application registry.
//!
//! The window manager only sees [`AppModule`] values: a mount function and an optional control
//! panel. What an app renders inside its body is its own business.

mod placeholders;

use desktop_app_contract::{AppControlPanel, AppModule, AppMountContext};
use leptos::*;

use crate::model::AppKind;

#[derive(Debug, Clone, Copy)]
pub struct AppDescriptor {
    pub kind: AppKind,
    pub module: AppModule,
}

const APP_REGISTRY: [AppDescriptor; 5] = [
    AppDescriptor {
        kind: AppKind::MemoryGame,
        module: AppModule::new(placeholders::mount_memory_game)
            .with_control_panel(placeholders::memory_game_control_panel),
    },
    AppDescriptor {
        kind: AppKind::Chat,
        module: AppModule::new(placeholders::mount_chat),
    },
    AppDescriptor {
        kind: AppKind::Quiz,
        module: AppModule::new(placeholders::mount_quiz),
    },
    AppDescriptor {
        kind: AppKind::ProductKey,
        module: AppModule::new(placeholders::mount_product_key),
    },
    AppDescriptor {
        kind: AppKind::Blank,
        module: AppModule::new(placeholders::mount_blank),
    },
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

/// Registry entry for `kind`. Every [`AppKind`] is registered; a missing entry falls back to the
/// blank window.
pub fn app_descriptor(kind: AppKind) -> AppDescriptor {
    app_registry()
        .iter()
        .copied()
        .find(|descriptor| descriptor.kind == kind)
        .unwrap_or(AppDescriptor {
            kind: AppKind::Blank,
            module: AppModule::new(placeholders::mount_blank),
        })
}

pub fn control_panel(kind: AppKind) -> Option<AppControlPanel> {
    app_descriptor(kind).module.control_panel()
}

/// Mounts the body view for `kind`.
pub fn mount_app(kind: AppKind, context: AppMountContext) -> View {
    app_descriptor(kind).module.mount(context)
}
