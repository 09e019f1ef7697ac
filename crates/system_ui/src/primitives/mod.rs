//! Shell and overlay primitives.

use leptos::ev::MouseEvent;
use leptos::*;

mod overlays;
mod shell;

pub use overlays::{MenuBar, MenuBarButton, MenuItem, MenuSurface};
pub use shell::{
    ClockButton, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, Taskbar,
    TaskbarButton, TaskbarSection, TaskbarStartBadge, WindowBody, WindowControlButton,
    WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn forward<E>(callback: Option<&Callback<E>>, ev: E) {
    if let Some(callback) = callback {
        callback.call(ev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_non_empty() {
        assert_eq!(merge_layout_class("ui-taskbar", None), "ui-taskbar");
        assert_eq!(merge_layout_class("ui-taskbar", Some("")), "ui-taskbar");
        assert_eq!(
            merge_layout_class("ui-taskbar", Some("compact")),
            "ui-taskbar compact"
        );
    }

    #[test]
    fn bool_token_matches_dom_attribute_values() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }
}
