//! Shared window-manager transition helpers used by the desktop reducer.

use crate::model::{
    CascadeCursor, DesktopLayoutConfig, DesktopState, Viewport, WindowId, WindowPosition,
    WindowSize,
};

/// Raises `window_id` to the top of the stack and makes it the focused window.
///
/// Returns `false` without touching the z-order when the window is already focused, missing, or
/// hidden. Otherwise the window receives `highest_z_index + 1` and the focus broadcast is applied
/// to every record.
pub fn focus_window_internal(state: &mut DesktopState, window_id: &WindowId) -> bool {
    if state.focused.as_ref() == Some(window_id) {
        return false;
    }
    let next_z = state.highest_z_index.saturating_add(1);
    let Some(window) = state.windows.iter_mut().find(|w| &w.id == window_id) else {
        return false;
    };
    if !window.visible {
        return false;
    }

    window.z_index = next_z;
    state.highest_z_index = next_z;
    apply_focus(state, Some(window_id.clone()));
    true
}

/// Applies a focus-change broadcast: every record compares its own id against `focused`.
pub fn apply_focus(state: &mut DesktopState, focused: Option<WindowId>) {
    for window in &mut state.windows {
        window.is_focused = focused.as_ref() == Some(&window.id);
    }
    state.focused = focused;
}

/// Drops focus when the focused window is no longer a valid focus owner.
///
/// Returns `true` when focus was cleared.
pub fn release_focus_if(state: &mut DesktopState, window_id: &WindowId) -> bool {
    if state.focused.as_ref() != Some(window_id) {
        return false;
    }
    apply_focus(state, None);
    true
}

impl CascadeCursor {
    /// Computes the next cascading position for a freshly measured window and advances.
    ///
    /// The first window lands on the configured origin; each later one steps right and down.
    /// An axis whose next value would push the window past the visible desktop restarts at the
    /// configured restart offset. Overlap between windows is allowed.
    pub fn place(
        &mut self,
        size: WindowSize,
        viewport: Viewport,
        config: &DesktopLayoutConfig,
    ) -> WindowPosition {
        let mut next = match self.last {
            None => config.cascade_origin,
            Some(last) => last.offset(config.cascade_step.x, config.cascade_step.y),
        };

        let max_x = viewport.width - size.w;
        let max_y = viewport.height - (config.taskbar_height + size.h);
        if next.x > max_x {
            next.x = config.cascade_restart.x;
        }
        if next.y > max_y {
            next.y = config.cascade_restart.y;
        }

        self.last = Some(next);
        next
    }

    /// Position shown while a window is still waiting for its measurement pass.
    pub fn peek(&self, config: &DesktopLayoutConfig) -> WindowPosition {
        match self.last {
            None => config.cascade_origin,
            Some(last) => last.offset(config.cascade_step.x, config.cascade_step.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SIZE: WindowSize = WindowSize { w: 300, h: 200 };

    #[test]
    fn cascade_starts_at_origin_and_steps() {
        let config = DesktopLayoutConfig::default();
        let viewport = Viewport {
            width: 1280,
            height: 800,
        };
        let mut cursor = CascadeCursor::default();

        assert_eq!(cursor.place(SIZE, viewport, &config), WindowPosition::new(30, 30));
        assert_eq!(cursor.place(SIZE, viewport, &config), WindowPosition::new(50, 58));
        assert_eq!(cursor.place(SIZE, viewport, &config), WindowPosition::new(70, 86));
    }

    #[test]
    fn cascade_wraps_each_axis_independently() {
        let config = DesktopLayoutConfig::default();
        // max_y = 400 - (32 + 200) = 168, max_x = 1000 - 300 = 700
        let viewport = Viewport {
            width: 1000,
            height: 400,
        };
        let mut cursor = CascadeCursor {
            last: Some(WindowPosition::new(100, 150)),
        };

        assert_eq!(cursor.place(SIZE, viewport, &config), WindowPosition::new(120, 50));

        let mut cursor = CascadeCursor {
            last: Some(WindowPosition::new(690, 60)),
        };
        assert_eq!(cursor.place(SIZE, viewport, &config), WindowPosition::new(50, 88));
    }

    #[test]
    fn peek_does_not_advance() {
        let config = DesktopLayoutConfig::default();
        let cursor = CascadeCursor {
            last: Some(WindowPosition::new(30, 30)),
        };
        assert_eq!(cursor.peek(&config), WindowPosition::new(50, 58));
        assert_eq!(cursor.peek(&config), WindowPosition::new(50, 58));
    }
}
