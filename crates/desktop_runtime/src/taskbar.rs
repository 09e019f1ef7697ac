//! Taskbar tab registry and clock formatting.
//!
//! The registry mirrors the set of open windows: one tab per window, in open order. It is only
//! mutated by the effect executor in response to `AddTaskbarTab`/`RemoveTaskbarTab` effects, so
//! it never drifts from the coordinator's window map.

use serde::{Deserialize, Serialize};

use crate::model::{TaskbarEntry, WindowId};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskbarRegistry {
    entries: Vec<TaskbarEntry>,
}

impl TaskbarRegistry {
    /// Appends a tab for `window_id`. Re-adding a known id only updates its label.
    pub fn add_tab(&mut self, window_id: WindowId, label: impl Into<String>) {
        let label = label.into();
        if let Some(entry) = self.entries.iter_mut().find(|e| e.window_id == window_id) {
            entry.label = label;
            return;
        }
        self.entries.push(TaskbarEntry { window_id, label });
    }

    /// Removes the tab for `window_id`. Returns `false` when no such tab exists.
    pub fn remove_tab(&mut self, window_id: &WindowId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| &entry.window_id != window_id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[TaskbarEntry] {
        &self.entries
    }

    pub fn ids(&self) -> Vec<WindowId> {
        self.entries.iter().map(|e| e.window_id.clone()).collect()
    }

    pub fn contains(&self, window_id: &WindowId) -> bool {
        self.entries.iter().any(|e| &e.window_id == window_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// DOM id of the tab for `window_id`, if one is registered.
    pub fn dom_id(&self, window_id: &WindowId) -> Option<String> {
        self.entries
            .iter()
            .find(|e| &e.window_id == window_id)
            .map(TaskbarEntry::dom_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockConfig {
    pub use_24_hour: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self { use_24_hour: true }
    }
}

/// Local wall-clock reading used by the taskbar clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockSnapshot {
    pub hour: u32,
    pub minute: u32,
}

impl ClockSnapshot {
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::default()
        }
    }
}

/// Leading taskbar badge. Decorative only; it opens nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartBadge {
    pub label: String,
    pub icon_ref: String,
}

impl Default for StartBadge {
    fn default() -> Self {
        Self {
            label: "start".to_string(),
            icon_ref: "assets/icons/logo.svg".to_string(),
        }
    }
}

/// Formats `snapshot` as `HH:MM`, or `hh:MM AM`/`PM` in 12-hour mode.
pub fn format_clock(snapshot: ClockSnapshot, config: ClockConfig) -> String {
    if config.use_24_hour {
        return format!("{:02}:{:02}", snapshot.hour, snapshot.minute);
    }
    let hour = match snapshot.hour % 12 {
        0 => 12,
        hour => hour,
    };
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    format!("{:02}:{:02} {}", hour, snapshot.minute, suffix)
}
