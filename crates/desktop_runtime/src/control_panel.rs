//! Open/closed state for a window's control-panel dropdown menus.

/// At most one dropdown is open at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ControlPanelState {
    open_menu: Option<String>,
}

impl ControlPanelState {
    /// Opens `menu_id`, or closes it when it is already open.
    pub fn toggle(&mut self, menu_id: &str) {
        if self.is_open(menu_id) {
            self.open_menu = None;
        } else {
            self.open(menu_id);
        }
    }

    /// Opens `menu_id`, closing any other open dropdown.
    pub fn open(&mut self, menu_id: &str) {
        self.open_menu = Some(menu_id.to_string());
    }

    /// Closes every dropdown. Safe to call when nothing is open.
    pub fn close_all(&mut self) {
        self.open_menu = None;
    }

    pub fn is_open(&self, menu_id: &str) -> bool {
        self.open_menu.as_deref() == Some(menu_id)
    }

    pub fn open_menu(&self) -> Option<&str> {
        self.open_menu.as_deref()
    }
}
