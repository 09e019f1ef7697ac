use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque window identifier, unique for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

impl WindowId {
    /// Builds the id for the `seq`-th window opened in this session.
    pub fn from_sequence(seq: u64) -> Self {
        Self(format!("w{seq}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Desktop icon identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IconId(pub String);

impl IconId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Hosted application kinds the shell knows how to mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppKind {
    MemoryGame,
    Chat,
    Quiz,
    ProductKey,
    /// Empty window used for unrecognized app types.
    Blank,
}

impl AppKind {
    pub const ALL: [AppKind; 5] = [
        Self::MemoryGame,
        Self::Chat,
        Self::Quiz,
        Self::ProductKey,
        Self::Blank,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Self::MemoryGame => "memory-game",
            Self::Chat => "chat",
            Self::Quiz => "quiz",
            Self::ProductKey => "product-key",
            Self::Blank => "blank",
        }
    }

    /// Parses a catalog tag. Unknown tags return `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Resolves a tag, falling back to [`AppKind::Blank`] so a request is never dropped.
    pub fn resolve(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or(Self::Blank)
    }

    pub fn default_title(self) -> &'static str {
        match self {
            Self::MemoryGame => "Memory Game",
            Self::Chat => "Chat",
            Self::Quiz => "Quiz",
            Self::ProductKey => "Activate Windows",
            Self::Blank => "Untitled Window",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Rendered window size, known only after the frame has been laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

/// Browser inner size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowPhase {
    /// Mounted, waiting for its first layout pass before cascading placement.
    Opening,
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app: AppKind,
    pub title: String,
    pub position: WindowPosition,
    pub size: Option<WindowSize>,
    pub z_index: u32,
    pub visible: bool,
    pub is_focused: bool,
    pub phase: WindowPhase,
}

impl WindowRecord {
    /// DOM id of the window frame element.
    pub fn dom_id(&self) -> String {
        window_dom_id(&self.id)
    }
}

pub fn window_dom_id(window_id: &WindowId) -> String {
    format!("desktop-window-{}", window_id.0)
}

/// Fixed pixel geometry shared by placement and drag clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopLayoutConfig {
    pub taskbar_height: i32,
    pub title_bar_height: i32,
    pub cascade_origin: WindowPosition,
    pub cascade_step: WindowPosition,
    pub cascade_restart: WindowPosition,
    pub icon_cell_width: i32,
    pub icon_cell_height: i32,
    pub icon_column_gap: i32,
    pub icon_row_gap: i32,
    pub icon_grid_padding: i32,
}

impl Default for DesktopLayoutConfig {
    fn default() -> Self {
        Self {
            taskbar_height: 32,
            title_bar_height: 28,
            cascade_origin: WindowPosition::new(30, 30),
            cascade_step: WindowPosition::new(20, 28),
            cascade_restart: WindowPosition::new(50, 50),
            icon_cell_width: 80,
            icon_cell_height: 75,
            icon_column_gap: 5,
            icon_row_gap: 10,
            icon_grid_padding: 5,
        }
    }
}

/// Position of the most recent cascading placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CascadeCursor {
    pub last: Option<WindowPosition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopState {
    pub config: DesktopLayoutConfig,
    pub next_window_seq: u64,
    /// Highest z-index handed out so far; never decreases.
    pub highest_z_index: u32,
    /// Windows in open order.
    pub windows: Vec<WindowRecord>,
    pub focused: Option<WindowId>,
    pub cascade: CascadeCursor,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::with_config(DesktopLayoutConfig::default())
    }
}

impl DesktopState {
    pub fn with_config(config: DesktopLayoutConfig) -> Self {
        Self {
            config,
            next_window_seq: 1,
            highest_z_index: 1,
            windows: Vec::new(),
            focused: None,
            cascade: CascadeCursor::default(),
        }
    }

    pub fn focused_window_id(&self) -> Option<&WindowId> {
        self.focused.as_ref()
    }

    pub fn window(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    pub fn window_ids(&self) -> Vec<WindowId> {
        self.windows.iter().map(|w| w.id.clone()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// 1-based icon grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCell {
    pub column: u32,
    pub row: u32,
}

impl GridCell {
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconCell {
    pub id: IconId,
    pub label: String,
    pub icon_ref: String,
    /// Catalog app tag, resolved with [`AppKind::resolve`] on activation.
    pub app_type: String,
    /// Title for windows opened from this icon.
    pub window_title: String,
    pub cell: GridCell,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragSubject {
    Window(WindowId),
    Icon(IconId),
}

/// Inclusive upper bounds for a dragged window's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragBounds {
    pub max_x: i32,
    pub max_y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOrigin {
    Window(WindowPosition),
    Icon(GridCell),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub subject: DragSubject,
    pub origin: DragOrigin,
    pub pointer_offset: PointerPosition,
    pub bounds: Option<DragBounds>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEndReason {
    PointerUp,
    /// Pointer left the tracked surface; no final position is committed.
    PointerLeft,
}

/// Single process-wide interaction slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub drag: Option<DragSession>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskbarEntry {
    pub window_id: WindowId,
    pub label: String,
}

impl TaskbarEntry {
    /// DOM id of the tab element.
    pub fn dom_id(&self) -> String {
        format!("taskbar-tab-{}", self.window_id.0)
    }
}
