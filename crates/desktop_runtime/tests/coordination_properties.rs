use desktop_runtime::{
    icon_grid::GridMetrics, reduce_desktop, reduce_icon_grid, DesktopAction, DesktopState,
    DragEndReason, GridCell, IconCell, IconGridAction, IconGridState, IconId, InteractionState,
    PointerPosition, RuntimeEffect, TaskbarRegistry, Viewport, WindowId, WindowSize,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const APP_TAGS: [&str; 6] = ["memory-game", "chat", "quiz", "product-key", "paint", ""];
const VIEWPORT: Viewport = Viewport {
    width: 1280,
    height: 800,
};

/// Headless stand-in for the runtime: reducer state plus the effect owners.
#[derive(Default)]
struct Desktop {
    state: DesktopState,
    interaction: InteractionState,
    taskbar: TaskbarRegistry,
    broadcast: Option<WindowId>,
    opened: Vec<WindowId>,
}

impl Desktop {
    fn dispatch(&mut self, action: DesktopAction) -> bool {
        let Ok(effects) = reduce_desktop(&mut self.state, &mut self.interaction, action) else {
            return false;
        };
        for effect in effects {
            match effect {
                RuntimeEffect::MeasureAndPlaceWindow(window_id) => {
                    self.dispatch(DesktopAction::PlaceWindow {
                        window_id,
                        size: WindowSize { w: 320, h: 240 },
                        viewport: VIEWPORT,
                    });
                }
                RuntimeEffect::BroadcastFocus(focused) => self.broadcast = focused,
                RuntimeEffect::AddTaskbarTab { window_id, label } => {
                    self.opened.push(window_id.clone());
                    self.taskbar.add_tab(window_id, label)
                }
                RuntimeEffect::RemoveTaskbarTab(window_id) => {
                    self.taskbar.remove_tab(&window_id);
                }
            }
        }
        true
    }

    fn pick(&self, index: usize) -> WindowId {
        if self.state.windows.is_empty() {
            return WindowId("w0".to_string());
        }
        self.state.windows[index % self.state.windows.len()].id.clone()
    }
}

#[derive(Debug, Clone)]
enum Op {
    Open(usize),
    Focus(usize),
    Toggle(usize),
    Minimize(usize),
    Close(usize),
    CloseTwice(usize),
    Drag(usize, i32, i32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..APP_TAGS.len()).prop_map(Op::Open),
        2 => any::<usize>().prop_map(Op::Focus),
        1 => any::<usize>().prop_map(Op::Toggle),
        1 => any::<usize>().prop_map(Op::Minimize),
        1 => any::<usize>().prop_map(Op::Close),
        1 => any::<usize>().prop_map(Op::CloseTwice),
        1 => (any::<usize>(), -200i32..2000, -200i32..2000).prop_map(|(i, x, y)| Op::Drag(i, x, y)),
    ]
}

fn apply(desktop: &mut Desktop, op: Op) {
    match op {
        Op::Open(tag) => {
            desktop.dispatch(DesktopAction::ActivateIcon {
                app_type: APP_TAGS[tag].to_string(),
                title: String::new(),
            });
        }
        Op::Focus(i) => {
            let window_id = desktop.pick(i);
            desktop.dispatch(DesktopAction::FocusWindow { window_id });
        }
        Op::Toggle(i) => {
            let window_id = desktop.pick(i);
            desktop.dispatch(DesktopAction::ToggleTab { window_id });
        }
        Op::Minimize(i) => {
            let window_id = desktop.pick(i);
            desktop.dispatch(DesktopAction::MinimizeWindow { window_id });
        }
        Op::Close(i) => {
            let window_id = desktop.pick(i);
            desktop.dispatch(DesktopAction::CloseWindow { window_id });
        }
        Op::CloseTwice(i) => {
            let window_id = desktop.pick(i);
            desktop.dispatch(DesktopAction::CloseWindow {
                window_id: window_id.clone(),
            });
            assert!(desktop.dispatch(DesktopAction::CloseWindow { window_id }));
        }
        Op::Drag(i, x, y) => {
            let window_id = desktop.pick(i);
            let origin = desktop.state.window(&window_id).map(|w| w.position);
            if let Some(origin) = origin {
                desktop.dispatch(DesktopAction::BeginMove {
                    window_id,
                    pointer: PointerPosition {
                        x: origin.x + 5,
                        y: origin.y + 5,
                    },
                    frame_size: WindowSize { w: 320, h: 240 },
                    viewport: VIEWPORT,
                });
                desktop.dispatch(DesktopAction::UpdateMove {
                    pointer: PointerPosition { x, y },
                });
                desktop.dispatch(DesktopAction::EndMove {
                    reason: DragEndReason::PointerUp,
                });
            }
        }
    }
}

fn grid_icons(count: u32, columns: u32, rows: u32) -> IconGridState {
    IconGridState::new(
        (0..count)
            .map(|i| IconCell {
                id: IconId::new(format!("icon-{i}")),
                label: format!("Icon {i}"),
                icon_ref: "folder.png".to_string(),
                app_type: "blank".to_string(),
                window_title: format!("Icon {i}"),
                cell: GridCell::new(i / rows % columns + 1, i % rows + 1),
            })
            .collect(),
    )
}

fn metrics(columns: u32, rows: u32) -> GridMetrics {
    GridMetrics {
        columns,
        rows,
        cell_width: 80.0,
        cell_height: 75.0,
        column_gap: 5.0,
        row_gap: 10.0,
    }
}

proptest! {
    /// Window ids are never repeated, even across closes.
    #[test]
    fn window_ids_are_unique(opens in 1usize..300, ops in prop::collection::vec(op(), 0..40)) {
        let mut desktop = Desktop::default();
        for i in 0..opens {
            apply(&mut desktop, Op::Open(i % APP_TAGS.len()));
        }
        for op in ops {
            apply(&mut desktop, op);
        }
        let mut ids = desktop.opened.clone();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), desktop.opened.len());
    }

    /// At most one window is focused, it is visible, and the broadcast agrees with it.
    #[test]
    fn at_most_one_focused(ops in prop::collection::vec(op(), 1..80)) {
        let mut desktop = Desktop::default();
        for op in ops {
            apply(&mut desktop, op);
            let focused: Vec<_> = desktop.state.windows.iter().filter(|w| w.is_focused).collect();
            prop_assert!(focused.len() <= 1);
            prop_assert_eq!(focused.first().map(|w| &w.id), desktop.state.focused.as_ref());
            prop_assert!(focused.iter().all(|w| w.visible));
            prop_assert_eq!(desktop.broadcast.as_ref(), desktop.state.focused.as_ref());
        }
    }

    /// A successful raise always hands out a z-index above every earlier one.
    #[test]
    fn z_order_is_monotonic(ops in prop::collection::vec(op(), 1..80)) {
        let mut desktop = Desktop::default();
        let mut highest_seen = desktop.state.highest_z_index;
        for op in ops {
            let before = desktop.state.focused.clone();
            apply(&mut desktop, op);
            prop_assert!(desktop.state.highest_z_index >= highest_seen);
            if let Some(focused) = desktop.state.focused.clone() {
                if before.as_ref() != Some(&focused) {
                    let z = desktop.state.window(&focused).map(|w| w.z_index).unwrap_or(0);
                    prop_assert!(z > highest_seen, "z {} not above {}", z, highest_seen);
                }
            }
            highest_seen = desktop.state.highest_z_index;
        }
    }

    /// Taskbar tabs equal the open windows, in open order.
    #[test]
    fn taskbar_mirrors_windows(ops in prop::collection::vec(op(), 1..80)) {
        let mut desktop = Desktop::default();
        for op in ops {
            apply(&mut desktop, op);
            prop_assert_eq!(desktop.taskbar.ids(), desktop.state.window_ids());
        }
    }

    /// Dragged windows never leave the clamp box.
    #[test]
    fn dragged_windows_stay_in_bounds(ops in prop::collection::vec(op(), 1..60)) {
        let mut desktop = Desktop::default();
        for op in ops {
            apply(&mut desktop, op);
        }
        for window in &desktop.state.windows {
            prop_assert!(window.position.x >= 0);
            prop_assert!(window.position.y >= 0);
            prop_assert!(window.position.y <= VIEWPORT.height - 60);
        }
    }

    /// Drops never stack two icons on one cell while capacity covers the icon count.
    #[test]
    fn drops_never_overlap(
        columns in 1u32..6,
        rows in 1u32..6,
        fill in 0.0f64..=1.0,
        drops in prop::collection::vec((any::<u32>(), 0.0f64..600.0, 0.0f64..600.0), 1..40),
    ) {
        let capacity = columns * rows;
        let count = ((f64::from(capacity) * fill).round() as u32).clamp(1, capacity);
        let mut grid = grid_icons(count, columns, rows);
        let mut interaction = InteractionState::default();
        prop_assert!(grid.is_valid());

        for (pick, x, y) in drops {
            let icon_id = grid.icons[(pick % count) as usize].id.clone();
            let origin = grid.icon(&icon_id).map(|icon| icon.cell);
            reduce_icon_grid(&mut grid, &mut interaction, IconGridAction::BeginDrag { icon_id: icon_id.clone() });
            reduce_icon_grid(&mut grid, &mut interaction, IconGridAction::Drop { x, y, metrics: metrics(columns, rows) });
            reduce_icon_grid(&mut grid, &mut interaction, IconGridAction::EndDrag);

            prop_assert!(grid.is_valid());
            if count == capacity {
                prop_assert_eq!(grid.icon(&icon_id).map(|icon| icon.cell), origin);
            }
            prop_assert!(interaction.drag.is_none());
        }
    }

    /// Resizing never makes icons collide.
    #[test]
    fn reflow_never_overlaps(count in 1u32..30, rows in 1u32..12) {
        let mut grid = grid_icons(count, 30, 30);
        grid.reflow(&metrics(1, rows));
        prop_assert!(grid.is_valid());
        prop_assert_eq!(grid.icons.len() as u32, count);
    }
}

#[test]
fn full_grid_drop_snaps_back() {
    let mut grid = grid_icons(4, 2, 2);
    let mut interaction = InteractionState::default();
    let before = grid.clone();
    let dragged = IconId::new("icon-0");
    assert_eq!(grid.icon(&dragged).map(|icon| icon.cell), Some(GridCell::new(1, 1)));

    reduce_icon_grid(
        &mut grid,
        &mut interaction,
        IconGridAction::BeginDrag {
            icon_id: dragged.clone(),
        },
    );
    // (2,2) in content coordinates: x in (85, 165], y in (85, 170]
    reduce_icon_grid(
        &mut grid,
        &mut interaction,
        IconGridAction::Drop {
            x: 120.0,
            y: 120.0,
            metrics: metrics(2, 2),
        },
    );
    reduce_icon_grid(&mut grid, &mut interaction, IconGridAction::EndDrag);

    assert_eq!(grid, before);
}
