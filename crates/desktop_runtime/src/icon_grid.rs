//! Desktop icon grid: cell geometry, drop-target resolution, selection, and resize reflow.
//!
//! Icons rest on explicit 1-based `(column, row)` cells. The grid never lets two icons share a
//! cell: a drop on an occupied cell scans forward for a free one and, failing that, returns the
//! icon to the cell it was dragged from.

use serde::{Deserialize, Serialize};

use crate::{
    drag::DragCoordinator,
    model::{DesktopLayoutConfig, DragEndReason, GridCell, IconCell, IconId, InteractionState},
};

/// Raw layout values read from the rendered grid container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridMeasurement {
    /// Content-box width of the grid container.
    pub width: f64,
    /// Content-box height of the grid container.
    pub height: f64,
    /// Number of rendered column tracks.
    pub columns: u32,
    /// Number of rendered row tracks.
    pub rows: u32,
    pub cell_width: f64,
    pub cell_height: f64,
}

/// Effective grid geometry at drop time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridMetrics {
    pub columns: u32,
    pub rows: u32,
    pub cell_width: f64,
    pub cell_height: f64,
    pub column_gap: f64,
    pub row_gap: f64,
}

impl GridMetrics {
    /// Recovers the actual gaps from a measurement.
    ///
    /// Tracks are distributed with space between them, so the real gap is whatever is left of
    /// the extent after the cells, split across `count - 1` gutters.
    pub fn from_measurement(measurement: GridMeasurement) -> Self {
        let columns = measurement.columns.max(1);
        let rows = measurement.rows.max(1);
        Self {
            columns,
            rows,
            cell_width: measurement.cell_width,
            cell_height: measurement.cell_height,
            column_gap: distributed_gap(measurement.width, measurement.cell_width, columns),
            row_gap: distributed_gap(measurement.height, measurement.cell_height, rows),
        }
    }

    /// Emulates `repeat(auto-fill, cell)` with minimum gaps for a container of the given size.
    pub fn auto_fill(width: f64, height: f64, config: &DesktopLayoutConfig) -> Self {
        let padding = f64::from(config.icon_grid_padding) * 2.0;
        let content_w = (width - padding).max(0.0);
        let content_h = (height - padding).max(0.0);
        let cell_w = f64::from(config.icon_cell_width);
        let cell_h = f64::from(config.icon_cell_height);
        let columns = auto_fill_count(content_w, cell_w, f64::from(config.icon_column_gap));
        let rows = auto_fill_count(content_h, cell_h, f64::from(config.icon_row_gap));

        Self::from_measurement(GridMeasurement {
            width: content_w,
            height: content_h,
            columns,
            rows,
            cell_width: cell_w,
            cell_height: cell_h,
        })
    }

    pub fn capacity(&self) -> u32 {
        self.columns.saturating_mul(self.rows)
    }

    pub fn contains(&self, cell: GridCell) -> bool {
        (1..=self.columns).contains(&cell.column) && (1..=self.rows).contains(&cell.row)
    }

    /// Converts a point local to the grid content box into a candidate cell.
    pub fn cell_for_point(&self, x: f64, y: f64) -> GridCell {
        GridCell {
            column: axis_index(x, self.cell_width, self.column_gap, self.columns),
            row: axis_index(y, self.cell_height, self.row_gap, self.rows),
        }
    }
}

fn distributed_gap(extent: f64, cell: f64, count: u32) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    ((extent - cell * f64::from(count)) / f64::from(count - 1)).max(0.0)
}

fn auto_fill_count(extent: f64, cell: f64, gap: f64) -> u32 {
    if cell <= 0.0 {
        return 1;
    }
    (((extent + gap) / (cell + gap)).floor() as u32).max(1)
}

/// `ceil((coordinate + gap / 2) / (size + gap))`, clamped to `1..=count`.
///
/// Out-of-range candidates are pulled back onto the grid so the forward scan in
/// [`IconGridState::resolve_drop`] always cycles back to its start.
pub fn axis_index(coordinate: f64, size: f64, gap: f64, count: u32) -> u32 {
    let pitch = size + gap;
    if pitch <= 0.0 {
        return 1;
    }
    let raw = ((coordinate + gap / 2.0) / pitch).ceil();
    if raw < 1.0 {
        1
    } else {
        (raw as u32).min(count.max(1))
    }
}

/// Counts the tracks in a computed `grid-template-*` value such as `"80px 80px 80px"`.
pub fn parse_track_count(tracks: &str) -> u32 {
    let tracks = tracks.trim();
    if tracks.is_empty() || tracks == "none" {
        return 0;
    }
    tracks.split_whitespace().count() as u32
}

/// App request emitted when an icon is double-activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconActivation {
    pub app_type: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconGridState {
    pub icons: Vec<IconCell>,
    pub selected: Option<IconId>,
}

impl IconGridState {
    pub fn new(icons: Vec<IconCell>) -> Self {
        Self {
            icons,
            selected: None,
        }
    }

    pub fn icon(&self, icon_id: &IconId) -> Option<&IconCell> {
        self.icons.iter().find(|icon| &icon.id == icon_id)
    }

    fn is_occupied_by_other(&self, cell: GridCell, icon_id: &IconId) -> bool {
        self.icons
            .iter()
            .any(|icon| icon.cell == cell && &icon.id != icon_id)
    }

    /// Marks `icon_id` selected, replacing any previous selection.
    pub fn select(&mut self, icon_id: &IconId) -> bool {
        if self.icon(icon_id).is_none() {
            return false;
        }
        self.selected = Some(icon_id.clone());
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Picks the resting cell for `icon_id` dropped on `target`.
    ///
    /// The target is accepted when free or equal to `origin`. Otherwise cells are scanned in
    /// row-major order (row first, then column, wrapping to column 1) until a free one turns up.
    /// If the scan comes back to `target`, the icon returns to `origin`.
    pub fn resolve_drop(
        &self,
        icon_id: &IconId,
        origin: GridCell,
        target: GridCell,
        metrics: &GridMetrics,
    ) -> GridCell {
        let columns = metrics.columns.max(1);
        let rows = metrics.rows.max(1);
        let start = GridCell {
            column: target.column.clamp(1, columns),
            row: target.row.clamp(1, rows),
        };

        let mut current = start;
        loop {
            if current == origin || !self.is_occupied_by_other(current, icon_id) {
                return current;
            }

            current.row += 1;
            if current.row > rows {
                current.row = 1;
                current.column += 1;
                if current.column > columns {
                    current.column = 1;
                }
            }

            if current == start {
                return origin;
            }
        }
    }

    /// Moves `icon_id` to `cell`. Returns the previous cell when the icon exists.
    pub fn drop_icon(&mut self, icon_id: &IconId, cell: GridCell) -> Option<GridCell> {
        let icon = self.icons.iter_mut().find(|icon| &icon.id == icon_id)?;
        let previous = icon.cell;
        icon.cell = cell;
        Some(previous)
    }

    /// Re-packs every icon for a new grid shape without collisions.
    ///
    /// Icons keep their current column-major order and fill each column top to bottom before
    /// moving right. When the grid is taller than the icon count this collapses to a single
    /// column. Icons past the last column spill into implicit columns rather than overlap.
    pub fn reflow(&mut self, metrics: &GridMetrics) {
        let rows = metrics.rows.max(1);
        let mut order: Vec<usize> = (0..self.icons.len()).collect();
        order.sort_by_key(|&idx| (self.icons[idx].cell.column, self.icons[idx].cell.row));

        for (slot, idx) in order.into_iter().enumerate() {
            let slot = slot as u32;
            self.icons[idx].cell = GridCell {
                column: slot / rows + 1,
                row: slot % rows + 1,
            };
        }
    }

    /// Returns `true` when no two icons share a cell.
    pub fn is_valid(&self) -> bool {
        let mut cells: Vec<GridCell> = self.icons.iter().map(|icon| icon.cell).collect();
        cells.sort();
        cells.windows(2).all(|pair| pair[0] != pair[1])
    }

    pub fn activate(&self, icon_id: &IconId) -> Option<IconActivation> {
        self.icon(icon_id).map(|icon| IconActivation {
            app_type: icon.app_type.clone(),
            title: icon.window_title.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Operations accepted by [`reduce_icon_grid`].
pub enum IconGridAction {
    /// Plain click on an icon.
    Select { icon_id: IconId },
    /// Click on empty grid space.
    ClearSelection,
    /// Drag gesture started on an icon.
    BeginDrag { icon_id: IconId },
    /// Drop at a point local to the grid content box, with geometry measured at drop time.
    Drop { x: f64, y: f64, metrics: GridMetrics },
    /// Drag gesture finished (after a drop or when cancelled).
    EndDrag,
    /// Container size changed.
    Reflow { metrics: GridMetrics },
    /// Double activation.
    Activate { icon_id: IconId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Signals produced by the icon grid for the desktop coordinator.
pub enum IconGridEvent {
    Activated(IconActivation),
    Moved {
        icon_id: IconId,
        from: GridCell,
        to: GridCell,
    },
}

/// Applies an [`IconGridAction`] to the grid, using the shared drag slot for icon drags.
pub fn reduce_icon_grid(
    grid: &mut IconGridState,
    interaction: &mut InteractionState,
    action: IconGridAction,
) -> Vec<IconGridEvent> {
    let mut events = Vec::new();
    match action {
        IconGridAction::Select { icon_id } => {
            if DragCoordinator::new(interaction).icon_subject().is_none() {
                grid.select(&icon_id);
            }
        }
        IconGridAction::ClearSelection => grid.clear_selection(),
        IconGridAction::BeginDrag { icon_id } => {
            if let Some(origin) = grid.icon(&icon_id).map(|icon| icon.cell) {
                DragCoordinator::new(interaction).begin_icon(icon_id, origin);
            }
        }
        IconGridAction::Drop { x, y, metrics } => {
            let coordinator = DragCoordinator::new(interaction);
            let Some(icon_id) = coordinator.icon_subject().map(|(icon_id, _)| icon_id.clone())
            else {
                return events;
            };
            // A reflow during the drag may have moved the icon off its drag-start cell.
            let Some(origin) = grid.icon(&icon_id).map(|icon| icon.cell) else {
                return events;
            };
            let target = metrics.cell_for_point(x, y);
            let resolved = grid.resolve_drop(&icon_id, origin, target, &metrics);
            if let Some(from) = grid.drop_icon(&icon_id, resolved) {
                if from != resolved {
                    events.push(IconGridEvent::Moved {
                        icon_id,
                        from,
                        to: resolved,
                    });
                }
            }
        }
        IconGridAction::EndDrag => {
            let mut coordinator = DragCoordinator::new(interaction);
            if coordinator.icon_subject().is_some() {
                coordinator.end(DragEndReason::PointerUp);
            }
        }
        IconGridAction::Reflow { metrics } => grid.reflow(&metrics),
        IconGridAction::Activate { icon_id } => {
            if let Some(activation) = grid.activate(&icon_id) {
                events.push(IconGridEvent::Activated(activation));
            }
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn icon(id: &str, column: u32, row: u32) -> IconCell {
        IconCell {
            id: IconId::new(id),
            label: id.to_string(),
            icon_ref: "folder.png".to_string(),
            app_type: "blank".to_string(),
            window_title: id.to_string(),
            cell: GridCell::new(column, row),
        }
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

    fn full_two_by_two() -> IconGridState {
        IconGridState::new(vec![
            icon("a", 1, 1),
            icon("b", 1, 2),
            icon("c", 2, 1),
            icon("d", 2, 2),
        ])
    }

    #[test]
    fn measured_gaps_are_recovered_from_container_extent() {
        let metrics = GridMetrics::from_measurement(GridMeasurement {
            width: 500.0,
            height: 400.0,
            columns: 6,
            rows: 5,
            cell_width: 80.0,
            cell_height: 75.0,
        });
        assert_eq!(metrics.column_gap, 4.0);
        assert_eq!(metrics.row_gap, 6.25);

        let single = GridMetrics::from_measurement(GridMeasurement {
            width: 80.0,
            height: 75.0,
            columns: 1,
            rows: 1,
            cell_width: 80.0,
            cell_height: 75.0,
        });
        assert_eq!(single.column_gap, 0.0);
    }

    #[test]
    fn auto_fill_counts_tracks_like_css() {
        let config = DesktopLayoutConfig::default();
        // content 590 x 390: columns floor(595 / 85) = 7, rows floor(400 / 85) = 4
        let metrics = GridMetrics::auto_fill(600.0, 400.0, &config);
        assert_eq!((metrics.columns, metrics.rows), (7, 4));
    }

    #[test]
    fn point_to_cell_uses_half_gap_offset_and_clamps() {
        let m = metrics(4, 3);
        assert_eq!(m.cell_for_point(0.0, 0.0), GridCell::new(1, 1));
        assert_eq!(m.cell_for_point(82.0, 80.0), GridCell::new(1, 1));
        // ceil((83 + 2.5) / 85) crosses into the second column
        assert_eq!(m.cell_for_point(83.0, 80.0), GridCell::new(2, 1));
        assert_eq!(m.cell_for_point(90.0, 90.0), GridCell::new(2, 2));
        assert_eq!(m.cell_for_point(10_000.0, 10_000.0), GridCell::new(4, 3));
        assert_eq!(m.cell_for_point(-40.0, -5.0), GridCell::new(1, 1));
    }

    #[test]
    fn track_lists_are_counted() {
        assert_eq!(parse_track_count("80px 80px 80px"), 3);
        assert_eq!(parse_track_count("  75px "), 1);
        assert_eq!(parse_track_count("none"), 0);
        assert_eq!(parse_track_count(""), 0);
    }

    #[test]
    fn drop_on_free_cell_is_accepted() {
        let grid = IconGridState::new(vec![icon("a", 1, 1), icon("b", 2, 1)]);
        let cell = grid.resolve_drop(
            &IconId::new("a"),
            GridCell::new(1, 1),
            GridCell::new(3, 2),
            &metrics(4, 3),
        );
        assert_eq!(cell, GridCell::new(3, 2));
    }

    #[test]
    fn drop_on_occupied_cell_scans_down_then_right() {
        let grid = IconGridState::new(vec![
            icon("a", 1, 1),
            icon("b", 2, 1),
            icon("c", 2, 2),
        ]);
        // (2,1) taken, (2,2) taken, (2,3) free
        let cell = grid.resolve_drop(
            &IconId::new("a"),
            GridCell::new(1, 1),
            GridCell::new(2, 1),
            &metrics(3, 3),
        );
        assert_eq!(cell, GridCell::new(2, 3));

        // (3,3) taken, wraps to (1,1) which is the origin
        let grid = IconGridState::new(vec![icon("a", 1, 1), icon("z", 3, 3)]);
        let cell = grid.resolve_drop(
            &IconId::new("a"),
            GridCell::new(1, 1),
            GridCell::new(3, 3),
            &metrics(3, 3),
        );
        assert_eq!(cell, GridCell::new(1, 1));
    }

    #[test]
    fn drop_on_full_grid_returns_to_origin() {
        let grid = full_two_by_two();
        let cell = grid.resolve_drop(
            &IconId::new("a"),
            GridCell::new(1, 1),
            GridCell::new(2, 2),
            &metrics(2, 2),
        );
        assert_eq!(cell, GridCell::new(1, 1));
    }

    #[test]
    fn reduce_drop_snaps_back_on_full_grid() {
        let mut grid = full_two_by_two();
        let before = grid.clone();
        let mut interaction = InteractionState::default();

        reduce_icon_grid(
            &mut grid,
            &mut interaction,
            IconGridAction::BeginDrag {
                icon_id: IconId::new("a"),
            },
        );
        let events = reduce_icon_grid(
            &mut grid,
            &mut interaction,
            IconGridAction::Drop {
                x: 120.0,
                y: 120.0,
                metrics: metrics(2, 2),
            },
        );
        reduce_icon_grid(&mut grid, &mut interaction, IconGridAction::EndDrag);

        assert!(events.is_empty());
        assert_eq!(grid, before);
        assert!(interaction.drag.is_none());
    }

    #[test]
    fn reduce_drop_moves_icon_and_reports_it() {
        let mut grid = IconGridState::new(vec![icon("a", 1, 1), icon("b", 2, 1)]);
        let mut interaction = InteractionState::default();
        reduce_icon_grid(
            &mut grid,
            &mut interaction,
            IconGridAction::BeginDrag {
                icon_id: IconId::new("a"),
            },
        );
        let events = reduce_icon_grid(
            &mut grid,
            &mut interaction,
            IconGridAction::Drop {
                x: 100.0,
                y: 10.0,
                metrics: metrics(3, 3),
            },
        );

        assert_eq!(
            events,
            vec![IconGridEvent::Moved {
                icon_id: IconId::new("a"),
                from: GridCell::new(1, 1),
                to: GridCell::new(2, 2),
            }]
        );
        assert!(grid.is_valid());
    }

    #[test]
    fn drop_without_active_icon_drag_is_ignored() {
        let mut grid = IconGridState::new(vec![icon("a", 1, 1)]);
        let mut interaction = InteractionState::default();
        let events = reduce_icon_grid(
            &mut grid,
            &mut interaction,
            IconGridAction::Drop {
                x: 200.0,
                y: 200.0,
                metrics: metrics(3, 3),
            },
        );
        assert!(events.is_empty());
        assert_eq!(grid.icons[0].cell, GridCell::new(1, 1));
    }

    #[test]
    fn selection_replaces_previous_and_clears_on_empty_space() {
        let mut grid = IconGridState::new(vec![icon("a", 1, 1), icon("b", 2, 1)]);
        let mut interaction = InteractionState::default();

        reduce_icon_grid(
            &mut grid,
            &mut interaction,
            IconGridAction::Select {
                icon_id: IconId::new("a"),
            },
        );
        reduce_icon_grid(
            &mut grid,
            &mut interaction,
            IconGridAction::Select {
                icon_id: IconId::new("b"),
            },
        );
        assert_eq!(grid.selected, Some(IconId::new("b")));

        reduce_icon_grid(&mut grid, &mut interaction, IconGridAction::ClearSelection);
        assert_eq!(grid.selected, None);
    }

    #[test]
    fn selection_is_ignored_while_an_icon_drag_is_live() {
        let mut grid = IconGridState::new(vec![icon("a", 1, 1), icon("b", 2, 1)]);
        let mut interaction = InteractionState::default();
        reduce_icon_grid(
            &mut grid,
            &mut interaction,
            IconGridAction::BeginDrag {
                icon_id: IconId::new("a"),
            },
        );
        reduce_icon_grid(
            &mut grid,
            &mut interaction,
            IconGridAction::Select {
                icon_id: IconId::new("b"),
            },
        );
        assert_eq!(grid.selected, None);
    }

    #[test]
    fn reflow_collapses_to_single_column_when_rows_allow() {
        let mut grid = IconGridState::new(vec![
            icon("c", 3, 1),
            icon("a", 1, 1),
            icon("b", 2, 4),
        ]);
        grid.reflow(&metrics(1, 6));

        let cells: Vec<(&str, GridCell)> = grid
            .icons
            .iter()
            .map(|icon| (icon.id.as_str(), icon.cell))
            .collect();
        assert_eq!(
            cells,
            vec![
                ("c", GridCell::new(1, 3)),
                ("a", GridCell::new(1, 1)),
                ("b", GridCell::new(1, 2)),
            ]
        );
    }

    #[test]
    fn reflow_never_collides_when_rows_are_short() {
        let mut grid = IconGridState::new((0..7).map(|i| icon(&format!("i{i}"), 1, i + 1)).collect());
        grid.reflow(&metrics(1, 3));
        assert!(grid.is_valid());
        assert_eq!(grid.icons[6].cell, GridCell::new(3, 1));
    }

    #[test]
    fn activation_carries_app_type_and_title() {
        let mut grid = IconGridState::new(vec![IconCell {
            app_type: "chat".to_string(),
            window_title: "Chat".to_string(),
            ..icon("chat", 1, 1)
        }]);
        let mut interaction = InteractionState::default();
        let events = reduce_icon_grid(
            &mut grid,
            &mut interaction,
            IconGridAction::Activate {
                icon_id: IconId::new("chat"),
            },
        );
        assert_eq!(
            events,
            vec![IconGridEvent::Activated(IconActivation {
                app_type: "chat".to_string(),
                title: "Chat".to_string(),
            })]
        );
    }

    #[test]
    fn reflow_during_icon_drag_cannot_cause_overlap() {
        let mut grid = IconGridState::new(vec![icon("x", 1, 1), icon("y", 1, 2), icon("z", 2, 1)]);
        let mut interaction = InteractionState::default();
        reduce_icon_grid(
            &mut grid,
            &mut interaction,
            IconGridAction::BeginDrag {
                icon_id: IconId::new("z"),
            },
        );
        // Resize to a single row: x (1,1), y (2,1), z (3,1); z's drag-start cell now holds y.
        reduce_icon_grid(
            &mut grid,
            &mut interaction,
            IconGridAction::Reflow {
                metrics: metrics(3, 1),
            },
        );
        assert_eq!(grid.icon(&IconId::new("y")).map(|i| i.cell), Some(GridCell::new(2, 1)));

        reduce_icon_grid(
            &mut grid,
            &mut interaction,
            IconGridAction::Drop {
                x: 120.0,
                y: 10.0,
                metrics: metrics(3, 1),
            },
        );
        reduce_icon_grid(&mut grid, &mut interaction, IconGridAction::EndDrag);

        assert!(grid.is_valid());
        assert_eq!(grid.icon(&IconId::new("z")).map(|i| i.cell), Some(GridCell::new(3, 1)));
        assert_eq!(grid.icon(&IconId::new("y")).map(|i| i.cell), Some(GridCell::new(2, 1)));
    }
}
