//! Single-slot drag coordination shared by windows and desktop icons.
//!
//! Exactly one [`DragSession`] may be live at a time. Starting a new drag replaces whatever
//! subject held the slot; ending a drag (pointer-up or pointer leaving the surface) empties it
//! without rolling back the last applied position.

use crate::model::{
    DesktopLayoutConfig, DragBounds, DragEndReason, DragOrigin, DragSession, DragSubject, GridCell,
    IconId, InteractionState, PointerPosition, Viewport, WindowId, WindowPosition, WindowSize,
};

/// Borrowed view over the interaction slot with drag-specific operations.
pub struct DragCoordinator<'a> {
    slot: &'a mut InteractionState,
}

impl<'a> DragCoordinator<'a> {
    pub fn new(slot: &'a mut InteractionState) -> Self {
        Self { slot }
    }

    /// Records `window_id` as the sole drag subject. Nothing moves yet.
    pub fn begin_window(
        &mut self,
        window_id: WindowId,
        pointer: PointerPosition,
        origin: WindowPosition,
        frame_size: WindowSize,
        viewport: Viewport,
        config: &DesktopLayoutConfig,
    ) {
        self.slot.drag = Some(DragSession {
            subject: DragSubject::Window(window_id),
            origin: DragOrigin::Window(origin),
            pointer_offset: PointerPosition {
                x: pointer.x - origin.x,
                y: pointer.y - origin.y,
            },
            bounds: Some(window_drag_bounds(frame_size, viewport, config)),
        });
    }

    /// Records `icon_id` as the sole drag subject, remembering its pre-drag cell.
    pub fn begin_icon(&mut self, icon_id: IconId, origin: GridCell) {
        self.slot.drag = Some(DragSession {
            subject: DragSubject::Icon(icon_id),
            origin: DragOrigin::Icon(origin),
            pointer_offset: PointerPosition::default(),
            bounds: None,
        });
    }

    /// Current window subject, read fresh on every call.
    pub fn window_subject(&self) -> Option<&WindowId> {
        match self.slot.drag.as_ref().map(|session| &session.subject) {
            Some(DragSubject::Window(window_id)) => Some(window_id),
            _ => None,
        }
    }

    /// Current icon subject and its pre-drag cell.
    pub fn icon_subject(&self) -> Option<(&IconId, GridCell)> {
        let session = self.slot.drag.as_ref()?;
        match (&session.subject, &session.origin) {
            (DragSubject::Icon(icon_id), DragOrigin::Icon(cell)) => Some((icon_id, *cell)),
            _ => None,
        }
    }

    /// Computes the clamped top-left for the current window subject under `pointer`.
    pub fn window_position_for(&self, pointer: PointerPosition) -> Option<(WindowId, WindowPosition)> {
        let session = self.slot.drag.as_ref()?;
        let DragSubject::Window(window_id) = &session.subject else {
            return None;
        };
        let bounds = session.bounds?;
        let position = clamp_to_bounds(
            WindowPosition {
                x: pointer.x - session.pointer_offset.x,
                y: pointer.y - session.pointer_offset.y,
            },
            bounds,
        );
        Some((window_id.clone(), position))
    }

    /// Empties the slot. Both end reasons behave the same; the reason is informational.
    pub fn end(&mut self, _reason: DragEndReason) -> Option<DragSession> {
        self.slot.drag.take()
    }

    /// Ends the drag only when `subject` still owns the slot.
    pub fn end_if(&mut self, subject: &DragSubject) -> Option<DragSession> {
        if self.slot.drag.as_ref().map(|session| &session.subject) == Some(subject) {
            self.slot.drag.take()
        } else {
            None
        }
    }
}

/// Bounds for a window drag.
///
/// The vertical bound reserves the taskbar plus one title bar so the frame can never slide under
/// the taskbar; the horizontal bound is the rightmost position at which the frame is fully on
/// screen.
pub fn window_drag_bounds(
    frame_size: WindowSize,
    viewport: Viewport,
    config: &DesktopLayoutConfig,
) -> DragBounds {
    DragBounds {
        max_x: viewport.width - frame_size.w,
        max_y: viewport.height - (config.taskbar_height + config.title_bar_height),
    }
}

/// Clamps a candidate top-left into `[0, max_x - 1] x [0, max_y]`.
///
/// The right bound backs off one pixel: measured widths are rounded, and sitting exactly on the
/// edge makes the browser wrap the title text.
pub fn clamp_to_bounds(candidate: WindowPosition, bounds: DragBounds) -> WindowPosition {
    WindowPosition {
        x: candidate.x.min(bounds.max_x - 1).max(0),
        y: candidate.y.min(bounds.max_y).max(0),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn viewport() -> Viewport {
        Viewport {
            width: 1000,
            height: 700,
        }
    }

    fn begin(slot: &mut InteractionState, id: &str, pointer: (i32, i32), origin: (i32, i32)) {
        DragCoordinator::new(slot).begin_window(
            WindowId(id.to_string()),
            PointerPosition {
                x: pointer.0,
                y: pointer.1,
            },
            WindowPosition::new(origin.0, origin.1),
            WindowSize { w: 300, h: 200 },
            viewport(),
            &DesktopLayoutConfig::default(),
        );
    }

    #[test]
    fn pointer_offset_is_preserved_during_move() {
        let mut slot = InteractionState::default();
        begin(&mut slot, "w1", (110, 45), (100, 30));

        let coordinator = DragCoordinator::new(&mut slot);
        let (id, pos) = coordinator
            .window_position_for(PointerPosition { x: 210, y: 145 })
            .expect("window subject");
        assert_eq!(id, WindowId("w1".to_string()));
        assert_eq!(pos, WindowPosition::new(200, 130));
    }

    #[test]
    fn move_is_clamped_to_viewport_minus_reserved_chrome() {
        let mut slot = InteractionState::default();
        begin(&mut slot, "w1", (10, 10), (0, 0));
        let coordinator = DragCoordinator::new(&mut slot);

        let (_, far) = coordinator
            .window_position_for(PointerPosition { x: 5000, y: 5000 })
            .unwrap();
        // max_x = 1000 - 300 = 700, right bound backs off one pixel; max_y = 700 - 60
        assert_eq!(far, WindowPosition::new(699, 640));

        let (_, negative) = coordinator
            .window_position_for(PointerPosition { x: -50, y: -50 })
            .unwrap();
        assert_eq!(negative, WindowPosition::new(0, 0));
    }

    #[test]
    fn starting_a_second_drag_replaces_the_subject() {
        let mut slot = InteractionState::default();
        begin(&mut slot, "w1", (10, 10), (0, 0));
        begin(&mut slot, "w2", (10, 10), (0, 0));

        let coordinator = DragCoordinator::new(&mut slot);
        assert_eq!(
            coordinator.window_subject(),
            Some(&WindowId("w2".to_string()))
        );
    }

    #[test]
    fn end_clears_slot_for_either_reason() {
        let mut slot = InteractionState::default();
        begin(&mut slot, "w1", (10, 10), (0, 0));
        assert!(DragCoordinator::new(&mut slot)
            .end(DragEndReason::PointerLeft)
            .is_some());
        assert!(slot.drag.is_none());
        assert!(DragCoordinator::new(&mut slot)
            .end(DragEndReason::PointerUp)
            .is_none());
    }

    #[test]
    fn icon_subject_is_not_moved_as_window() {
        let mut slot = InteractionState::default();
        let mut coordinator = DragCoordinator::new(&mut slot);
        coordinator.begin_icon(IconId::new("chat"), GridCell::new(2, 1));

        assert!(coordinator
            .window_position_for(PointerPosition { x: 1, y: 1 })
            .is_none());
        assert_eq!(
            coordinator.icon_subject(),
            Some((&IconId::new("chat"), GridCell::new(2, 1)))
        );
        assert!(coordinator
            .end_if(&DragSubject::Window(WindowId("w1".to_string())))
            .is_none());
        assert!(coordinator
            .end_if(&DragSubject::Icon(IconId::new("chat")))
            .is_some());
    }
}
