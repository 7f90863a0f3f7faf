//! Overlay geometry engine.
//!
//! Move/resize logic for the caption box. All geometry lives in design
//! space; the UI converts pointer coordinates through the visual scale
//! before calling in, so the math here is identical at any layout size.
//! Resizing anchors the opposite edge: west/north handles shift the
//! position by the realized size change, not by the raw pointer delta,
//! so nothing teleports once a minimum-size floor engages.

/// Axis-aligned box in design-space pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// The eight resize handles around the caption box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::TopLeft,
        ResizeHandle::Top,
        ResizeHandle::TopRight,
        ResizeHandle::Right,
        ResizeHandle::BottomRight,
        ResizeHandle::Bottom,
        ResizeHandle::BottomLeft,
        ResizeHandle::Left,
    ];

    /// CSS cursor for this handle
    pub fn cursor(self) -> &'static str {
        match self {
            ResizeHandle::TopLeft | ResizeHandle::BottomRight => "nwse-resize",
            ResizeHandle::TopRight | ResizeHandle::BottomLeft => "nesw-resize",
            ResizeHandle::Left | ResizeHandle::Right => "ew-resize",
            ResizeHandle::Top | ResizeHandle::Bottom => "ns-resize",
        }
    }

    fn horizontal(self) -> Option<Side> {
        match self {
            ResizeHandle::TopLeft | ResizeHandle::Left | ResizeHandle::BottomLeft => {
                Some(Side::Near)
            }
            ResizeHandle::TopRight | ResizeHandle::Right | ResizeHandle::BottomRight => {
                Some(Side::Far)
            }
            ResizeHandle::Top | ResizeHandle::Bottom => None,
        }
    }

    fn vertical(self) -> Option<Side> {
        match self {
            ResizeHandle::TopLeft | ResizeHandle::Top | ResizeHandle::TopRight => Some(Side::Near),
            ResizeHandle::BottomLeft | ResizeHandle::Bottom | ResizeHandle::BottomRight => {
                Some(Side::Far)
            }
            ResizeHandle::Left | ResizeHandle::Right => None,
        }
    }
}

/// Which edge of an axis a handle drags: Near = left/top, Far = right/bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Near,
    Far,
}

/// Gesture context for moving the caption box.
#[derive(Debug, Clone, Copy)]
pub struct MoveDrag {
    initial_position: (f64, f64),
    initial_pointer: (f64, f64),
}

impl MoveDrag {
    /// Open a move gesture. `pointer` is already in design space.
    pub fn begin(rect: Rect, pointer: (f64, f64)) -> Self {
        Self {
            initial_position: (rect.left, rect.top),
            initial_pointer: pointer,
        }
    }

    /// Position for the current pointer, clamped so the box never leaves
    /// the container.
    pub fn continue_move(
        &self,
        pointer: (f64, f64),
        box_size: (f64, f64),
        container: (f64, f64),
    ) -> (f64, f64) {
        let offset = (
            pointer.0 - self.initial_pointer.0,
            pointer.1 - self.initial_pointer.1,
        );
        let max_left = (container.0 - box_size.0).max(0.0);
        let max_top = (container.1 - box_size.1).max(0.0);
        (
            (self.initial_position.0 + offset.0).clamp(0.0, max_left),
            (self.initial_position.1 + offset.1).clamp(0.0, max_top),
        )
    }
}

/// Gesture context for resizing the caption box from one handle.
#[derive(Debug, Clone, Copy)]
pub struct ResizeDrag {
    handle: ResizeHandle,
    initial: Rect,
    initial_pointer: (f64, f64),
}

impl ResizeDrag {
    /// Open a resize gesture. `pointer` is already in design space.
    pub fn begin(handle: ResizeHandle, rect: Rect, pointer: (f64, f64)) -> Self {
        Self {
            handle,
            initial: rect,
            initial_pointer: pointer,
        }
    }

    pub fn handle(&self) -> ResizeHandle {
        self.handle
    }

    /// Geometry for the current pointer. Sizes floor at the minimums and
    /// cap at the container edge; positions follow the realized size
    /// change so the anchored edge holds still.
    pub fn continue_resize(
        &self,
        pointer: (f64, f64),
        min_size: (f64, f64),
        container: (f64, f64),
    ) -> Rect {
        let delta = (
            pointer.0 - self.initial_pointer.0,
            pointer.1 - self.initial_pointer.1,
        );
        let mut rect = self.initial;

        if let Some(side) = self.handle.horizontal() {
            let (width, left) = resize_axis(
                side,
                delta.0,
                self.initial.left,
                self.initial.width,
                min_size.0,
                container.0,
            );
            rect.width = width;
            rect.left = left;
        }
        if let Some(side) = self.handle.vertical() {
            let (height, top) = resize_axis(
                side,
                delta.1,
                self.initial.top,
                self.initial.height,
                min_size.1,
                container.1,
            );
            rect.height = height;
            rect.top = top;
        }
        rect
    }
}

/// Resize one axis. Near handles grow the size by the negated delta and
/// shift the offset by the realized change; Far handles leave the offset
/// alone. Size clamps to `[min, available span]`.
fn resize_axis(
    side: Side,
    delta: f64,
    offset: f64,
    size: f64,
    min: f64,
    container: f64,
) -> (f64, f64) {
    match side {
        Side::Far => {
            let available = (container - offset).max(min);
            let new_size = (size + delta).clamp(min, available);
            (new_size, offset)
        }
        Side::Near => {
            let available = (offset + size).max(min);
            let new_size = (size - delta).clamp(min, available);
            // The far edge stays fixed: offset moves by the size change.
            (new_size, offset + (size - new_size))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scale::VisualScale;

    const CONTAINER: (f64, f64) = (1440.0, 1080.0);
    const MIN: (f64, f64) = (200.0, 80.0);

    fn rect() -> Rect {
        Rect::new(400.0, 500.0, 600.0, 200.0)
    }

    #[test]
    fn test_move_applies_design_space_offset() {
        let drag = MoveDrag::begin(rect(), (500.0, 550.0));
        let (left, top) = drag.continue_move((530.0, 540.0), (600.0, 200.0), CONTAINER);
        assert_eq!((left, top), (430.0, 490.0));
    }

    #[test]
    fn test_move_clamps_to_container() {
        let drag = MoveDrag::begin(rect(), (500.0, 550.0));
        let (left, top) = drag.continue_move((-2000.0, 5000.0), (600.0, 200.0), CONTAINER);
        assert_eq!(left, 0.0);
        assert_eq!(top, 1080.0 - 200.0);
    }

    #[test]
    fn test_move_is_scale_invariant() {
        // A client-space drag of (dx, dy) under scale s moves the box
        // by (dx/s, dy/s) in design space, whatever s is.
        for scale_factor in [0.25, 0.5, 1.0, 2.0] {
            let mut scale = VisualScale::default();
            scale.measure(
                CONTAINER.0 * scale_factor,
                CONTAINER.1 * scale_factor,
                CONTAINER.0,
                CONTAINER.1,
            );
            let start_client = (100.0, 100.0);
            let end_client = (148.0, 76.0);
            let drag = MoveDrag::begin(
                rect(),
                scale.point_to_design(start_client.0, start_client.1),
            );
            let (left, top) = drag.continue_move(
                scale.point_to_design(end_client.0, end_client.1),
                (600.0, 200.0),
                CONTAINER,
            );
            assert!((left - (400.0 + 48.0 / scale_factor)).abs() < 1e-9);
            assert!((top - (500.0 - 24.0 / scale_factor)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_bottom_right_anchors_top_left() {
        let drag = ResizeDrag::begin(ResizeHandle::BottomRight, rect(), (1000.0, 700.0));
        let result = drag.continue_resize((1050.0, 730.0), MIN, CONTAINER);
        assert_eq!(result.left, 400.0);
        assert_eq!(result.top, 500.0);
        assert_eq!(result.width, 650.0);
        assert_eq!(result.height, 230.0);
    }

    #[test]
    fn test_left_handle_keeps_right_edge_fixed() {
        let drag = ResizeDrag::begin(ResizeHandle::Left, rect(), (400.0, 600.0));
        let result = drag.continue_resize((300.0, 600.0), MIN, CONTAINER);
        assert_eq!(result.width, 700.0);
        assert_eq!(result.left, 300.0);
        assert_eq!(result.right(), rect().right());
        assert_eq!(result.height, 200.0);
    }

    #[test]
    fn test_top_handle_keeps_bottom_edge_fixed() {
        let drag = ResizeDrag::begin(ResizeHandle::Top, rect(), (700.0, 500.0));
        let result = drag.continue_resize((700.0, 460.0), MIN, CONTAINER);
        assert_eq!(result.height, 240.0);
        assert_eq!(result.top, 460.0);
        assert_eq!(result.bottom(), rect().bottom());
        assert_eq!(result.width, 600.0);
    }

    #[test]
    fn test_min_floor_stops_position_drift() {
        // Once the width floor engages, the left edge stops moving
        // even as the pointer keeps going.
        let drag = ResizeDrag::begin(ResizeHandle::Left, rect(), (400.0, 600.0));
        let at_floor = drag.continue_resize((800.0, 600.0), MIN, CONTAINER);
        assert_eq!(at_floor.width, MIN.0);
        assert_eq!(at_floor.left, rect().right() - MIN.0);

        let past_floor = drag.continue_resize((1300.0, 600.0), MIN, CONTAINER);
        assert_eq!(past_floor.width, MIN.0);
        assert_eq!(past_floor.left, at_floor.left);
    }

    #[test]
    fn test_min_floor_on_far_handles() {
        let drag = ResizeDrag::begin(ResizeHandle::BottomRight, rect(), (1000.0, 700.0));
        let result = drag.continue_resize((0.0, 0.0), MIN, CONTAINER);
        assert_eq!(result.width, MIN.0);
        assert_eq!(result.height, MIN.1);
        assert_eq!(result.left, 400.0);
        assert_eq!(result.top, 500.0);
    }

    #[test]
    fn test_resize_respects_container_bounds() {
        // Right edge cannot pass the container; left handle cannot push
        // the box past the origin.
        let drag = ResizeDrag::begin(ResizeHandle::Right, rect(), (1000.0, 600.0));
        let result = drag.continue_resize((5000.0, 600.0), MIN, CONTAINER);
        assert_eq!(result.right(), CONTAINER.0);

        let drag = ResizeDrag::begin(ResizeHandle::Left, rect(), (400.0, 600.0));
        let result = drag.continue_resize((-5000.0, 600.0), MIN, CONTAINER);
        assert_eq!(result.left, 0.0);
        assert_eq!(result.right(), rect().right());
    }

    #[test]
    fn test_edge_handles_affect_one_axis_only() {
        let drag = ResizeDrag::begin(ResizeHandle::Bottom, rect(), (700.0, 700.0));
        let result = drag.continue_resize((900.0, 760.0), MIN, CONTAINER);
        assert_eq!(result.width, 600.0);
        assert_eq!(result.left, 400.0);
        assert_eq!(result.height, 260.0);
    }
}
