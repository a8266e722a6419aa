//! Drag-to-reposition for out-of-flow preview boxes.

use serde::{Deserialize, Serialize};

use crate::state::LayoutConfig;

/// One pointer event, in viewport (client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerSample {
    pub pointer_id: i32,
    pub x: f64,
    pub y: f64,
}

/// Where the preview box sits at pointer-down.
///
/// Both rects are viewport-relative (`getBoundingClientRect`); the stage's
/// scroll offsets turn the difference into a stage-content offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StageGeometry {
    pub box_left: f64,
    pub box_top: f64,
    pub stage_left: f64,
    pub stage_top: f64,
    pub scroll_left: f64,
    pub scroll_top: f64,
}

impl StageGeometry {
    /// Box offset inside the stage, as `(left, top)`.
    pub fn box_origin(&self) -> (f64, f64) {
        (
            self.box_left - self.stage_left + self.scroll_left,
            self.box_top - self.stage_top + self.scroll_top,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        pointer_id: i32,
        start_x: f64,
        start_y: f64,
        origin_left: f64,
        origin_top: f64,
    },
}

/// New `left`/`top` in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DragPosition {
    pub left: i64,
    pub top: i64,
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Start a drag if the box can move. Returns whether the host should
    /// capture the pointer.
    ///
    /// A pointer-down while already dragging re-arms: the new pointer, start
    /// point and box origin replace the old ones. An up that never arrived
    /// (capture lost, window blurred) cannot leave a stale origin behind.
    pub fn pointer_down(
        &mut self,
        config: &LayoutConfig,
        pointer: PointerSample,
        geometry: StageGeometry,
    ) -> bool {
        if !config.is_draggable() {
            return false;
        }
        let (origin_left, origin_top) = geometry.box_origin();
        self.state = DragState::Dragging {
            pointer_id: pointer.pointer_id,
            start_x: pointer.x,
            start_y: pointer.y,
            origin_left,
            origin_top,
        };
        log::debug!(
            "drag start: pointer {} at ({}, {}), box at ({origin_left}, {origin_top})",
            pointer.pointer_id,
            pointer.x,
            pointer.y
        );
        true
    }

    /// Where the box goes for this pointer position, or `None` when idle or
    /// the event belongs to another pointer.
    pub fn pointer_move(&self, pointer: PointerSample) -> Option<DragPosition> {
        match self.state {
            DragState::Dragging {
                pointer_id,
                start_x,
                start_y,
                origin_left,
                origin_top,
            } if pointer_id == pointer.pointer_id => Some(DragPosition {
                left: round_px(origin_left + (pointer.x - start_x)),
                top: round_px(origin_top + (pointer.y - start_y)),
            }),
            _ => None,
        }
    }

    /// End the drag. Returns whether the host should release capture.
    pub fn pointer_up(&mut self, pointer: PointerSample) -> bool {
        match self.state {
            DragState::Dragging { pointer_id, .. } if pointer_id == pointer.pointer_id => {
                self.state = DragState::Idle;
                log::debug!("drag end: pointer {pointer_id}");
                true
            }
            _ => false,
        }
    }
}

// Halves round up, like the browser's Math.round.
fn round_px(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
