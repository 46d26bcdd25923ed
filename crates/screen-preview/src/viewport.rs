//! Pan/zoom state for the interactive preview
//!
//! The viewport is a plain value: every input event goes through
//! [`reduce`] and produces the next viewport. Drag and pinch are tracked
//! independently, so both gestures can be in flight at once and both
//! write to the same scale/pan state.

use crate::constants::{MAX_SCALE, MIN_SCALE, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};

/// Clamp a zoom factor into the allowed range
pub fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        1.0
    } else {
        scale.clamp(MIN_SCALE, MAX_SCALE)
    }
}

/// Visible transform: translate by the pan offset, then scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub scale: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

impl ViewportState {
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Map a point of the untransformed content to where it is drawn, with
    /// scaling anchored at `center` (the container center)
    pub fn transform_point(&self, (x, y): (f64, f64), (cx, cy): (f64, f64)) -> (f64, f64) {
        (
            cx + self.pan_x + (x - cx) * self.scale,
            cy + self.pan_y + (y - cy) * self.scale,
        )
    }
}

/// Input events the preview reacts to. Coordinates are in container space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    /// Wheel scroll; negative `delta_y` zooms in
    Wheel { delta_y: f64 },
    /// Two fingers touched down `distance` apart
    PinchStart { distance: f64 },
    PinchMove { distance: f64 },
    PinchEnd,
    /// Back to identity, e.g. when a new preview is rendered
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragStart {
    offset_x: f64,
    offset_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PinchStart {
    scale: f64,
    distance: f64,
}

/// Viewport state plus in-flight gesture bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    state: ViewportState,
    drag: Option<DragStart>,
    pinch: Option<PinchStart>,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewportState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    /// Apply one event in place
    pub fn handle(&mut self, event: ViewportEvent) {
        *self = reduce(*self, event);
    }
}

/// Produce the viewport that results from `event`
pub fn reduce(mut viewport: Viewport, event: ViewportEvent) -> Viewport {
    let state = &mut viewport.state;

    match event {
        ViewportEvent::PointerDown { x, y } => {
            viewport.drag = Some(DragStart {
                offset_x: x - state.pan_x,
                offset_y: y - state.pan_y,
            });
        }
        ViewportEvent::PointerMove { x, y } => {
            if let Some(drag) = viewport.drag {
                state.pan_x = x - drag.offset_x;
                state.pan_y = y - drag.offset_y;
            }
        }
        ViewportEvent::PointerUp => viewport.drag = None,
        ViewportEvent::Wheel { delta_y } => {
            if delta_y < 0.0 {
                state.scale = clamp_scale(state.scale * ZOOM_IN_FACTOR);
            } else if delta_y > 0.0 {
                state.scale = clamp_scale(state.scale * ZOOM_OUT_FACTOR);
            }
        }
        ViewportEvent::PinchStart { distance } => {
            viewport.pinch = (distance.is_finite() && distance > 0.0).then_some(PinchStart {
                scale: state.scale,
                distance,
            });
        }
        ViewportEvent::PinchMove { distance } => {
            if let Some(pinch) = viewport.pinch.filter(|_| distance.is_finite()) {
                state.scale = clamp_scale(pinch.scale * (distance / pinch.distance));
            }
        }
        ViewportEvent::PinchEnd => viewport.pinch = None,
        ViewportEvent::Reset => viewport = Viewport::default(),
    }

    viewport
}
