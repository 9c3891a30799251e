//! Gesture events delivered to the consumer callback.

use crate::geometry::Rect;
use crate::session::Sample;

/// One drag sample: emitted for every move and once, with `exit` set, on release.
#[derive(Debug, Clone, PartialEq)]
pub struct DragEvent<N> {
    /// Element-relative position of this sample.
    pub x: f64,
    pub y: f64,
    /// Change since the previous sample.
    pub x_delta: f64,
    pub y_delta: f64,
    /// Change since the press that started the gesture.
    pub x_distance: f64,
    pub y_distance: f64,
    /// Bounding box used for this sample.
    pub rect: Rect,
    pub node: N,
    /// Set only on the terminal event of a gesture.
    pub exit: bool,
}

impl<N> DragEvent<N> {
    pub(crate) fn from_sample(sample: Sample, rect: Rect, node: N, exit: bool) -> Self {
        Self {
            x: sample.x,
            y: sample.y,
            x_delta: sample.x_delta,
            y_delta: sample.y_delta,
            x_distance: sample.x_distance,
            y_distance: sample.y_distance,
            rect,
            node,
            exit,
        }
    }
}
