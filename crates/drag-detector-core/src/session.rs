//! Per-gesture session state and the coordinate/delta arithmetic.

use crate::geometry::{Point, Rect};

/// Measurements of one sample, before they are bundled into a [`DragEvent`](crate::DragEvent).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub x_delta: f64,
    pub y_delta: f64,
    pub x_distance: f64,
    pub y_distance: f64,
}

/// State of the gesture currently tracked by a detector.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Session {
    pub active: bool,
    /// Element-relative press position, fixed for the gesture.
    pub start: Point,
    /// Element-relative position of the last processed sample.
    pub current: Point,
    /// Delta between the two most recent samples.
    pub last_delta: (f64, f64),
    /// Geometry cached on the first move of the gesture.
    pub bounds: Option<Rect>,
}

impl Session {
    /// Clears per-sample residue left by a previous gesture.
    pub fn reset_residuals(&mut self) {
        self.current = Point::ORIGIN;
        self.last_delta = (0.0, 0.0);
    }

    pub fn begin(&mut self, press: Point) {
        self.start = press;
        self.current = press;
        self.active = true;
    }

    /// Records a move to `position` and returns its measurements.
    pub fn advance(&mut self, position: Point) -> Sample {
        let (x_delta, y_delta) = position - self.current;
        let (x_distance, y_distance) = position - self.start;
        self.last_delta = (x_delta, y_delta);
        self.current = position;
        Sample {
            x: position.x,
            y: position.y,
            x_delta,
            y_delta,
            x_distance,
            y_distance,
        }
    }

    /// Measurements for the terminal event.
    ///
    /// The delta slots are swapped relative to the last move: `x_delta` carries the
    /// last vertical delta and `y_delta` the last horizontal one. Consumers rely on
    /// this layout, keep it.
    pub fn terminal(&self) -> Sample {
        let (x_distance, y_distance) = self.current - self.start;
        Sample {
            x: self.current.x,
            y: self.current.y,
            x_delta: self.last_delta.1,
            y_delta: self.last_delta.0,
            x_distance,
            y_distance,
        }
    }

    pub fn end(&mut self) {
        self.active = false;
        self.bounds = None;
    }
}
