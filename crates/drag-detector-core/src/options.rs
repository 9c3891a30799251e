//! Detector configuration: per-axis thresholds and the gesture callback.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::event::DragEvent;
use crate::geometry::Point;

/// Consumer callback receiving every move and terminal event.
pub type DragCallback<N> = Rc<dyn Fn(&DragEvent<N>)>;

/// Error type for building [`DragOptions`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptionsError {
    #[error("drag detector options require a callback")]
    MissingCallback,
    #[error("{axis} threshold must be a number or unbounded, got {value}")]
    InvalidThreshold { axis: Axis, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

fn unbounded() -> f64 {
    f64::INFINITY
}

/// A threshold is any number or `+inf`; NaN and `-inf` have no faithful encoding.
fn is_valid_bound(value: f64) -> bool {
    !value.is_nan() && value != f64::NEG_INFINITY
}

/// Serializes an unbounded threshold as `null` and reads `null` back as unbounded.
mod bound {
    use serde::{de, ser, Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if *value == f64::INFINITY {
            serializer.serialize_none()
        } else if super::is_valid_bound(*value) {
            serializer.serialize_some(value)
        } else {
            Err(ser::Error::custom(format_args!(
                "threshold must be a number or unbounded, got {value}"
            )))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Option::<f64>::deserialize(deserializer)? {
            None => Ok(f64::INFINITY),
            Some(value) if super::is_valid_bound(value) => Ok(value),
            Some(value) => Err(de::Error::custom(format_args!(
                "threshold must be a number or unbounded, got {value}"
            ))),
        }
    }
}

/// Upper bounds on the element-relative press position that may start a gesture.
///
/// Missing or `null` fields deserialize as unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default = "unbounded", with = "bound")]
    pub x: f64,
    #[serde(default = "unbounded", with = "bound")]
    pub y: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl Thresholds {
    pub const UNBOUNDED: Thresholds = Thresholds {
        x: f64::INFINITY,
        y: f64::INFINITY,
    };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Threshold gate: a press qualifies iff it lies within both bounds.
    pub fn admits(&self, press: Point) -> bool {
        press.x <= self.x && press.y <= self.y
    }

    /// Rejects NaN and `-inf` on either axis.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !is_valid_bound(self.x) {
            return Err(OptionsError::InvalidThreshold {
                axis: Axis::X,
                value: self.x,
            });
        }
        if !is_valid_bound(self.y) {
            return Err(OptionsError::InvalidThreshold {
                axis: Axis::Y,
                value: self.y,
            });
        }
        Ok(())
    }
}

/// Complete detector configuration.
///
/// The `with_*` setters and the public fields are unchecked; [`DragOptions::builder`] is the
/// validating path. Debug builds assert on invalid thresholds passed to the setters.
pub struct DragOptions<N> {
    pub thresholds: Thresholds,
    pub callback: DragCallback<N>,
}

impl<N> DragOptions<N> {
    /// Options with unbounded thresholds.
    pub fn new(callback: impl Fn(&DragEvent<N>) + 'static) -> Self {
        Self {
            thresholds: Thresholds::UNBOUNDED,
            callback: Rc::new(callback),
        }
    }

    pub fn builder() -> DragOptionsBuilder<N> {
        DragOptionsBuilder::default()
    }

    #[must_use]
    pub fn with_x_threshold(mut self, x: f64) -> Self {
        debug_assert!(is_valid_bound(x), "invalid x threshold {x}");
        self.thresholds.x = x;
        self
    }

    #[must_use]
    pub fn with_y_threshold(mut self, y: f64) -> Self {
        debug_assert!(is_valid_bound(y), "invalid y threshold {y}");
        self.thresholds.y = y;
        self
    }

    #[must_use]
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        debug_assert!(thresholds.validate().is_ok(), "invalid {thresholds:?}");
        self.thresholds = thresholds;
        self
    }
}

impl<N> Clone for DragOptions<N> {
    fn clone(&self) -> Self {
        Self {
            thresholds: self.thresholds,
            callback: Rc::clone(&self.callback),
        }
    }
}

// Callbacks compare by identity so options can serve as effect dependencies.
impl<N> PartialEq for DragOptions<N> {
    fn eq(&self, other: &Self) -> bool {
        self.thresholds == other.thresholds && Rc::ptr_eq(&self.callback, &other.callback)
    }
}

impl<N> fmt::Debug for DragOptions<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragOptions")
            .field("thresholds", &self.thresholds)
            .finish_non_exhaustive()
    }
}

/// Partial options merged over the defaults by [`DragOptionsBuilder::build`].
pub struct DragOptionsBuilder<N> {
    x_threshold: Option<f64>,
    y_threshold: Option<f64>,
    callback: Option<DragCallback<N>>,
}

impl<N> Default for DragOptionsBuilder<N> {
    fn default() -> Self {
        Self {
            x_threshold: None,
            y_threshold: None,
            callback: None,
        }
    }
}

impl<N> DragOptionsBuilder<N> {
    #[must_use]
    pub fn x_threshold(mut self, x: f64) -> Self {
        self.x_threshold = Some(x);
        self
    }

    #[must_use]
    pub fn y_threshold(mut self, y: f64) -> Self {
        self.y_threshold = Some(y);
        self
    }

    /// Applies every bounded axis of `thresholds`; unbounded axes are left unset.
    #[must_use]
    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        if thresholds.x != f64::INFINITY {
            self.x_threshold = Some(thresholds.x);
        }
        if thresholds.y != f64::INFINITY {
            self.y_threshold = Some(thresholds.y);
        }
        self
    }

    #[must_use]
    pub fn callback(mut self, callback: impl Fn(&DragEvent<N>) + 'static) -> Self {
        self.callback = Some(Rc::new(callback));
        self
    }

    pub fn build(self) -> Result<DragOptions<N>, OptionsError> {
        let defaults = Thresholds::default();
        let thresholds = Thresholds {
            x: self.x_threshold.unwrap_or(defaults.x),
            y: self.y_threshold.unwrap_or(defaults.y),
        };
        thresholds.validate()?;
        let callback = self.callback.ok_or(OptionsError::MissingCallback)?;
        Ok(DragOptions {
            thresholds,
            callback,
        })
    }
}
