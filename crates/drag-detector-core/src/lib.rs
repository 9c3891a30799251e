//! Drag Detector Core Library
//!
//! Turns raw mouse/touch input against a single element into a drag gesture stream:
//! element-relative position, per-move deltas, distance since the press, and a terminal
//! exit event. Presses can be gated by per-axis thresholds.
//!
//! This crate has no platform dependency. Hosts plug in an element through [`DragTarget`]
//! and a global input surface through [`InputSource`]; `drag-detector-web` provides both
//! for the browser.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod detector;
pub mod event;
pub mod geometry;
pub mod input;
pub mod options;
pub mod session;

pub use detector::{DragBindings, DragDetector};
pub use event::DragEvent;
pub use geometry::{Point, Rect};
pub use input::{Channel, DragTarget, InputHandler, InputSource, PointerInput};
pub use options::{Axis, DragCallback, DragOptions, DragOptionsBuilder, OptionsError, Thresholds};
pub use session::{Sample, Session};
