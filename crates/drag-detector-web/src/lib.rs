//! Drag Detector for the browser
//!
//! Binds `drag-detector-core` to the DOM: elements are drag targets, the document is the
//! global input source, and [`use_drag_detector`] manages a detector from a Yew component.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod dom;
pub mod hook;

pub use dom::{
    mouse_input, pointer_input, touch_input, web_detector, DocumentSource, DomTarget, WebDragDetector,
    WebDragOptions, WebError,
};
pub use drag_detector_core::{DragEvent, DragOptions, Rect, Thresholds};
pub use hook::{use_drag_detector, DomBindings, UseDragDetectorHandle};
