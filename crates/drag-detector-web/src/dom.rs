//! DOM plumbing: elements as drag targets, the document as the global input source.

use drag_detector_core::{
    Channel, DragDetector, DragOptions, DragTarget, InputHandler, InputSource, Point,
    PointerInput, Rect,
};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, MouseEvent, TouchEvent};

/// Error type for acquiring the browser environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WebError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
}

/// An element used as drag target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomTarget(pub Element);

impl From<Element> for DomTarget {
    fn from(element: Element) -> Self {
        Self(element)
    }
}

impl DragTarget for DomTarget {
    fn bounding_rect(&self) -> Rect {
        let rect = self.0.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}

/// Document-level listeners: drags keep tracking after the pointer leaves the element.
#[derive(Debug, Clone)]
pub struct DocumentSource {
    document: Document,
}

impl DocumentSource {
    pub fn new() -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoDocument)?;
        Ok(Self::from_document(document))
    }

    pub fn from_document(document: Document) -> Self {
        Self { document }
    }
}

impl InputSource for DocumentSource {
    type Subscription = EventListener;

    fn subscribe(&self, channel: Channel, handler: InputHandler) -> EventListener {
        // Default options register a passive, bubbling listener.
        EventListener::new_with_options(
            &self.document,
            channel.event_type(),
            EventListenerOptions::default(),
            move |event| handler(&pointer_input(event)),
        )
    }
}

/// Detector wired to the browser document.
pub type WebDragDetector = DragDetector<DomTarget, DocumentSource>;

pub type WebDragOptions = DragOptions<DomTarget>;

/// Creates a detector listening on the current document.
pub fn web_detector(options: WebDragOptions) -> Result<WebDragDetector, WebError> {
    Ok(DragDetector::new(options, DocumentSource::new()?))
}

pub fn mouse_input(event: &MouseEvent) -> PointerInput {
    PointerInput::mouse(f64::from(event.client_x()), f64::from(event.client_y()))
}

/// Reads the first touch point only.
pub fn touch_input(event: &TouchEvent) -> PointerInput {
    let touches = event
        .touches()
        .get(0)
        .map(|touch| Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())))
        .into_iter()
        .collect();
    PointerInput::Touch { touches }
}

/// Normalizes any mouse or touch event. Other events carry no position.
pub fn pointer_input(event: &Event) -> PointerInput {
    if let Some(touch) = event.dyn_ref::<TouchEvent>() {
        touch_input(touch)
    } else if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        mouse_input(mouse)
    } else {
        PointerInput::Touch { touches: vec![] }
    }
}
