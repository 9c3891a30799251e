//! Input abstractions consumed by the detector.
//!
//! The detector never talks to a windowing system directly. Hosts provide:
//! - a [`DragTarget`] whose geometry anchors element-relative coordinates,
//! - an [`InputSource`] that delivers global move/release input while subscribed,
//! - [`PointerInput`] samples normalized from their native mouse/touch events.

use std::rc::Rc;

use crate::geometry::{Point, Rect};

/// Handler invoked by an [`InputSource`] for every sample on a subscribed channel.
pub type InputHandler = Rc<dyn Fn(&PointerInput)>;

/// A raw pointer sample in client coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    Mouse { client_x: f64, client_y: f64 },
    /// Active touch points in client coordinates. Only the first one is read.
    Touch { touches: Vec<Point> },
}

impl PointerInput {
    pub fn mouse(client_x: f64, client_y: f64) -> Self {
        Self::Mouse { client_x, client_y }
    }

    pub fn touch(client_x: f64, client_y: f64) -> Self {
        Self::Touch {
            touches: vec![Point::new(client_x, client_y)],
        }
    }

    /// Client position of the sample, `None` for a touch sample with no touch points
    /// (e.g. `touchend`, where the lifted finger is no longer listed).
    pub fn client_position(&self) -> Option<Point> {
        match self {
            Self::Mouse { client_x, client_y } => Some(Point::new(*client_x, *client_y)),
            Self::Touch { touches } => touches.first().copied(),
        }
    }
}

/// Global listener channels the detector subscribes to while a gesture is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    MouseMove,
    MouseUp,
    TouchMove,
    TouchEnd,
}

impl Channel {
    pub const ALL: [Channel; 4] = [
        Channel::MouseMove,
        Channel::MouseUp,
        Channel::TouchMove,
        Channel::TouchEnd,
    ];

    /// DOM event type name for this channel.
    pub const fn event_type(self) -> &'static str {
        match self {
            Channel::MouseMove => "mousemove",
            Channel::MouseUp => "mouseup",
            Channel::TouchMove => "touchmove",
            Channel::TouchEnd => "touchend",
        }
    }

    pub const fn is_release(self) -> bool {
        matches!(self, Channel::MouseUp | Channel::TouchEnd)
    }
}

/// Element whose bounding box anchors element-relative coordinates.
pub trait DragTarget {
    fn bounding_rect(&self) -> Rect;
}

/// Global input dispatch surface (the document in a browser).
///
/// Subscriptions are guards: dropping one removes the listener it represents.
pub trait InputSource {
    type Subscription;

    fn subscribe(&self, channel: Channel, handler: InputHandler) -> Self::Subscription;
}
