//! Yew hook that owns a drag detector for the lifetime of a component.

use std::rc::Rc;

use web_sys::{Element, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::dom::{mouse_input, touch_input, web_detector, DomTarget, WebDragDetector, WebDragOptions};

/// Attributes for wiring a detector to an element in `html!`.
///
/// ```ignore
/// let drag = use_drag_detector(options);
/// let bindings = drag.bindings();
/// html! {
///     <div ref={bindings.node_ref.clone()}
///          onmousedown={bindings.onmousedown.clone()}
///          ontouchstart={bindings.ontouchstart.clone()} />
/// }
/// ```
#[derive(Clone, PartialEq)]
pub struct DomBindings {
    pub node_ref: NodeRef,
    pub onmousedown: Callback<MouseEvent>,
    pub ontouchstart: Callback<TouchEvent>,
}

impl DomBindings {
    fn new(detector: Option<&WebDragDetector>) -> Self {
        let Some(detector) = detector else {
            return Self {
                node_ref: NodeRef::default(),
                onmousedown: Callback::from(|_| ()),
                ontouchstart: Callback::from(|_| ()),
            };
        };
        let bindings = detector.bindings();
        let on_mouse_down = Rc::clone(&bindings.on_mouse_down);
        let on_touch_start = Rc::clone(&bindings.on_touch_start);
        Self {
            node_ref: NodeRef::default(),
            onmousedown: Callback::from(move |e: MouseEvent| on_mouse_down(&mouse_input(&e))),
            ontouchstart: Callback::from(move |e: TouchEvent| on_touch_start(&touch_input(&e))),
        }
    }
}

struct DragHandleInner {
    detector: Option<WebDragDetector>,
    bindings: DomBindings,
}

/// State handle for the [`use_drag_detector`] hook.
#[derive(Clone)]
pub struct UseDragDetectorHandle {
    inner: Rc<DragHandleInner>,
}

impl UseDragDetectorHandle {
    /// `None` when no browser document was available.
    pub fn detector(&self) -> Option<&WebDragDetector> {
        self.inner.detector.as_ref()
    }

    pub fn bindings(&self) -> &DomBindings {
        &self.inner.bindings
    }

    pub fn is_active(&self) -> bool {
        self.detector().is_some_and(WebDragDetector::is_active)
    }
}

impl PartialEq for UseDragDetectorHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Hook that creates a drag detector once per component.
///
/// Options are pushed to the detector whenever they change (callbacks compare by identity),
/// without interrupting a drag in progress. The element behind `bindings().node_ref` is
/// registered after every render it changes in, and the detector is destroyed on unmount.
#[hook]
pub fn use_drag_detector(options: WebDragOptions) -> UseDragDetectorHandle {
    let inner = use_memo((), {
        let options = options.clone();
        move |_| {
            let detector = match web_detector(options) {
                Ok(detector) => Some(detector),
                Err(e) => {
                    tracing::error!("Failed to create drag detector: {}", e);
                    None
                }
            };
            let bindings = DomBindings::new(detector.as_ref());
            DragHandleInner { detector, bindings }
        }
    });
    let handle = UseDragDetectorHandle { inner };

    {
        let handle = handle.clone();
        use_effect_with(options, move |options| {
            if let Some(detector) = handle.detector() {
                detector.set_options(options.clone());
            }
        });
    }

    {
        let handle = handle.clone();
        use_effect(move || {
            if let (Some(detector), Some(element)) = (
                handle.detector(),
                handle.bindings().node_ref.cast::<Element>(),
            ) {
                let target = DomTarget::from(element);
                if detector.target().as_ref() != Some(&target) {
                    detector.register(target);
                }
            }
        });
    }

    {
        let handle = handle.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(detector) = handle.detector() {
                    detector.destroy();
                }
            }
        });
    }

    handle
}
