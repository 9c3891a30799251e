//! Horizontal slider driven by a drag detector.

use std::rc::Rc;

use drag_detector_core::{DragEvent, DragOptions, Thresholds};
use drag_detector_web::{use_drag_detector, DomTarget};
use yew::prelude::*;

use super::readout::{DragReadout, Readout};

/// Handle diameter in pixels, kept in sync with `style.css`.
const HANDLE_SIZE: f64 = 40.0;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SliderState {
    pub offset: f64,
    pub dragging: bool,
    pub last: Option<Readout>,
    pub gestures: u32,
}

pub enum SliderAction {
    Drag { x_delta: f64, width: f64, readout: Readout },
    Release(Readout),
}

impl From<&DragEvent<DomTarget>> for SliderAction {
    fn from(event: &DragEvent<DomTarget>) -> Self {
        let readout = Readout::from(event);
        if event.exit {
            SliderAction::Release(readout)
        } else {
            SliderAction::Drag {
                x_delta: event.x_delta,
                width: event.rect.width,
                readout,
            }
        }
    }
}

impl Reducible for SliderState {
    type Action = SliderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new_state = (*self).clone();
        match action {
            SliderAction::Drag {
                x_delta,
                width,
                readout,
            } => {
                let max = (width - HANDLE_SIZE).max(0.0);
                new_state.offset = (new_state.offset + x_delta).clamp(0.0, max);
                new_state.dragging = true;
                new_state.last = Some(readout);
            }
            // The terminal event's deltas are not applied to the position.
            SliderAction::Release(readout) => {
                new_state.dragging = false;
                new_state.last = Some(readout);
                new_state.gestures += 1;
            }
        }
        Rc::new(new_state)
    }
}

#[derive(Properties, PartialEq)]
pub struct SliderProps {
    pub thresholds: Thresholds,
}

/// Slider track; drags start anywhere on the track within the configured thresholds.
#[function_component(Slider)]
pub fn slider(props: &SliderProps) -> Html {
    let state = use_reducer(SliderState::default);

    let options = {
        let dispatcher = state.dispatcher();
        use_memo(props.thresholds, move |thresholds| {
            DragOptions::new(move |event: &DragEvent<DomTarget>| {
                dispatcher.dispatch(SliderAction::from(event));
            })
            .with_thresholds(*thresholds)
        })
    };
    let drag = use_drag_detector((*options).clone());
    let bindings = drag.bindings().clone();

    let track_class = classes!("slider-track", state.dragging.then_some("dragging"));
    let handle_style = format!("transform: translateX({:.1}px);", state.offset);

    html! {
        <div>
            <div
                class={track_class}
                ref={bindings.node_ref}
                onmousedown={bindings.onmousedown}
                ontouchstart={bindings.ontouchstart}
            >
                <div class="slider-handle" style={handle_style} />
            </div>
            <DragReadout last={state.last} gestures={state.gestures} />
        </div>
    }
}
