//! Readout of the most recent drag event.

use drag_detector_core::DragEvent;
use yew::prelude::*;

/// Copy of an event's measurements, without the node reference.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Readout {
    pub x: f64,
    pub y: f64,
    pub x_delta: f64,
    pub y_delta: f64,
    pub x_distance: f64,
    pub y_distance: f64,
    pub exit: bool,
}

impl<N> From<&DragEvent<N>> for Readout {
    fn from(event: &DragEvent<N>) -> Self {
        Self {
            x: event.x,
            y: event.y,
            x_delta: event.x_delta,
            y_delta: event.y_delta,
            x_distance: event.x_distance,
            y_distance: event.y_distance,
            exit: event.exit,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DragReadoutProps {
    pub last: Option<Readout>,
    pub gestures: u32,
}

#[function_component(DragReadout)]
pub fn drag_readout(props: &DragReadoutProps) -> Html {
    let Some(r) = props.last else {
        return html! { <div class="drag-readout">{ "Drag the track to start." }</div> };
    };

    html! {
        <div class="drag-readout">
            <div>{ format!("position  ({:.0}, {:.0})", r.x, r.y) }</div>
            <div>{ format!("delta     ({:.0}, {:.0})", r.x_delta, r.y_delta) }</div>
            <div>{ format!("distance  ({:.0}, {:.0})", r.x_distance, r.y_distance) }</div>
            <div>{ if r.exit { "released" } else { "dragging" } }</div>
            <div>{ format!("gestures  {}", props.gestures) }</div>
        </div>
    }
}
