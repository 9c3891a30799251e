//! Main application component.

use drag_detector_core::Thresholds;
use yew::prelude::*;

use crate::components::Slider;
use crate::hooks::use_querystring;

/// Query parameter holding the press thresholds, e.g. `?thresholds={"x":50,"y":null}`.
const THRESHOLDS_KEY: &str = "thresholds";

#[function_component(App)]
pub fn app() -> Html {
    let thresholds = use_querystring(THRESHOLDS_KEY, Thresholds::default);

    let on_toggle = {
        let thresholds = thresholds.clone();
        Callback::from(move |_: MouseEvent| {
            let next = if *thresholds == Thresholds::UNBOUNDED {
                Thresholds::new(50.0, f64::INFINITY)
            } else {
                Thresholds::UNBOUNDED
            };
            tracing::info!("Switching press thresholds to {:?}", next);
            thresholds.set(next);
        })
    };

    let label = if *thresholds == Thresholds::UNBOUNDED {
        "Press anywhere on the track".to_string()
    } else {
        format!("Press within the first {:.0}px of the track", thresholds.x)
    };

    html! {
        <main>
            <h1>{ "drag-detector" }</h1>
            <p>{ label }</p>
            <button onclick={on_toggle}>{ "Toggle threshold" }</button>
            <Slider thresholds={*thresholds} />
        </main>
    }
}
