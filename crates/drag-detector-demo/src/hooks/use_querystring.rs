use std::ops::Deref;

use yew::prelude::*;

/// JSON value of query parameter `key` on the current page, if present and parseable.
fn read_param<T: serde::de::DeserializeOwned>(key: &str) -> Option<T> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    let raw = params.get(key)?;
    match serde_json::from_str::<T>(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring query parameter {}={}: {}", key, raw, e);
            None
        }
    }
}

/// Writes `value` back as query parameter `key` without adding a history entry.
fn write_param<T: serde::Serialize>(key: &str, value: &T) -> Option<()> {
    let window = web_sys::window()?;
    let location = window.location();
    let search = location.search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;

    let serialized = serde_json::to_string(value).ok()?;
    params.set(key, &serialized);

    let pathname = location.pathname().unwrap_or_default();
    let hash = location.hash().unwrap_or_default();
    let params_str = params.to_string().as_string().unwrap_or_default();
    let new_url = if params_str.is_empty() {
        format!("{pathname}{hash}")
    } else {
        format!("{pathname}?{params_str}{hash}")
    };

    window
        .history()
        .ok()?
        .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url))
        .ok()
}

/// State backed by a JSON-encoded query parameter.
#[hook]
pub fn use_querystring<T, F>(key: &'static str, init_fn: F) -> UseStateHandle<T>
where
    T: 'static + Clone + serde::Serialize + serde::de::DeserializeOwned + PartialEq,
    F: Fn() -> T + 'static,
{
    let state = use_state(|| read_param(key).unwrap_or_else(init_fn));

    use_effect_with(state.clone(), move |state| {
        if write_param(key, state.deref()).is_none() {
            tracing::debug!("Could not sync query parameter {}", key);
        }
    });

    state
}
