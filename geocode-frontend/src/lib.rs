use anyhow::anyhow;
use leptos::*;
use wasm_bindgen::JsValue;

use geocode_frontend_api::GeocodeApi;

mod components;
mod flow;
mod pages;
mod state;

use pages::*;

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    let api = match page_origin_api() {
        Ok(api) => api,
        Err(err) => {
            log::error!("Unable to determine page origin: {err}");
            // Fall back to a URL relative to the current page
            GeocodeApi::new(String::new())
        }
    };
    log::debug!("Geocoding API: {}", api.geocode_file_url());

    view! {
      <main>
        <Home api />
      </main>
    }
}

/// The API is served by the same origin as the page.
fn page_origin_api() -> anyhow::Result<GeocodeApi> {
    let location = window().location();
    let protocol = location.protocol().map_err(js_error)?;
    let host = location.host().map_err(js_error)?;
    Ok(GeocodeApi::from_origin(&protocol, &host))
}

fn js_error(err: JsValue) -> anyhow::Error {
    anyhow!(err
        .as_string()
        .unwrap_or_else(|| "unknown JS error".to_string()))
}
