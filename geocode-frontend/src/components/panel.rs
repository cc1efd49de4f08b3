use leptos::*;

use crate::state::SLIDE_DURATION_MS;

/// A panel that slides open and closed.
#[component]
pub fn SlidePanel(id: &'static str, expanded: Signal<bool>, children: Children) -> impl IntoView {
    let transition = format!("transition: max-height {SLIDE_DURATION_MS}ms ease-in-out;");
    let style = move || {
        let max_height = if expanded.get() { "100vh" } else { "0" };
        format!("{transition} max-height: {max_height};")
    };
    view! {
      <div id=id class="overflow-hidden" style=style>
        { children() }
      </div>
    }
}

#[component]
pub fn Loading(loading: Signal<bool>) -> impl IntoView {
    view! {
      <div
        id="loading"
        class="py-2 text-gray-500"
        style:display=move || if loading.get() { "block" } else { "none" }
      >
        "Geocoding..."
      </div>
    }
}
