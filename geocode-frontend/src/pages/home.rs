use leptos::*;

use geocode_boundary::GeocodeRequest;
use geocode_frontend_api::GeocodeApi;

use crate::{
    components::*,
    flow,
    state::{PageState, RESULT_ANCHOR_ID, RESULT_ERROR_ID},
};

#[component]
pub fn Home(api: GeocodeApi) -> impl IntoView {
    let state = PageState::new();

    // Repeated clicks are not debounced, each one starts a new run.
    let geocode_action = Action::new(move |request: &GeocodeRequest| {
        let api = api.clone();
        let request = request.clone();
        async move {
            flow::submit(&api, &state, request).await;
        }
    });

    view! {
      <section>
        <div class="container p-6 mx-auto">
          <AddressForm geocode_action />
          <Loading loading = state.loading.into() />
          <a id=RESULT_ANCHOR_ID></a>
          <SlidePanel id="result_info" expanded = state.result_expanded.into()>
            <p class="py-2">
              "Quality: "
              <span id="quality" class="font-bold">{ move || state.quality.get() }</span>
            </p>
          </SlidePanel>
          <SlidePanel id=RESULT_ERROR_ID expanded = state.error_expanded.into()>
            <p id="error_message" class="py-2 text-red-700">
              { move || state.error_message.get() }
            </p>
          </SlidePanel>
          <div id="maps" class="h-96">
            { move || {
                let map_view = state.map_view.get();
                view! { <Map map_view /> }
              }
            }
          </div>
        </div>
      </section>
    }
}
