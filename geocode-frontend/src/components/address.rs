use leptos::*;

use geocode_boundary::GeocodeRequest;

const INPUT_CLASS: &str = "form-control block w-full px-3 py-1.5 mb-4 text-base font-normal text-gray-700 bg-white border border-solid border-gray-300 rounded focus:border-blue-600 focus:outline-none";

#[component]
pub fn AddressForm(geocode_action: Action<GeocodeRequest, ()>) -> impl IntoView {
    let address = RwSignal::new(String::new());
    let postal_code = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());

    // The values are sent as entered.
    let request = move || GeocodeRequest {
        address: address.get_untracked(),
        postal_code: postal_code.get_untracked(),
        city: city.get_untracked(),
    };

    view! {
      <form on:submit=|ev| ev.prevent_default()>
        <input
          id="address"
          type="text"
          placeholder="Address"
          class=INPUT_CLASS
          on:input=move |ev| address.set(event_target_value(&ev))
        />
        <input
          id="postal_code"
          type="text"
          placeholder="Postal code"
          class=INPUT_CLASS
          on:input=move |ev| postal_code.set(event_target_value(&ev))
        />
        <input
          id="city"
          type="text"
          placeholder="City"
          class=INPUT_CLASS
          on:input=move |ev| city.set(event_target_value(&ev))
        />
        <button
          id="geocode"
          type="button"
          class="inline-block px-6 py-2.5 font-medium text-xs leading-tight uppercase rounded shadow-md bg-blue-600 text-white hover:shadow-lg"
          on:click=move |_| geocode_action.dispatch(request())
        >
          "Geocode"
        </button>
      </form>
    }
}
