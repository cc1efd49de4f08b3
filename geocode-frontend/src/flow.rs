use async_trait::async_trait;

use geocode_boundary::{GeocodeRequest, Geocoded};
use geocode_frontend_api::Geocode;

const FALLBACK_ERROR_MESSAGE: &str = "Geocoding failed";

/// The parts of the page a geocoding run updates.
#[async_trait(?Send)]
pub trait Presenter {
    fn show_loading(&self);
    fn hide_loading(&self);

    /// Close the result panel and wait until it is closed.
    async fn collapse_result(&self);

    /// Close the error panel and wait until it is closed.
    async fn collapse_error(&self);

    fn display_result(&self, geocoded: &Geocoded);
    fn display_error(&self, message: &str);
}

/// Clear previous results and geocode the given address.
///
/// The panels are closed one after the other
/// before the request is sent.
pub async fn submit<G, P>(api: &G, presenter: &P, request: GeocodeRequest)
where
    G: Geocode + ?Sized,
    P: Presenter + ?Sized,
{
    presenter.show_loading();
    presenter.collapse_result().await;
    presenter.collapse_error().await;
    geocode(api, presenter, &request).await;
}

/// Geocode an address and present the outcome.
///
/// Exactly one of the result or the error is displayed.
/// The loading indicator is hidden afterwards.
pub async fn geocode<G, P>(api: &G, presenter: &P, request: &GeocodeRequest)
where
    G: Geocode + ?Sized,
    P: Presenter + ?Sized,
{
    let outcome = match api.geocode(request).await {
        Ok(response) => {
            log::debug!(
                "Received geocoding response {} (API version {})",
                response.uuid.as_deref().unwrap_or("-"),
                response.api_version.as_deref().unwrap_or("-").trim()
            );
            response.into_geocoded().map_err(|err| err.to_string())
        }
        Err(err) => Err(err.to_string()),
    };
    match outcome {
        Ok(geocoded) => {
            log::info!("Geocoded {request:?}: {geocoded:?}");
            presenter.display_result(&geocoded);
        }
        Err(msg) => {
            log::warn!("Unable to geocode {request:?}: {msg}");
            presenter.display_error(error_message(&msg));
        }
    }
    presenter.hide_loading();
}

fn error_message(msg: &str) -> &str {
    if msg.trim().is_empty() {
        FALLBACK_ERROR_MESSAGE
    } else {
        msg
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use geocode_boundary::{Coordinate, GeocodeResponse, GeocodedData, QualityCode};
    use geocode_frontend_api::Error;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        ShowLoading,
        HideLoading,
        CollapseResult,
        CollapseError,
        Result(Geocoded),
        Error(String),
    }

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<Event>>,
    }

    impl Recorder {
        fn record(&self, event: Event) {
            self.events.borrow_mut().push(event);
        }

        fn events(&self) -> Vec<Event> {
            self.events.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl Presenter for Recorder {
        fn show_loading(&self) {
            self.record(Event::ShowLoading);
        }
        fn hide_loading(&self) {
            self.record(Event::HideLoading);
        }
        async fn collapse_result(&self) {
            self.record(Event::CollapseResult);
        }
        async fn collapse_error(&self) {
            self.record(Event::CollapseError);
        }
        fn display_result(&self, geocoded: &Geocoded) {
            self.record(Event::Result(geocoded.clone()));
        }
        fn display_error(&self, message: &str) {
            self.record(Event::Error(message.to_owned()));
        }
    }

    struct MockApi {
        response: Result<GeocodeResponse, Error>,
        requests: RefCell<Vec<GeocodeRequest>>,
    }

    impl MockApi {
        fn new(response: Result<GeocodeResponse, Error>) -> Self {
            Self {
                response,
                requests: RefCell::default(),
            }
        }
    }

    #[async_trait(?Send)]
    impl Geocode for MockApi {
        async fn geocode(&self, request: &GeocodeRequest) -> Result<GeocodeResponse, Error> {
            self.requests.borrow_mut().push(request.clone());
            self.response.clone()
        }
    }

    fn rivoli() -> GeocodeRequest {
        GeocodeRequest {
            address: "10 Rue de Rivoli".into(),
            postal_code: "75001".into(),
            city: "Paris".into(),
        }
    }

    fn paris_response() -> GeocodeResponse {
        GeocodeResponse {
            quality: [("1".to_string(), "street".to_string())].into(),
            data: Some(GeocodedData {
                lat: vec![Some(48.8566)],
                lon: vec![Some(2.3522)],
                quality: vec![Some(1.0)],
            }),
            ..Default::default()
        }
    }

    #[test]
    fn display_geocoded_result() {
        let api = MockApi::new(Ok(paris_response()));
        let presenter = Recorder::default();
        block_on(geocode(&api, &presenter, &rivoli()));
        let expected = Geocoded {
            pos: Coordinate::new(48.8566, 2.3522),
            quality: QualityCode::new(1),
            quality_label: "street".into(),
        };
        assert_eq!(
            presenter.events(),
            vec![Event::Result(expected), Event::HideLoading]
        );
        assert_eq!(*api.requests.borrow(), vec![rivoli()]);
    }

    #[test]
    fn display_error_on_missing_field() {
        let mut response = paris_response();
        response.data.as_mut().unwrap().lat.clear();
        let api = MockApi::new(Ok(response));
        let presenter = Recorder::default();
        block_on(geocode(&api, &presenter, &rivoli()));
        assert_eq!(
            presenter.events(),
            vec![
                Event::Error("Missing field 'lat' in geocoding response".into()),
                Event::HideLoading
            ]
        );
    }

    #[test]
    fn display_error_on_transport_failure() {
        let api = MockApi::new(Err(Error::Status {
            code: 502,
            text: "Bad Gateway".into(),
        }));
        let presenter = Recorder::default();
        block_on(geocode(&api, &presenter, &rivoli()));
        let events = presenter.events();
        assert_eq!(events.len(), 2);
        let Event::Error(msg) = &events[0] else {
            panic!("expected error, got {:?}", events[0]);
        };
        assert!(!msg.is_empty());
        assert_eq!(events[1], Event::HideLoading);
    }

    #[test]
    fn never_display_an_empty_error_message() {
        let api = MockApi::new(Err(Error::Fetch(String::new())));
        let presenter = Recorder::default();
        block_on(geocode(&api, &presenter, &rivoli()));
        assert_eq!(
            presenter.events()[0],
            Event::Error(FALLBACK_ERROR_MESSAGE.into())
        );
    }

    #[test]
    fn submit_collapses_panels_before_requesting() {
        let api = MockApi::new(Ok(paris_response()));
        let presenter = Recorder::default();
        block_on(submit(&api, &presenter, rivoli()));
        let events = presenter.events();
        assert_eq!(
            events[..3],
            [
                Event::ShowLoading,
                Event::CollapseResult,
                Event::CollapseError
            ]
        );
        assert!(matches!(events[3], Event::Result(_)));
        assert_eq!(events[4], Event::HideLoading);
        assert_eq!(events.len(), 5);
    }

    #[test]
    fn submit_empty_fields() {
        let api = MockApi::new(Err(Error::Status {
            code: 500,
            text: "Internal Server Error".into(),
        }));
        let presenter = Recorder::default();
        block_on(submit(&api, &presenter, GeocodeRequest::default()));
        assert_eq!(*api.requests.borrow(), vec![GeocodeRequest::default()]);
        let hidden = presenter
            .events()
            .into_iter()
            .filter(|e| *e == Event::HideLoading)
            .count();
        assert_eq!(hidden, 1);
    }
}
