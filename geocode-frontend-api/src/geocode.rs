use async_trait::async_trait;
use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use geocode_boundary::{GeocodeRequest, GeocodeResponse};

use crate::{into_json, Geocode, Result};

pub const GEOCODE_FILE_PATH: &str = "/geocode_file";
pub const GEOCODE_ONE_PATH: &str = "/geocode";

/// Geocoding API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeApi {
    base_url: String,
}

impl GeocodeApi {
    #[must_use]
    pub const fn new(base_url: String) -> Self {
        Self { base_url }
    }

    /// Create an API for the origin the page was loaded from,
    /// e.g. `https:` and `example.org:8080`.
    #[must_use]
    pub fn from_origin(protocol: &str, host: &str) -> Self {
        Self::new(format!("{protocol}//{host}"))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn geocode_file_url(&self) -> String {
        format!("{}{GEOCODE_FILE_PATH}", self.base_url)
    }

    #[must_use]
    pub fn geocode_one_url(&self, request: &GeocodeRequest) -> String {
        let GeocodeRequest {
            address,
            postal_code,
            city,
        } = request;
        let address = utf8_percent_encode(address, NON_ALPHANUMERIC);
        let postal_code = utf8_percent_encode(postal_code, NON_ALPHANUMERIC);
        let city = utf8_percent_encode(city, NON_ALPHANUMERIC);
        format!(
            "{}{GEOCODE_ONE_PATH}/{address}/{postal_code}/{city}",
            self.base_url
        )
    }

    pub async fn geocode_file(&self, request: &GeocodeRequest) -> Result<GeocodeResponse> {
        let url = self.geocode_file_url();
        log::debug!("Geocode {request:?} via {url}");
        let response = Request::post(&url).json(request)?.send().await?;
        into_json(response).await
    }

    /// Geocode a single address with a `GET` request.
    ///
    /// Empty fields yield an unknown route. The server redirects those
    /// to an HTML page which is reported as [`Error::Parse`](crate::Error::Parse).
    pub async fn geocode_one(&self, request: &GeocodeRequest) -> Result<GeocodeResponse> {
        let url = self.geocode_one_url(request);
        log::debug!("Geocode {request:?} via {url}");
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }
}

#[async_trait(?Send)]
impl Geocode for GeocodeApi {
    async fn geocode(&self, request: &GeocodeRequest) -> Result<GeocodeResponse> {
        self.geocode_file(request).await
    }
}
