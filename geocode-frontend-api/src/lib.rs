use async_trait::async_trait;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

use geocode_boundary::{GeocodeRequest, GeocodeResponse};

mod geocode;

pub use self::geocode::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("Request failed with status {code} {text}")]
    Status { code: u16, text: String },

    #[error("Invalid response: {0}")]
    Parse(String),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => Self::Parse(err.to_string()),
            err => Self::Fetch(format!("{err}")),
        }
    }
}

/// Resolve addresses into coordinates.
#[async_trait(?Send)]
pub trait Geocode {
    async fn geocode(&self, request: &GeocodeRequest) -> Result<GeocodeResponse>;
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        Err(Error::Status {
            code: response.status(),
            text: response.status_text(),
        })
    }
}
