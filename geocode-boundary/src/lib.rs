use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

mod geocoded;

pub use self::geocoded::*;

/// A single address to geocode.
///
/// The fields are passed through as entered, i.e. they are
/// neither trimmed nor validated and might be empty.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocodeRequest {
    pub address     : String,
    pub postal_code : String,
    pub city        : String,
}

/// The envelope returned by the geocoding routes.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geocoded_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Human readable labels by quality code.
    #[serde(default)]
    pub quality: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<GeocodedData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ResponseErrors>,
}

/// Column oriented result data.
///
/// Each column holds one element per geocoded row.
/// A `null` element means that nothing was found for that row.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedData {
    #[serde(default)]
    pub lat: Vec<Option<f64>>,
    #[serde(default)]
    pub lon: Vec<Option<f64>>,
    #[serde(default)]
    pub quality: Vec<Option<f64>>,
}

/// Errors reported by the server instead of result data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseErrors {
    Single(String),
    Multiple(Vec<String>),
}

impl fmt::Display for ResponseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(msg) => f.write_str(msg),
            Self::Multiple(msgs) => f.write_str(&msgs.join(" ")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Confidence of a geocoding match.
///
/// Lower values are more precise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QualityCode(u8);

impl QualityCode {
    #[must_use]
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for QualityCode {
    fn from(from: u8) -> Self {
        Self(from)
    }
}

impl From<QualityCode> for u8 {
    fn from(from: QualityCode) -> Self {
        from.0
    }
}

impl TryFrom<f64> for QualityCode {
    type Error = ResponseError;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn try_from(from: f64) -> Result<Self, Self::Error> {
        if !from.is_finite() || from < 0.0 || from.fract() != 0.0 || from > f64::from(u8::MAX) {
            return Err(ResponseError::InvalidQuality(from));
        }
        Ok(Self(from as u8))
    }
}

impl fmt::Display for QualityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
