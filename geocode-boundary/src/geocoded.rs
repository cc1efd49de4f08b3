use thiserror::Error;

use crate::{Coordinate, GeocodeResponse, GeocodedData, QualityCode};

const NOT_LOCATED_MESSAGE: &str = "The address could not be located";

/// A successfully geocoded address.
#[derive(Debug, Clone, PartialEq)]
pub struct Geocoded {
    pub pos: Coordinate,
    pub quality: QualityCode,
    pub quality_label: String,
}

impl Geocoded {
    /// The quality code together with its label, e.g. `1 : Successful`.
    #[must_use]
    pub fn quality_text(&self) -> String {
        quality_text(self.quality, &self.quality_label)
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResponseError {
    #[error("{0}")]
    Rejected(String),

    #[error("Missing field '{0}' in geocoding response")]
    MissingField(&'static str),

    /// Nothing was found, described by the quality text if available.
    #[error("{0}")]
    NotLocated(String),

    #[error("Invalid quality code: {0}")]
    InvalidQuality(f64),

    #[error("Unknown quality code: {0}")]
    UnknownQuality(QualityCode),
}

impl GeocodeResponse {
    /// Extract the first geocoded row.
    ///
    /// Only the first element of each column is considered,
    /// additional rows are ignored.
    pub fn into_geocoded(self) -> Result<Geocoded, ResponseError> {
        let Self {
            quality: mut labels,
            data,
            errors,
            ..
        } = self;
        if let Some(errors) = errors {
            return Err(ResponseError::Rejected(errors.to_string()));
        }
        let GeocodedData { lat, lon, quality } = data.ok_or(ResponseError::MissingField("data"))?;
        let lat = first(&lat, "lat")?;
        let lon = first(&lon, "lon")?;
        let quality = first(&quality, "quality")?;
        let (Some(lat), Some(lng), Some(quality)) = (lat, lon, quality) else {
            // The server explains a failed lookup by its quality code
            let msg = quality
                .and_then(|q| QualityCode::try_from(q).ok())
                .and_then(|q| labels.get(&q.to_string()).map(|label| quality_text(q, label)))
                .unwrap_or_else(|| NOT_LOCATED_MESSAGE.to_string());
            return Err(ResponseError::NotLocated(msg));
        };
        let quality = QualityCode::try_from(quality)?;
        let quality_label = labels
            .remove(&quality.to_string())
            .ok_or(ResponseError::UnknownQuality(quality))?;
        Ok(Geocoded {
            pos: Coordinate::new(lat, lng),
            quality,
            quality_label,
        })
    }
}

fn quality_text(quality: QualityCode, label: &str) -> String {
    format!("{quality} : {label}")
}

fn first(column: &[Option<f64>], name: &'static str) -> Result<Option<f64>, ResponseError> {
    column
        .first()
        .copied()
        .ok_or(ResponseError::MissingField(name))
}
