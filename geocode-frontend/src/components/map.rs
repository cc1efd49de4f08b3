use leptos::*;
use leptos_leaflet::{position, MapContainer, Marker, Popup, Position, TileLayer};
use rand::Rng;

use geocode_boundary::{Coordinate, Geocoded};

const TILE_LAYER_URL: &str =
    "https://{s}.basemaps.cartocdn.com/rastertiles/light_all/{z}/{x}/{y}.png";
const MAP_ATTRIBUTION: &str = "&copy; <a href=\"http://openstreetmap.com/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attribution/\">CARTO</a>";

const DEFAULT_CENTER: Coordinate = Coordinate::new(46.3, 2.920_767_9);
const DEFAULT_ZOOM: f64 = 6.0;

/// Zoom level of a perfect match (quality code 0).
const MAX_LOCATED_ZOOM: f64 = 17.0;

const MAP_ID_PREFIX: &str = "map";
const MAP_ID_RANGE: u32 = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub pos: Coordinate,
    pub label: String,
}

/// What the map should show.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub center: Coordinate,
    pub zoom: f64,
    pub marker: Option<MapMarker>,
}

impl MapView {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            marker: None,
        }
    }

    /// Center on a geocoded position.
    ///
    /// The zoom level decreases with the quality code.
    /// It is not clamped, leaflet applies its own bounds.
    #[must_use]
    pub fn located(geocoded: &Geocoded) -> Self {
        let zoom = MAX_LOCATED_ZOOM - f64::from(geocoded.quality.value());
        Self {
            center: geocoded.pos,
            zoom,
            marker: Some(MapMarker {
                pos: geocoded.pos,
                label: geocoded.quality_text(),
            }),
        }
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::empty()
    }
}

#[must_use]
pub fn new_map_id() -> String {
    let n = rand::thread_rng().gen_range(0..MAP_ID_RANGE);
    format!("{MAP_ID_PREFIX}{n}")
}

/// A freshly created map inside a container with a random id.
#[component]
pub fn Map(map_view: MapView) -> impl IntoView {
    let MapView {
        center,
        zoom,
        marker,
    } = map_view;
    let id = new_map_id();
    log::debug!(
        "Render map {id} at ({}, {}) with zoom {zoom}",
        center.lat,
        center.lng
    );
    let center = Position::new(center.lat, center.lng);

    view! {
      <div id=id class="h-full">
        <MapContainer
          class="h-full"
          center
          zoom
          set_view=true
        >
          <TileLayer url=TILE_LAYER_URL attribution=MAP_ATTRIBUTION />
          { marker.map(|MapMarker { pos, label }| view! {
              <Marker position=position!(pos.lat, pos.lng)>
                <Popup>
                  <strong>{ label }</strong>
                </Popup>
              </Marker>
            })
          }
        </MapContainer>
      </div>
    }
}
