//! Geographic coordinate types.
//!
//! Providers exchange coordinates in `[longitude, latitude]` order; the map
//! widget consumes `(latitude, longitude)`. Keeping the two orderings as
//! separate types makes the conversion explicit.

/// Error for coordinate construction from non-finite components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("coordinate components must be finite numbers")]
pub struct InvalidCoordinate;

/// A validated coordinate in provider order (longitude, latitude).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lon: f64,
    lat: f64,
}

impl Coordinate {
    /// Create a coordinate from longitude and latitude.
    pub fn from_lon_lat(lon: f64, lat: f64) -> Result<Self, InvalidCoordinate> {
        if lon.is_finite() && lat.is_finite() {
            Ok(Self { lon, lat })
        } else {
            Err(InvalidCoordinate)
        }
    }

    /// Interpret a JSON array element sequence as a coordinate.
    ///
    /// Accepts sequences with two or more elements whose first two entries
    /// are numbers; anything else is rejected. Extra elements (altitude and
    /// the like) are ignored.
    pub fn from_json_values(values: &[serde_json::Value]) -> Option<Self> {
        let lon = values.first()?.as_f64()?;
        let lat = values.get(1)?.as_f64()?;
        Self::from_lon_lat(lon, lat).ok()
    }

    pub fn longitude(&self) -> f64 {
        self.lon
    }

    pub fn latitude(&self) -> f64 {
        self.lat
    }

    /// Convert to display ordering.
    pub fn to_lat_lng(self) -> LatLng {
        LatLng {
            lat: self.lat,
            lng: self.lon,
        }
    }
}

/// A point in display order (latitude, longitude).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}
