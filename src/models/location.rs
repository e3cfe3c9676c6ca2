//! Location model for geographic coordinates

use crate::TravelQuoteError;
use serde::{Deserialize, Serialize};

/// Latitude/longitude pair in decimal degrees.
///
/// Fields are public and deserialization does not validate, so distance
/// operations check [`GeoPoint::is_valid`] themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees, [-90, 90]
    pub latitude: f64,
    /// Longitude in decimal degrees, [-180, 180]
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a validated point
    pub fn new(latitude: f64, longitude: f64) -> crate::Result<Self> {
        let point = Self::new_unchecked(latitude, longitude);
        if point.is_valid() {
            Ok(point)
        } else {
            Err(TravelQuoteError::invalid_coordinate(latitude, longitude))
        }
    }

    /// Create a point without validation. Use with trusted inputs only.
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both coordinates finite and within range
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Validate, returning the point itself for chaining
    pub fn validated(self) -> crate::Result<Self> {
        Self::new(self.latitude, self.longitude)
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
