//! Haversine distance in kilometers

use crate::TravelQuoteError;
use crate::models::GeoPoint;
use tracing::debug;

/// Mean Earth radius used by the haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points, rounded to meters (3 decimals).
///
/// Fails with [`TravelQuoteError::InvalidCoordinate`] if either point is not
/// finite and in range. Identical points are exactly `0.0`.
pub fn haversine_distance_km(a: &GeoPoint, b: &GeoPoint) -> crate::Result<f64> {
    for point in [a, b] {
        if !point.is_valid() {
            debug!("Rejecting coordinate {:?}", point);
            return Err(TravelQuoteError::invalid_coordinate(
                point.latitude,
                point.longitude,
            ));
        }
    }

    if a == b {
        return Ok(0.0);
    }

    // Feed the pair in a fixed order so d(a, b) and d(b, a) are bit-identical
    let (first, second) = if (a.latitude, a.longitude) <= (b.latitude, b.longitude) {
        (a, b)
    } else {
        (b, a)
    };

    let distance = haversine::distance(
        haversine::Location {
            latitude: first.latitude,
            longitude: first.longitude,
        },
        haversine::Location {
            latitude: second.latitude,
            longitude: second.longitude,
        },
        haversine::Units::Kilometers,
    );

    // sqrt(1 - h) goes NaN when rounding pushes h past 1 for antipodal points
    let distance = if distance.is_finite() {
        distance
    } else {
        EARTH_RADIUS_KM * std::f64::consts::PI
    };

    Ok(round_to_meters(distance))
}

fn round_to_meters(km: f64) -> f64 {
    (km * 1000.0).round() / 1000.0
}
