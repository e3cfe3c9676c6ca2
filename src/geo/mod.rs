//! Geographic module
//!
//! Great-circle distances between listings and a reference point, with
//! null-aware ordering and radius filtering for the listing views.

pub mod distance;
pub mod sorter;

pub use distance::{EARTH_RADIUS_KM, haversine_distance_km};
pub use sorter::{DistanceCandidate, DistanceResult, DistanceSorter};
