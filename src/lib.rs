//! `TravelQuote` - Booking quotes and distance ordering for accommodation listings
//!
//! This library provides the pure computations behind the booking form and
//! the nearby-listings view: pricing a prospective stay with its extra
//! services, and ordering listings by great-circle distance from a
//! reference point.

pub mod config;
pub mod error;
pub mod geo;
pub mod input;
pub mod models;
pub mod quote;
pub mod telemetry;

// Re-export core types for public API
pub use config::TravelQuoteConfig;
pub use error::TravelQuoteError;
pub use geo::{DistanceCandidate, DistanceResult, DistanceSorter, haversine_distance_km};
pub use models::{
    GeoPoint, RoomSelection, ServiceCatalog, ServiceEntry, ServiceLine, ServiceSelection,
    StayRange,
};
pub use quote::{BookingQuoteCalculator, QuoteDisplay, QuoteErrorKind, QuoteResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelQuoteError>;
