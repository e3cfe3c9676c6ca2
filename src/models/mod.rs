//! Data models for the TravelQuote library
//!
//! This module contains the input records supplied by the booking and listing
//! views, organized by concern:
//! - Stay: Check-in/check-out range and room selection
//! - Service: Catalog entries and selected service lines
//! - Location: Geographic coordinates

pub mod location;
pub mod service;
pub mod stay;

// Re-export all public types for convenient access
pub use location::GeoPoint;
pub use service::{ServiceCatalog, ServiceEntry, ServiceLine, ServiceSelection};
pub use stay::{RoomSelection, StayRange};
