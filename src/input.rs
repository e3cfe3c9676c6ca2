//! Parsing of raw booking-form and location input
//!
//! Form fields arrive as strings. They are parsed strictly here so that an
//! empty or malformed field becomes a validation error instead of a silent
//! zero in a price or a coordinate.

use crate::TravelQuoteError;
use crate::models::GeoPoint;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse an ISO `YYYY-MM-DD` date
pub fn parse_date(field: &str, raw: &str) -> crate::Result<NaiveDate> {
    let value = non_empty(field, raw)?;
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
        TravelQuoteError::validation(field, format!("'{value}' is not a YYYY-MM-DD date ({e})"))
    })
}

/// Parse a non-negative monetary amount such as `1000` or `350.50`
pub fn parse_amount(field: &str, raw: &str) -> crate::Result<Decimal> {
    let value = non_empty(field, raw)?;
    let amount = Decimal::from_str(value)
        .map_err(|_| TravelQuoteError::validation(field, format!("'{value}' is not a number")))?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(TravelQuoteError::validation(field, "amount cannot be negative"));
    }

    Ok(amount)
}

/// Parse a whole-number count. Zero and negative values are returned as-is so
/// the quote can report them.
pub fn parse_count(field: &str, raw: &str) -> crate::Result<i32> {
    let value = non_empty(field, raw)?;
    value.parse::<i32>().map_err(|_| {
        TravelQuoteError::validation(field, format!("'{value}' is not a whole number"))
    })
}

/// Parse one coordinate in decimal degrees
pub fn parse_coordinate(field: &str, raw: &str) -> crate::Result<f64> {
    let value = non_empty(field, raw)?;
    let coordinate = value
        .parse::<f64>()
        .map_err(|_| TravelQuoteError::validation(field, format!("'{value}' is not a number")))?;

    if !coordinate.is_finite() {
        return Err(TravelQuoteError::validation(field, "coordinate must be finite"));
    }

    Ok(coordinate)
}

/// Parse a latitude/longitude pair into a validated point
pub fn parse_geo_point(raw_latitude: &str, raw_longitude: &str) -> crate::Result<GeoPoint> {
    let latitude = parse_coordinate("latitude", raw_latitude)?;
    let longitude = parse_coordinate("longitude", raw_longitude)?;
    GeoPoint::new(latitude, longitude)
}

fn non_empty<'a>(field: &str, raw: &'a str) -> crate::Result<&'a str> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(TravelQuoteError::validation(field, "value is required"));
    }
    Ok(value)
}
