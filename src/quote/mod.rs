//! Booking quote module
//!
//! This module prices a prospective booking before it is submitted:
//! - Nights, room subtotal, services subtotal and total
//! - Per-line validation with partial degradation instead of failure
//! - Catalog resolution of selected services
//! - Half-up rounding and currency formatting for display

pub mod calculator;
pub mod money;

pub use calculator::{BookingQuoteCalculator, QuoteErrorKind, QuoteResult};
pub use money::{QuoteDisplay, round_money};
