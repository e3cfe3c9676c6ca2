//! Monetary rounding and formatting.
//!
//! Quote amounts are kept unrounded; rounding only happens here, when an
//! amount is shown or compared.

use crate::config::DisplayConfig;
use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits used for money when nothing else is configured
pub const MONEY_SCALE: u32 = 2;

/// Round half-up (midpoint away from zero) to [`MONEY_SCALE`] digits
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    round_to(amount, MONEY_SCALE)
}

fn round_to(amount: Decimal, scale: u32) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    // Pad so that 7000 renders as 7000.00
    rounded.rescale(scale);
    rounded
}

/// How quote amounts are rendered for the booking form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteDisplay {
    pub currency_symbol: String,
    pub scale: u32,
}

impl Default for QuoteDisplay {
    fn default() -> Self {
        Self {
            currency_symbol: "Rs.".to_string(),
            scale: MONEY_SCALE,
        }
    }
}

impl From<&DisplayConfig> for QuoteDisplay {
    fn from(config: &DisplayConfig) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
            scale: config.money_scale,
        }
    }
}

impl QuoteDisplay {
    /// Render an amount such as `Rs. 7000.00`
    #[must_use]
    pub fn format(&self, amount: Decimal) -> String {
        let rounded = round_to(amount, self.scale);
        if self.currency_symbol.is_empty() {
            rounded.to_string()
        } else {
            format!("{} {}", self.currency_symbol, rounded)
        }
    }
}
