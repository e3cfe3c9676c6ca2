//! Booking price computation
//!
//! Prices a stay as `nightly_rate * room_count * nights` plus the selected
//! service lines. Problems with individual inputs are collected as
//! [`QuoteErrorKind`]s and the rest of the quote is still computed, so the
//! form can show a best-effort breakdown next to its inline errors.

use crate::models::{RoomSelection, ServiceCatalog, ServiceLine, ServiceSelection, StayRange};
use crate::quote::money::{QuoteDisplay, round_money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Reasons a quote cannot be submitted as-is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteErrorKind {
    /// Check-out is not after check-in
    InvalidDateRange,
    /// A service line has a quantity below one; the line is left out
    InvalidServiceQuantity,
    /// A service line has a negative unit price; the line is left out
    InvalidServicePrice,
    /// A selected service is not in the catalog; the selection is left out
    UnknownService,
    /// Fewer than one room selected
    InvalidRoomCount,
    /// Negative nightly rate
    InvalidNightlyRate,
    /// An amount exceeded the decimal range; the affected part is zeroed
    AmountOverflow,
}

impl QuoteErrorKind {
    /// Inline message for the booking form
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            QuoteErrorKind::InvalidDateRange => "Check-out date must be after check-in date.",
            QuoteErrorKind::InvalidServiceQuantity => "Service quantity must be at least 1.",
            QuoteErrorKind::InvalidServicePrice => "Service price cannot be negative.",
            QuoteErrorKind::UnknownService => "Selected service is no longer available.",
            QuoteErrorKind::InvalidRoomCount => "Select at least one room.",
            QuoteErrorKind::InvalidNightlyRate => "Room rate cannot be negative.",
            QuoteErrorKind::AmountOverflow => "Booking amount is too large.",
        }
    }
}

/// Price breakdown of a prospective booking.
///
/// Built only by [`BookingQuoteCalculator`]; a changed input means a new quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteResult {
    nights: u32,
    room_subtotal: Decimal,
    services_subtotal: Decimal,
    total: Decimal,
    valid: bool,
    errors: BTreeSet<QuoteErrorKind>,
}

impl QuoteResult {
    /// Nights between check-in and check-out
    #[must_use]
    pub fn nights(&self) -> u32 {
        self.nights
    }

    /// Unrounded room cost for the whole stay
    #[must_use]
    pub fn room_subtotal(&self) -> Decimal {
        self.room_subtotal
    }

    /// Unrounded sum of the valid service lines
    #[must_use]
    pub fn services_subtotal(&self) -> Decimal {
        self.services_subtotal
    }

    /// Unrounded total
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Total rounded half-up to two decimals, for display and comparison
    #[must_use]
    pub fn rounded_total(&self) -> Decimal {
        round_money(self.total)
    }

    /// Total formatted for display
    #[must_use]
    pub fn display_total(&self, display: &QuoteDisplay) -> String {
        display.format(self.total)
    }

    /// Whether the booking can be confirmed
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Error kinds found while pricing
    #[must_use]
    pub fn errors(&self) -> &BTreeSet<QuoteErrorKind> {
        &self.errors
    }

    /// Whether `kind` was reported
    #[must_use]
    pub fn has_error(&self, kind: QuoteErrorKind) -> bool {
        self.errors.contains(&kind)
    }

    /// Messages for every error kind, in a stable order
    #[must_use]
    pub fn error_messages(&self) -> Vec<&'static str> {
        self.errors.iter().map(QuoteErrorKind::message).collect()
    }
}

/// Stateless booking price calculator
pub struct BookingQuoteCalculator;

impl BookingQuoteCalculator {
    /// Price a stay with already-priced service lines
    #[must_use]
    #[tracing::instrument(name = "compute_quote", level = "debug", skip(services), fields(service_lines = services.len()))]
    pub fn compute_quote(
        stay: &StayRange,
        room: &RoomSelection,
        services: &[ServiceLine],
    ) -> QuoteResult {
        Self::build(stay, room, services, BTreeSet::new())
    }

    /// Price a stay from form selections, looking up service prices in the catalog.
    ///
    /// Selections whose id is not in the catalog are left out and reported as
    /// [`QuoteErrorKind::UnknownService`].
    #[must_use]
    #[tracing::instrument(name = "quote_selection", level = "debug", skip(catalog, selections), fields(selection_count = selections.len()))]
    pub fn quote_selection(
        stay: &StayRange,
        room: &RoomSelection,
        catalog: &ServiceCatalog,
        selections: &[ServiceSelection],
    ) -> QuoteResult {
        let mut errors = BTreeSet::new();
        let mut lines = Vec::with_capacity(selections.len());

        for selection in selections {
            match catalog.resolve(selection) {
                Some(line) => lines.push(line),
                None => {
                    debug!("Service {} not found in catalog", selection.service_id);
                    errors.insert(QuoteErrorKind::UnknownService);
                }
            }
        }

        Self::build(stay, room, &lines, errors)
    }

    fn build(
        stay: &StayRange,
        room: &RoomSelection,
        services: &[ServiceLine],
        mut errors: BTreeSet<QuoteErrorKind>,
    ) -> QuoteResult {
        let nights = stay.nights();
        if nights == 0 {
            debug!(
                "Check-out {} is not after check-in {}",
                stay.check_out, stay.check_in
            );
            errors.insert(QuoteErrorKind::InvalidDateRange);
        }

        let room_subtotal = Self::room_subtotal(room, nights, &mut errors);
        let services_subtotal = Self::services_subtotal(services, &mut errors);

        let total = room_subtotal
            .checked_add(services_subtotal)
            .unwrap_or_else(|| {
                errors.insert(QuoteErrorKind::AmountOverflow);
                Decimal::ZERO
            });

        let valid = errors.is_empty() && room.has_valid_count() && room.has_valid_rate();

        debug!(
            nights,
            %room_subtotal,
            %services_subtotal,
            %total,
            valid,
            "Computed quote"
        );

        QuoteResult {
            nights,
            room_subtotal,
            services_subtotal,
            total,
            valid,
            errors,
        }
    }

    fn room_subtotal(
        room: &RoomSelection,
        nights: u32,
        errors: &mut BTreeSet<QuoteErrorKind>,
    ) -> Decimal {
        if !room.has_valid_count() {
            errors.insert(QuoteErrorKind::InvalidRoomCount);
        }
        if !room.has_valid_rate() {
            errors.insert(QuoteErrorKind::InvalidNightlyRate);
        }
        if nights == 0 || !room.has_valid_count() || !room.has_valid_rate() {
            return Decimal::ZERO;
        }

        room.nightly_rate
            .checked_mul(Decimal::from(room.room_count))
            .and_then(|amount| amount.checked_mul(Decimal::from(nights)))
            .unwrap_or_else(|| {
                errors.insert(QuoteErrorKind::AmountOverflow);
                Decimal::ZERO
            })
    }

    fn services_subtotal(
        services: &[ServiceLine],
        errors: &mut BTreeSet<QuoteErrorKind>,
    ) -> Decimal {
        let mut subtotal = Decimal::ZERO;

        for line in services {
            if !line.has_valid_quantity() {
                debug!(
                    "Excluding service {} with quantity {}",
                    line.service_id, line.quantity
                );
                errors.insert(QuoteErrorKind::InvalidServiceQuantity);
                continue;
            }
            if !line.has_valid_price() {
                debug!(
                    "Excluding service {} with unit price {}",
                    line.service_id, line.unit_price
                );
                errors.insert(QuoteErrorKind::InvalidServicePrice);
                continue;
            }

            match line
                .unit_price
                .checked_mul(Decimal::from(line.quantity))
                .and_then(|amount| subtotal.checked_add(amount))
            {
                Some(sum) => subtotal = sum,
                None => {
                    errors.insert(QuoteErrorKind::AmountOverflow);
                }
            }
        }

        subtotal
    }
}
