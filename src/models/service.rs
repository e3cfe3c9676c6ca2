//! Extra services (airport pickup, breakfast, guided walk, ...) offered with a stay

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A service as published in the accommodation's price list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub id: String,
    pub name: String,
    pub unit_price: Decimal,
}

/// A service picked in the booking form, before prices are attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSelection {
    pub service_id: String,
    pub quantity: i32,
}

impl ServiceSelection {
    pub fn new<S: Into<String>>(service_id: S, quantity: i32) -> Self {
        Self {
            service_id: service_id.into(),
            quantity,
        }
    }
}

/// A priced service line of a quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceLine {
    pub service_id: String,
    pub unit_price: Decimal,
    pub quantity: i32,
}

impl ServiceLine {
    /// Create a new service line
    pub fn new<S: Into<String>>(service_id: S, unit_price: Decimal, quantity: i32) -> Self {
        Self {
            service_id: service_id.into(),
            unit_price,
            quantity,
        }
    }

    /// Quantity of at least one
    #[must_use]
    pub fn has_valid_quantity(&self) -> bool {
        self.quantity >= 1
    }

    /// Non-negative unit price
    #[must_use]
    pub fn has_valid_price(&self) -> bool {
        self.unit_price >= Decimal::ZERO
    }

    /// Unrounded `unit_price * quantity`
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Read-only price list supplied by the API layer, keyed by service id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceCatalog {
    entries: HashMap<String, ServiceEntry>,
}

impl ServiceCatalog {
    /// Build a catalog; a later entry with the same id replaces an earlier one.
    pub fn new<I: IntoIterator<Item = ServiceEntry>>(entries: I) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.id.clone(), entry))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, service_id: &str) -> Option<&ServiceEntry> {
        self.entries.get(service_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attach the catalog price to a selection, `None` for an unknown id
    #[must_use]
    pub fn resolve(&self, selection: &ServiceSelection) -> Option<ServiceLine> {
        self.get(&selection.service_id).map(|entry| {
            ServiceLine::new(entry.id.clone(), entry.unit_price, selection.quantity)
        })
    }
}
