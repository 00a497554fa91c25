//! A single unconfirmed order line.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::MenuItem;
use crate::domain::shared::{MenuItemId, Money};

/// How a line is priced.
///
/// Exactly one mode applies per line, fixed when the line is created
/// from the catalog item's `sold_by_weight` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LinePricing {
    /// Whole units at the item's unit price.
    Unit {
        /// Number of units, always >= 1.
        quantity: u32,
    },
    /// A measured weight at the item's per-weight-unit price.
    Weight {
        /// Measured weight, always > 0.
        weight: Decimal,
        /// Weight unit label (e.g. "kg").
        unit: String,
    },
}

/// An unconfirmed order line held before submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    item_id: MenuItemId,
    name: String,
    unit_price: Money,
    pricing: LinePricing,
    image_url: Option<String>,
    category: Option<String>,
}

impl CartLine {
    /// Create a unit-priced line with quantity 1.
    #[must_use]
    pub fn unit(item: &MenuItem) -> Self {
        Self {
            item_id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.price,
            pricing: LinePricing::Unit { quantity: 1 },
            image_url: item.image_url.clone(),
            category: item.category.clone(),
        }
    }

    /// Create a weight-priced line with the given weight.
    #[must_use]
    pub fn by_weight(item: &MenuItem, weight: Decimal) -> Self {
        Self {
            item_id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.price,
            pricing: LinePricing::Weight {
                weight,
                unit: item.weight_unit.clone().unwrap_or_else(|| "kg".to_string()),
            },
            image_url: item.image_url.clone(),
            category: item.category.clone(),
        }
    }

    /// Catalog item this line references.
    #[must_use]
    pub const fn item_id(&self) -> &MenuItemId {
        &self.item_id
    }

    /// Display name frozen at line creation.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price per unit, or per weight unit for weight-sold items.
    #[must_use]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Pricing mode and amount.
    #[must_use]
    pub const fn pricing(&self) -> &LinePricing {
        &self.pricing
    }

    /// Image reference for display.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Category reference for display.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// True if this line is priced by weight.
    #[must_use]
    pub const fn is_weight_priced(&self) -> bool {
        matches!(self.pricing, LinePricing::Weight { .. })
    }

    /// Line subtotal: `unit_price × quantity` or `unit_price × weight`.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        match &self.pricing {
            LinePricing::Unit { quantity } => self.unit_price * *quantity,
            LinePricing::Weight { weight, .. } => self.unit_price * *weight,
        }
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        if let LinePricing::Unit { quantity: q } = &mut self.pricing {
            *q = quantity;
        }
    }

    pub(crate) fn set_weight(&mut self, weight: Decimal) {
        if let LinePricing::Weight { weight: w, .. } = &mut self.pricing {
            *w = weight;
        }
    }
}
