//! A confirmed order line.

use serde::{Deserialize, Serialize};

use crate::domain::cart::{CartLine, LinePricing};
use crate::domain::shared::{MenuItemId, Money};

/// A line item frozen into an order at checkout.
///
/// Name, unit price and subtotal are snapshots taken when the order is
/// placed; later catalog edits do not affect them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    item_id: MenuItemId,
    name: String,
    unit_price: Money,
    pricing: LinePricing,
    subtotal: Money,
}

impl OrderItem {
    /// Freeze a cart line into an order item.
    #[must_use]
    pub fn from_line(line: &CartLine) -> Self {
        Self {
            item_id: line.item_id().clone(),
            name: line.name().to_string(),
            unit_price: line.unit_price(),
            pricing: line.pricing().clone(),
            subtotal: line.subtotal(),
        }
    }

    /// Catalog item this line was created from.
    #[must_use]
    pub const fn item_id(&self) -> &MenuItemId {
        &self.item_id
    }

    /// Display name at the time of checkout.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price per unit or per weight unit at the time of checkout.
    #[must_use]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Pricing mode and amount.
    #[must_use]
    pub const fn pricing(&self) -> &LinePricing {
        &self.pricing
    }

    /// Line subtotal frozen at checkout.
    #[must_use]
    pub const fn subtotal(&self) -> Money {
        self.subtotal
    }
}
