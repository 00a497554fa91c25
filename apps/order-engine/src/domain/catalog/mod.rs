//! Menu catalog view.
//!
//! The catalog is owned by an external system; the engine only reads
//! the fields it needs to hydrate new cart lines and never mutates
//! catalog data.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{MenuItemId, Money};

/// A menu item as seen by the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Catalog identifier.
    pub id: MenuItemId,
    /// Display name.
    pub name: String,
    /// Unit price, or price per weight unit for weight-sold items.
    pub price: Money,
    /// Whether the item is priced by weight instead of per unit.
    #[serde(default)]
    pub sold_by_weight: bool,
    /// Label for the weight unit (e.g. "kg"), when sold by weight.
    #[serde(default)]
    pub weight_unit: Option<String>,
    /// Image reference for display.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Category reference for display grouping.
    #[serde(default)]
    pub category: Option<String>,
}
