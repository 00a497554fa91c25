//! Cart errors.

use std::fmt;

use crate::domain::shared::MenuItemId;

/// Errors that can occur while mutating a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// A weight-sold item was added without a positive weight.
    WeightRequired {
        /// Item name.
        name: String,
    },

    /// A weight edit was attempted on a unit-priced line.
    NotSoldByWeight {
        /// Item identifier.
        item_id: MenuItemId,
    },

    /// A quantity edit was attempted on a weight-priced line.
    SoldByWeight {
        /// Item identifier.
        item_id: MenuItemId,
    },

    /// No line exists for the given item.
    LineNotFound {
        /// Item identifier.
        item_id: MenuItemId,
    },
}

impl fmt::Display for CartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WeightRequired { name } => {
                write!(f, "Item '{name}' is sold by weight; a positive weight is required")
            }
            Self::NotSoldByWeight { item_id } => {
                write!(f, "Item {item_id} is priced per unit, not by weight")
            }
            Self::SoldByWeight { item_id } => {
                write!(f, "Item {item_id} is priced by weight, not per unit")
            }
            Self::LineNotFound { item_id } => {
                write!(f, "No cart line for item {item_id}")
            }
        }
    }
}

impl std::error::Error for CartError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_error_weight_required_display() {
        let err = CartError::WeightRequired {
            name: "Ham".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("Ham"));
        assert!(msg.contains("weight"));
    }

    #[test]
    fn cart_error_line_not_found_display() {
        let err = CartError::LineNotFound {
            item_id: MenuItemId::new("item-9"),
        };
        assert!(format!("{err}").contains("item-9"));
    }

    #[test]
    fn cart_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(CartError::SoldByWeight {
            item_id: MenuItemId::new("item-1"),
        });
        assert!(!err.to_string().is_empty());
    }
}
