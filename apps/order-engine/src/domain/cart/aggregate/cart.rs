//! Cart aggregate root.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CartLine, LinePricing};
use crate::domain::cart::errors::CartError;
use crate::domain::catalog::MenuItem;
use crate::domain::shared::{MenuItemId, Money, TenantId};

/// An ordered collection of cart lines for one tenant.
///
/// The total is derived on every read and never cached. Lines whose
/// quantity or weight drops to zero or below are removed entirely, so
/// no line ever persists with a non-positive amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    tenant_id: TenantId,
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart for a tenant.
    #[must_use]
    pub const fn new(tenant_id: TenantId) -> Self {
        Self {
            tenant_id,
            lines: Vec::new(),
        }
    }

    /// Rebuild a cart from persisted lines.
    #[must_use]
    pub const fn from_lines(tenant_id: TenantId, lines: Vec<CartLine>) -> Self {
        Self { tenant_id, lines }
    }

    /// Tenant this cart belongs to.
    #[must_use]
    pub const fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    /// Current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// True if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Add a catalog item to the cart.
    ///
    /// If a line for the item already exists: weight-sold items add the
    /// supplied weight to the line, unit-sold items increment the
    /// quantity by 1 (any supplied weight is ignored). Otherwise a new
    /// line is created: unit-sold items start at quantity 1, weight-sold
    /// items start at the supplied weight.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::WeightRequired`] when a weight-sold item is
    /// added without a positive weight. Returns
    /// [`CartError::NotSoldByWeight`] or [`CartError::SoldByWeight`] when
    /// the existing line's pricing mode no longer matches the catalog
    /// item, which happens when the item's pricing changed mid-session.
    pub fn add_item(&mut self, item: &MenuItem, weight: Option<Decimal>) -> Result<(), CartError> {
        if item.sold_by_weight {
            let added = match weight {
                Some(w) if w > Decimal::ZERO => w,
                _ => {
                    return Err(CartError::WeightRequired {
                        name: item.name.clone(),
                    });
                }
            };

            if let Some(line) = self.line_mut(&item.id) {
                match line.pricing() {
                    LinePricing::Weight { weight: w, .. } => {
                        let next = *w + added;
                        line.set_weight(next);
                    }
                    LinePricing::Unit { .. } => {
                        return Err(CartError::NotSoldByWeight {
                            item_id: item.id.clone(),
                        });
                    }
                }
            } else {
                self.lines.push(CartLine::by_weight(item, added));
            }
        } else if let Some(line) = self.line_mut(&item.id) {
            match line.pricing() {
                LinePricing::Unit { quantity } => {
                    let next = quantity.saturating_add(1);
                    line.set_quantity(next);
                }
                LinePricing::Weight { .. } => {
                    return Err(CartError::SoldByWeight {
                        item_id: item.id.clone(),
                    });
                }
            }
        } else {
            self.lines.push(CartLine::unit(item));
        }

        Ok(())
    }

    /// Remove the line for an item unconditionally.
    ///
    /// Removing an item with no line is a no-op.
    pub fn remove_item(&mut self, item_id: &MenuItemId) {
        self.lines.retain(|l| l.item_id() != item_id);
    }

    /// Overwrite a line's quantity.
    ///
    /// A quantity of zero or below removes the line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] if no line exists for the
    /// item, or [`CartError::SoldByWeight`] if the line is weight-priced.
    pub fn set_quantity(&mut self, item_id: &MenuItemId, quantity: i64) -> Result<(), CartError> {
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.item_id() == item_id)
            .ok_or_else(|| CartError::LineNotFound {
                item_id: item_id.clone(),
            })?;

        if line.is_weight_priced() {
            return Err(CartError::SoldByWeight {
                item_id: item_id.clone(),
            });
        }

        if quantity <= 0 {
            self.remove_item(item_id);
        } else {
            let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            line.set_quantity(quantity);
        }
        Ok(())
    }

    /// Overwrite a line's weight.
    ///
    /// A weight of zero or below removes the line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] if no line exists for the
    /// item, or [`CartError::NotSoldByWeight`] if the line is
    /// unit-priced.
    pub fn set_weight(&mut self, item_id: &MenuItemId, weight: Decimal) -> Result<(), CartError> {
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.item_id() == item_id)
            .ok_or_else(|| CartError::LineNotFound {
                item_id: item_id.clone(),
            })?;

        if !line.is_weight_priced() {
            return Err(CartError::NotSoldByWeight {
                item_id: item_id.clone(),
            });
        }

        if weight <= Decimal::ZERO {
            self.remove_item(item_id);
        } else {
            line.set_weight(weight);
        }
        Ok(())
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Derived cart total: the sum of line subtotals.
    ///
    /// Recomputed on every read, never cached.
    #[must_use]
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    fn line_mut(&mut self, item_id: &MenuItemId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.item_id() == item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    fn tenant() -> TenantId {
        TenantId::new("tenant-1")
    }

    fn burger() -> MenuItem {
        MenuItem {
            id: MenuItemId::new("item-burger"),
            name: "Burger".to_string(),
            price: Money::new(dec!(10)),
            sold_by_weight: false,
            weight_unit: None,
            image_url: None,
            category: None,
        }
    }

    fn ham() -> MenuItem {
        MenuItem {
            id: MenuItemId::new("item-ham"),
            name: "Ham".to_string(),
            price: Money::new(dec!(5)),
            sold_by_weight: true,
            weight_unit: Some("kg".to_string()),
            image_url: None,
            category: None,
        }
    }

    #[test]
    fn adding_unit_item_twice_merges_into_one_line() {
        let mut cart = Cart::new(tenant());
        cart.add_item(&burger(), None).unwrap();
        cart.add_item(&burger(), None).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(
            cart.lines()[0].pricing(),
            &LinePricing::Unit { quantity: 2 }
        );
        assert_eq!(cart.total(), Money::new(dec!(20)));
    }

    #[test]
    fn adding_weight_item_accumulates_weight() {
        let mut cart = Cart::new(tenant());
        cart.add_item(&ham(), Some(dec!(1.5))).unwrap();
        cart.add_item(&ham(), Some(dec!(0.5))).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(
            cart.lines()[0].pricing(),
            &LinePricing::Weight {
                weight: dec!(2.0),
                unit: "kg".to_string()
            }
        );
        assert_eq!(cart.total(), Money::new(dec!(10.0)));
    }

    #[test]
    fn weight_item_without_weight_is_rejected() {
        let mut cart = Cart::new(tenant());
        let result = cart.add_item(&ham(), None);
        assert_eq!(
            result,
            Err(CartError::WeightRequired {
                name: "Ham".to_string()
            })
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn weight_item_with_nonpositive_weight_is_rejected() {
        let mut cart = Cart::new(tenant());
        assert!(cart.add_item(&ham(), Some(dec!(0))).is_err());
        assert!(cart.add_item(&ham(), Some(dec!(-1))).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn unit_item_ignores_weight_argument() {
        let mut cart = Cart::new(tenant());
        cart.add_item(&burger(), Some(dec!(3))).unwrap();
        assert_eq!(
            cart.lines()[0].pricing(),
            &LinePricing::Unit { quantity: 1 }
        );
    }

    #[test]
    fn item_switched_to_weight_pricing_rejects_add_to_unit_line() {
        let mut cart = Cart::new(tenant());
        cart.add_item(&burger(), None).unwrap();

        // The catalog item now sells by weight; the unit line is stale.
        let mut reweighed = burger();
        reweighed.sold_by_weight = true;
        reweighed.weight_unit = Some("kg".to_string());

        let result = cart.add_item(&reweighed, Some(dec!(0.5)));
        assert_eq!(
            result,
            Err(CartError::NotSoldByWeight {
                item_id: MenuItemId::new("item-burger")
            })
        );
        // The existing line is untouched.
        assert_eq!(
            cart.lines()[0].pricing(),
            &LinePricing::Unit { quantity: 1 }
        );
    }

    #[test]
    fn item_switched_to_unit_pricing_rejects_add_to_weight_line() {
        let mut cart = Cart::new(tenant());
        cart.add_item(&ham(), Some(dec!(1.5))).unwrap();

        let mut repriced = ham();
        repriced.sold_by_weight = false;
        repriced.weight_unit = None;

        let result = cart.add_item(&repriced, None);
        assert_eq!(
            result,
            Err(CartError::SoldByWeight {
                item_id: MenuItemId::new("item-ham")
            })
        );
        assert_eq!(cart.total(), Money::new(dec!(7.5)));
    }

    #[test]
    fn add_then_remove_restores_prior_total() {
        let mut cart = Cart::new(tenant());
        cart.add_item(&burger(), None).unwrap();
        let before = cart.total();

        cart.add_item(&ham(), Some(dec!(1))).unwrap();
        cart.remove_item(&MenuItemId::new("item-ham"));

        assert_eq!(cart.total(), before);
    }

    #[test_case(0 ; "zero removes the line")]
    #[test_case(-5 ; "negative removes the line")]
    fn quantity_floor_removes_line(qty: i64) {
        let mut cart = Cart::new(tenant());
        cart.add_item(&burger(), None).unwrap();

        cart.set_quantity(&MenuItemId::new("item-burger"), qty)
            .unwrap();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::ZERO);
    }

    #[test]
    fn set_quantity_overwrites() {
        let mut cart = Cart::new(tenant());
        cart.add_item(&burger(), None).unwrap();

        cart.set_quantity(&MenuItemId::new("item-burger"), 4)
            .unwrap();

        assert_eq!(cart.total(), Money::new(dec!(40)));
    }

    #[test]
    fn weight_floor_removes_line() {
        let mut cart = Cart::new(tenant());
        cart.add_item(&ham(), Some(dec!(1.5))).unwrap();

        cart.set_weight(&MenuItemId::new("item-ham"), dec!(0))
            .unwrap();
        assert!(cart.is_empty());

        cart.add_item(&ham(), Some(dec!(1.5))).unwrap();
        cart.set_weight(&MenuItemId::new("item-ham"), dec!(-0.5))
            .unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn set_weight_overwrites() {
        let mut cart = Cart::new(tenant());
        cart.add_item(&ham(), Some(dec!(1))).unwrap();

        cart.set_weight(&MenuItemId::new("item-ham"), dec!(2.5))
            .unwrap();

        assert_eq!(cart.total(), Money::new(dec!(12.5)));
    }

    #[test]
    fn set_quantity_on_missing_line_fails() {
        let mut cart = Cart::new(tenant());
        let result = cart.set_quantity(&MenuItemId::new("item-none"), 2);
        assert!(matches!(result, Err(CartError::LineNotFound { .. })));
    }

    #[test]
    fn set_quantity_on_weight_line_fails() {
        let mut cart = Cart::new(tenant());
        cart.add_item(&ham(), Some(dec!(1))).unwrap();
        let result = cart.set_quantity(&MenuItemId::new("item-ham"), 2);
        assert!(matches!(result, Err(CartError::SoldByWeight { .. })));
    }

    #[test]
    fn set_weight_on_unit_line_fails() {
        let mut cart = Cart::new(tenant());
        cart.add_item(&burger(), None).unwrap();
        let result = cart.set_weight(&MenuItemId::new("item-burger"), dec!(1));
        assert!(matches!(result, Err(CartError::NotSoldByWeight { .. })));
    }

    #[test]
    fn remove_missing_item_is_noop() {
        let mut cart = Cart::new(tenant());
        cart.add_item(&burger(), None).unwrap();
        cart.remove_item(&MenuItemId::new("item-none"));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new(tenant());
        cart.add_item(&burger(), None).unwrap();
        cart.add_item(&ham(), Some(dec!(1))).unwrap();

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::ZERO);
    }

    #[test]
    fn mixed_cart_total() {
        let mut cart = Cart::new(tenant());
        cart.add_item(&burger(), None).unwrap();
        cart.add_item(&burger(), None).unwrap();
        cart.add_item(&ham(), Some(dec!(0.5))).unwrap();

        // 2 x $10 + 0.5kg x $5/kg
        assert_eq!(cart.total(), Money::new(dec!(22.5)));
    }

    #[test]
    fn cart_serde_roundtrip() {
        let mut cart = Cart::new(tenant());
        cart.add_item(&burger(), None).unwrap();
        cart.add_item(&ham(), Some(dec!(1.25))).unwrap();

        let json = serde_json::to_string(&cart).unwrap();
        let parsed: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cart);
    }
}
