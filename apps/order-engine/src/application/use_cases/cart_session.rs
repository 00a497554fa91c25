//! Cart session bound to a persistence store.
//!
//! Wraps the cart aggregate with write-through persistence. The
//! in-memory cart is authoritative; a store failure is logged and the
//! session continues, so a flaky disk never blocks ordering.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::warn;

use crate::application::ports::{CartStore, CartStoreError};
use crate::domain::cart::{Cart, CartError, CartLine};
use crate::domain::catalog::MenuItem;
use crate::domain::shared::{MenuItemId, Money, TenantId};

/// A tenant's live cart, persisted through a [`CartStore`].
pub struct CartSession<S: CartStore> {
    cart: Cart,
    store: Arc<S>,
}

impl<S: CartStore> CartSession<S> {
    /// Open a session, restoring any persisted lines for the tenant.
    ///
    /// # Errors
    ///
    /// Returns error if persisted data exists but cannot be read.
    pub async fn open(tenant_id: TenantId, store: Arc<S>) -> Result<Self, CartStoreError> {
        let lines = store.load(&tenant_id).await?;
        Ok(Self {
            cart: Cart::from_lines(tenant_id, lines),
            store,
        })
    }

    /// The underlying cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// True if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Running total across all lines.
    #[must_use]
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Add a catalog item, persisting the updated cart.
    ///
    /// # Errors
    ///
    /// Returns error if the domain rejects the addition.
    pub async fn add_item(
        &mut self,
        item: &MenuItem,
        weight: Option<Decimal>,
    ) -> Result<(), CartError> {
        self.cart.add_item(item, weight)?;
        self.persist().await;
        Ok(())
    }

    /// Remove an item's line, persisting the updated cart.
    pub async fn remove_item(&mut self, item_id: &MenuItemId) {
        self.cart.remove_item(item_id);
        self.persist().await;
    }

    /// Overwrite a unit line's quantity, persisting the updated cart.
    ///
    /// # Errors
    ///
    /// Returns error if the domain rejects the change.
    pub async fn set_quantity(
        &mut self,
        item_id: &MenuItemId,
        quantity: i64,
    ) -> Result<(), CartError> {
        self.cart.set_quantity(item_id, quantity)?;
        self.persist().await;
        Ok(())
    }

    /// Overwrite a weight line's weight, persisting the updated cart.
    ///
    /// # Errors
    ///
    /// Returns error if the domain rejects the change.
    pub async fn set_weight(
        &mut self,
        item_id: &MenuItemId,
        weight: Decimal,
    ) -> Result<(), CartError> {
        self.cart.set_weight(item_id, weight)?;
        self.persist().await;
        Ok(())
    }

    /// Empty the cart and drop its persisted copy.
    pub async fn clear(&mut self) {
        self.cart.clear();
        if let Err(error) = self.store.clear(self.cart.tenant_id()).await {
            warn!(
                tenant_id = %self.cart.tenant_id(),
                %error,
                "failed to clear persisted cart"
            );
        }
    }

    async fn persist(&self) {
        let tenant_id = self.cart.tenant_id();
        if let Err(error) = self.store.store(tenant_id, self.cart.lines()).await {
            warn!(%tenant_id, %error, "failed to persist cart");
        }
    }
}
