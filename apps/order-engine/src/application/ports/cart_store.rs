//! Cart persistence port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::cart::CartLine;
use crate::domain::shared::TenantId;

/// Errors from the cart store.
#[derive(Debug, Error)]
pub enum CartStoreError {
    /// Underlying storage I/O failed.
    #[error("Cart store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored cart data could not be encoded or decoded.
    #[error("Cart store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Tenant-scoped persistence for unconfirmed cart lines.
///
/// The cart survives process restarts so an in-progress order is not
/// lost. Store failures are non-fatal to cart mutations; the in-memory
/// cart stays authoritative for the session.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Load the persisted lines for a tenant. A missing cart is empty.
    ///
    /// # Errors
    ///
    /// Returns error if the stored data exists but cannot be read.
    async fn load(&self, tenant_id: &TenantId) -> Result<Vec<CartLine>, CartStoreError>;

    /// Persist the current lines for a tenant, replacing any prior set.
    ///
    /// # Errors
    ///
    /// Returns error if the data cannot be written.
    async fn store(&self, tenant_id: &TenantId, lines: &[CartLine]) -> Result<(), CartStoreError>;

    /// Drop the persisted cart for a tenant. Clearing a missing cart is
    /// a no-op.
    ///
    /// # Errors
    ///
    /// Returns error if the removal fails.
    async fn clear(&self, tenant_id: &TenantId) -> Result<(), CartStoreError>;
}
