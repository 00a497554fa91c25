//! Order repository port.

use async_trait::async_trait;

use crate::domain::ordering::aggregate::Order;
use crate::domain::ordering::errors::OrderError;
use crate::domain::shared::{OrderId, TenantId};

/// Persistence gateway for orders.
///
/// Every method is tenant-scoped; an adapter must never return another
/// tenant's orders.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a new order, assigning its per-tenant display number.
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    async fn create(&self, order: Order) -> Result<Order, OrderError>;

    /// Find an order by ID within a tenant.
    ///
    /// # Errors
    ///
    /// Returns error if the lookup fails. A missing order is `Ok(None)`.
    async fn find_by_id(
        &self,
        tenant_id: &TenantId,
        order_id: &OrderId,
    ) -> Result<Option<Order>, OrderError>;

    /// Persist changes to an existing order.
    ///
    /// # Errors
    ///
    /// Returns error if the order does not exist or persistence fails.
    async fn update(&self, order: &Order) -> Result<(), OrderError>;

    /// List a tenant's orders, newest first, up to `limit`.
    ///
    /// # Errors
    ///
    /// Returns error if the listing fails.
    async fn list(&self, tenant_id: &TenantId, limit: usize) -> Result<Vec<Order>, OrderError>;
}
