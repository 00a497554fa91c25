//! Order change notification port.

use tokio::sync::broadcast;

use crate::domain::shared::TenantId;

/// Notification that a tenant's order list changed.
///
/// Carries no payload beyond the tenant: subscribers refetch the full
/// list, which keeps every consumer convergent on the repository state
/// regardless of which change they missed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdersChanged {
    /// Tenant whose orders changed.
    pub tenant_id: TenantId,
}

/// Publish/subscribe channel for order change notifications.
pub trait ChangeFeedPort: Send + Sync {
    /// Subscribe to change notifications for a tenant.
    fn subscribe(&self, tenant_id: &TenantId) -> broadcast::Receiver<OrdersChanged>;

    /// Signal that a tenant's order list changed.
    fn notify(&self, tenant_id: &TenantId);
}
