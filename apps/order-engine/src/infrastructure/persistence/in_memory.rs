//! In-memory order repository.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ordering::aggregate::Order;
use crate::domain::ordering::{OrderError, OrderRepository};
use crate::domain::shared::{OrderId, TenantId};

/// In-memory implementation of [`OrderRepository`].
///
/// Backed by a `RwLock<HashMap>` keyed by order ID, with a per-tenant
/// counter for display numbers. Suitable for tests and single-process
/// deployments.
pub struct InMemoryOrderRepository {
    orders: RwLock<HashMap<String, Order>>,
    counters: RwLock<HashMap<String, u64>>,
}

impl InMemoryOrderRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
            counters: RwLock::new(HashMap::new()),
        }
    }

    fn next_number(&self, tenant_id: &TenantId) -> Result<u64, OrderError> {
        let mut counters = self.counters.write().map_err(|_| OrderError::Storage {
            message: "counter lock poisoned".to_string(),
        })?;
        let counter = counters.entry(tenant_id.to_string()).or_insert(0);
        *counter += 1;
        Ok(*counter)
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, mut order: Order) -> Result<Order, OrderError> {
        order.assign_number(self.next_number(order.tenant_id())?);

        let mut orders = self.orders.write().map_err(|_| OrderError::Storage {
            message: "order lock poisoned".to_string(),
        })?;
        orders.insert(order.id().to_string(), order.clone());
        Ok(order)
    }

    async fn find_by_id(
        &self,
        tenant_id: &TenantId,
        order_id: &OrderId,
    ) -> Result<Option<Order>, OrderError> {
        let orders = self.orders.read().map_err(|_| OrderError::Storage {
            message: "order lock poisoned".to_string(),
        })?;
        Ok(orders
            .get(order_id.as_str())
            .filter(|o| o.tenant_id() == tenant_id)
            .cloned())
    }

    async fn update(&self, order: &Order) -> Result<(), OrderError> {
        let mut orders = self.orders.write().map_err(|_| OrderError::Storage {
            message: "order lock poisoned".to_string(),
        })?;
        if !orders.contains_key(order.id().as_str()) {
            return Err(OrderError::NotFound {
                order_id: order.id().to_string(),
            });
        }
        orders.insert(order.id().to_string(), order.clone());
        Ok(())
    }

    async fn list(&self, tenant_id: &TenantId, limit: usize) -> Result<Vec<Order>, OrderError> {
        let orders = self.orders.read().map_err(|_| OrderError::Storage {
            message: "order lock poisoned".to_string(),
        })?;

        let mut result: Vec<Order> = orders
            .values()
            .filter(|o| o.tenant_id() == tenant_id)
            .cloned()
            .collect();

        // Newest first; the display number breaks created_at ties.
        result.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then(b.number().cmp(&a.number()))
        });
        result.truncate(limit);
        Ok(result)
    }
}
