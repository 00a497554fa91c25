//! Staff actions on an existing order.

use std::sync::Arc;

use tracing::info;

use crate::application::ports::ChangeFeedPort;
use crate::domain::ordering::aggregate::Order;
use crate::domain::ordering::value_objects::{OrderStatus, PaymentStatus};
use crate::domain::ordering::{OrderError, OrderRepository};
use crate::domain::shared::{OrderId, TenantId};

/// Update Status use case.
///
/// Loads the order, applies a domain transition, persists it and
/// notifies subscribers. Illegal transitions are rejected by the domain
/// before anything is written.
pub struct UpdateStatusUseCase<R, F>
where
    R: OrderRepository,
    F: ChangeFeedPort,
{
    repository: Arc<R>,
    change_feed: Arc<F>,
}

impl<R, F> UpdateStatusUseCase<R, F>
where
    R: OrderRepository,
    F: ChangeFeedPort,
{
    /// Create the use case with its collaborators.
    pub fn new(repository: Arc<R>, change_feed: Arc<F>) -> Self {
        Self {
            repository,
            change_feed,
        }
    }

    /// Advance an order's kitchen status.
    ///
    /// # Errors
    ///
    /// Returns error if the order is missing, the transition is
    /// invalid, or persistence fails.
    pub async fn advance(
        &self,
        tenant_id: &TenantId,
        order_id: &OrderId,
        next: OrderStatus,
    ) -> Result<Order, OrderError> {
        self.apply(tenant_id, order_id, |order| order.advance(next))
            .await
    }

    /// Cancel an order.
    ///
    /// # Errors
    ///
    /// Returns error if the order is missing, already terminal, or
    /// persistence fails.
    pub async fn cancel(
        &self,
        tenant_id: &TenantId,
        order_id: &OrderId,
    ) -> Result<Order, OrderError> {
        self.apply(tenant_id, order_id, Order::cancel).await
    }

    /// Defer an order for a number of minutes.
    ///
    /// # Errors
    ///
    /// Returns error if the order is missing or persistence fails.
    pub async fn snooze(
        &self,
        tenant_id: &TenantId,
        order_id: &OrderId,
        minutes: i64,
    ) -> Result<Order, OrderError> {
        self.apply(tenant_id, order_id, |order| {
            order.snooze(minutes);
            Ok(())
        })
        .await
    }

    /// Record a payment status change, typically from a provider
    /// callback.
    ///
    /// # Errors
    ///
    /// Returns error if the order is missing, the transition is
    /// invalid, or persistence fails.
    pub async fn record_payment(
        &self,
        tenant_id: &TenantId,
        order_id: &OrderId,
        next: PaymentStatus,
    ) -> Result<Order, OrderError> {
        self.apply(tenant_id, order_id, |order| order.set_payment_status(next))
            .await
    }

    async fn apply<M>(
        &self,
        tenant_id: &TenantId,
        order_id: &OrderId,
        mutate: M,
    ) -> Result<Order, OrderError>
    where
        M: FnOnce(&mut Order) -> Result<(), OrderError>,
    {
        let mut order = self
            .repository
            .find_by_id(tenant_id, order_id)
            .await?
            .ok_or_else(|| OrderError::NotFound {
                order_id: order_id.to_string(),
            })?;

        mutate(&mut order)?;
        self.repository.update(&order).await?;
        self.change_feed.notify(tenant_id);

        info!(
            %order_id,
            %tenant_id,
            status = %order.status(),
            payment_status = %order.payment_status(),
            "order updated"
        );

        Ok(order)
    }
}
