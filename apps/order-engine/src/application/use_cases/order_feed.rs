//! Live order feed for staff dashboards.
//!
//! Hybrid poll/push: a change notification triggers an immediate
//! refetch and a timer covers missed notifications. Every refresh
//! replaces the full list, so consumers converge on repository state
//! no matter which signal fired.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, watch};
use tokio::time::MissedTickBehavior;
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, warn};

use crate::application::ports::OrdersChanged;
use crate::domain::ordering::aggregate::Order;
use crate::domain::ordering::{OrderError, OrderRepository};
use crate::domain::shared::TenantId;

/// Publishes a tenant's current order list to any number of watchers.
pub struct OrderFeed<R: OrderRepository> {
    repository: Arc<R>,
    tenant_id: TenantId,
    limit: usize,
    tx: watch::Sender<Vec<Order>>,
}

impl<R: OrderRepository> OrderFeed<R> {
    /// Create a feed for one tenant. The list starts empty until the
    /// first refresh.
    pub fn new(repository: Arc<R>, tenant_id: TenantId, limit: usize) -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self {
            repository,
            tenant_id,
            limit,
            tx,
        }
    }

    /// Watch the order list. Each update carries the full list.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Order>> {
        self.tx.subscribe()
    }

    /// Stream view of the order list, for SSE-style consumers.
    #[must_use]
    pub fn stream(&self) -> WatchStream<Vec<Order>> {
        WatchStream::new(self.tx.subscribe())
    }

    /// Refetch the list and publish it to all watchers.
    ///
    /// # Errors
    ///
    /// Returns error if the repository listing fails; watchers keep the
    /// previous list.
    pub async fn refresh(&self) -> Result<(), OrderError> {
        let orders = self.repository.list(&self.tenant_id, self.limit).await?;
        self.tx.send_replace(orders);
        Ok(())
    }

    /// Drive the feed until every watcher is dropped.
    ///
    /// Refreshes on each change notification and on every poll tick.
    /// A failed refresh is logged and retried on the next signal.
    pub async fn run(
        &self,
        poll_interval: Duration,
        mut changes: broadcast::Receiver<OrdersChanged>,
    ) {
        let mut ticker = tokio::time::interval(poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    debug!(tenant_id = %self.tenant_id, "poll refresh");
                }
                change = changes.recv() => {
                    match change {
                        Ok(_) => {
                            debug!(tenant_id = %self.tenant_id, "change-triggered refresh");
                        }
                        Err(broadcast::error::RecvError::Lagged(missed)) => {
                            // Full-list refresh absorbs any number of
                            // missed notifications.
                            debug!(
                                tenant_id = %self.tenant_id,
                                missed,
                                "change feed lagged"
                            );
                        }
                        Err(broadcast::error::RecvError::Closed) => break,
                    }
                }
            }

            if self.tx.is_closed() {
                break;
            }
            if let Err(error) = self.refresh().await {
                warn!(tenant_id = %self.tenant_id, %error, "order feed refresh failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ChangeFeedPort;
    use crate::domain::cart::CartLine;
    use crate::domain::catalog::MenuItem;
    use crate::domain::ordering::aggregate::{OrderItem, PlaceOrderCommand};
    use crate::domain::ordering::value_objects::{CustomerInfo, DeliveryType, PaymentMethod};
    use crate::domain::shared::{MenuItemId, Money};
    use crate::infrastructure::change_feed::BroadcastChangeFeed;
    use crate::infrastructure::persistence::InMemoryOrderRepository;
    use rust_decimal_macros::dec;

    fn place(tenant: &TenantId) -> Order {
        let item = MenuItem {
            id: MenuItemId::new("item-1"),
            name: "Dish".to_string(),
            price: Money::new(dec!(10)),
            sold_by_weight: false,
            weight_unit: None,
            image_url: None,
            category: None,
        };
        Order::place(PlaceOrderCommand {
            tenant_id: tenant.clone(),
            customer: CustomerInfo {
                name: "Ana Gomez".to_string(),
                phone: "555-0100".to_string(),
                email: None,
                delivery: DeliveryType::Pickup,
                address: None,
                notes: None,
                payment_method: PaymentMethod::Cash,
            },
            items: vec![OrderItem::from_line(&CartLine::unit(&item))],
        })
        .unwrap()
    }

    #[tokio::test]
    async fn refresh_publishes_full_list() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let tenant = TenantId::new("tenant-1");
        let feed = OrderFeed::new(Arc::clone(&repo), tenant.clone(), 100);
        let mut rx = feed.subscribe();

        assert!(rx.borrow().is_empty());

        repo.create(place(&tenant)).await.unwrap();
        repo.create(place(&tenant)).await.unwrap();
        feed.refresh().await.unwrap();

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 2);
    }

    #[tokio::test]
    async fn stream_yields_each_published_list() {
        use tokio_stream::StreamExt;

        let repo = Arc::new(InMemoryOrderRepository::new());
        let tenant = TenantId::new("tenant-1");
        let feed = OrderFeed::new(Arc::clone(&repo), tenant.clone(), 100);
        let mut stream = feed.stream();

        // First item is the current (empty) list.
        let initial = stream.next().await.unwrap();
        assert!(initial.is_empty());

        repo.create(place(&tenant)).await.unwrap();
        feed.refresh().await.unwrap();

        let updated = stream.next().await.unwrap();
        assert_eq!(updated.len(), 1);
    }

    #[tokio::test]
    async fn refresh_respects_limit() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let tenant = TenantId::new("tenant-1");
        for _ in 0..5 {
            repo.create(place(&tenant)).await.unwrap();
        }

        let feed = OrderFeed::new(Arc::clone(&repo), tenant, 3);
        feed.refresh().await.unwrap();

        assert_eq!(feed.subscribe().borrow().len(), 3);
    }

    #[tokio::test]
    async fn change_notification_triggers_refresh() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let changes = Arc::new(BroadcastChangeFeed::new());
        let tenant = TenantId::new("tenant-1");

        let feed = Arc::new(OrderFeed::new(Arc::clone(&repo), tenant.clone(), 100));
        let mut rx = feed.subscribe();
        let change_rx = changes.subscribe(&tenant);

        let runner = Arc::clone(&feed);
        let handle = tokio::spawn(async move {
            runner.run(Duration::from_secs(60), change_rx).await;
        });

        repo.create(place(&tenant)).await.unwrap();
        changes.notify(&tenant);

        // The startup tick may publish an empty list first; wait until
        // the change-triggered refresh lands.
        tokio::time::timeout(Duration::from_secs(1), async {
            loop {
                rx.changed().await.unwrap();
                if rx.borrow_and_update().len() == 1 {
                    break;
                }
            }
        })
        .await
        .unwrap();

        handle.abort();
    }

    #[tokio::test]
    async fn run_stops_when_all_watchers_drop() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let changes = Arc::new(BroadcastChangeFeed::new());
        let tenant = TenantId::new("tenant-1");

        let feed = OrderFeed::new(repo, tenant.clone(), 100);
        let rx = feed.subscribe();
        let change_rx = changes.subscribe(&tenant);

        drop(rx);
        changes.notify(&tenant);

        // First signal after the last watcher dropped ends the loop.
        tokio::time::timeout(
            Duration::from_secs(1),
            feed.run(Duration::from_millis(10), change_rx),
        )
        .await
        .unwrap();
    }
}
