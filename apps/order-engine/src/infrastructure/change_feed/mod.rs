//! Change feed adapter.

use std::collections::HashMap;
use std::sync::RwLock;

use tokio::sync::broadcast;
use tracing::warn;

use crate::application::ports::{ChangeFeedPort, OrdersChanged};
use crate::domain::shared::TenantId;

const CHANNEL_CAPACITY: usize = 16;

/// Broadcast-channel implementation of [`ChangeFeedPort`].
///
/// One channel per tenant, created lazily on first subscribe or
/// notify. Notifications carry no payload, so a small capacity is
/// enough; a lagging subscriber just refetches the full list.
pub struct BroadcastChangeFeed {
    channels: RwLock<HashMap<String, broadcast::Sender<OrdersChanged>>>,
}

impl BroadcastChangeFeed {
    /// Create a feed with no channels.
    #[must_use]
    pub fn new() -> Self {
        Self {
            channels: RwLock::new(HashMap::new()),
        }
    }

    fn sender(&self, tenant_id: &TenantId) -> broadcast::Sender<OrdersChanged> {
        if let Ok(channels) = self.channels.read() {
            if let Some(tx) = channels.get(tenant_id.as_str()) {
                return tx.clone();
            }
        }

        match self.channels.write() {
            Ok(mut channels) => channels
                .entry(tenant_id.to_string())
                .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
                .clone(),
            Err(_) => {
                warn!(%tenant_id, "change feed lock poisoned");
                broadcast::channel(CHANNEL_CAPACITY).0
            }
        }
    }
}

impl Default for BroadcastChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeFeedPort for BroadcastChangeFeed {
    fn subscribe(&self, tenant_id: &TenantId) -> broadcast::Receiver<OrdersChanged> {
        self.sender(tenant_id).subscribe()
    }

    fn notify(&self, tenant_id: &TenantId) {
        // A send error just means nobody is listening right now.
        let _ = self.sender(tenant_id).send(OrdersChanged {
            tenant_id: tenant_id.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribers_receive_notifications() {
        let feed = BroadcastChangeFeed::new();
        let tenant = TenantId::new("tenant-1");
        let mut rx = feed.subscribe(&tenant);

        feed.notify(&tenant);

        let event = rx.try_recv().unwrap();
        assert_eq!(event.tenant_id, tenant);
    }

    #[test]
    fn notify_without_subscribers_is_a_no_op() {
        let feed = BroadcastChangeFeed::new();
        feed.notify(&TenantId::new("tenant-1"));
    }

    #[test]
    fn tenants_have_isolated_channels() {
        let feed = BroadcastChangeFeed::new();
        let mut rx_a = feed.subscribe(&TenantId::new("tenant-a"));
        let mut rx_b = feed.subscribe(&TenantId::new("tenant-b"));

        feed.notify(&TenantId::new("tenant-a"));

        assert!(rx_a.try_recv().is_ok());
        assert!(rx_b.try_recv().is_err());
    }

    #[test]
    fn multiple_subscribers_all_receive() {
        let feed = BroadcastChangeFeed::new();
        let tenant = TenantId::new("tenant-1");
        let mut rx1 = feed.subscribe(&tenant);
        let mut rx2 = feed.subscribe(&tenant);

        feed.notify(&tenant);

        assert!(rx1.try_recv().is_ok());
        assert!(rx2.try_recv().is_ok());
    }
}
