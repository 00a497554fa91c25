//! Derived kitchen views.
//!
//! Pure functions over order slices; the repository list is the single
//! source of truth and these views are recomputed on every refresh.

use crate::domain::ordering::aggregate::Order;
use crate::domain::ordering::value_objects::{OrderStatus, PaymentStatus};
use crate::domain::shared::Timestamp;

/// Active orders bucketed by kitchen stage.
#[derive(Debug, Clone, Default)]
pub struct KitchenQueue {
    /// Orders not yet picked up by the kitchen.
    pub pending: Vec<Order>,
    /// Orders being worked on.
    pub preparing: Vec<Order>,
    /// Orders ready for handover.
    pub ready: Vec<Order>,
}

impl KitchenQueue {
    /// Total number of orders across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len() + self.preparing.len() + self.ready.len()
    }

    /// True if no bucket holds any order.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.preparing.is_empty() && self.ready.is_empty()
    }
}

/// True if the kitchen may act on this order right now.
///
/// Requires an active kitchen status and, for gated payment methods,
/// a confirmed payment.
#[must_use]
pub fn actionable(order: &Order) -> bool {
    order.status().is_active() && order.is_ready_to_cook()
}

/// Bucket actionable orders by kitchen stage.
///
/// Within each bucket, snoozed orders sort after the rest; ties break
/// by the time of the last status change, oldest first.
#[must_use]
pub fn kitchen_queue(orders: &[Order], now: Timestamp) -> KitchenQueue {
    let mut queue = KitchenQueue::default();

    for order in orders.iter().filter(|o| actionable(o)) {
        match order.status() {
            OrderStatus::Pending => queue.pending.push(order.clone()),
            OrderStatus::Preparing => queue.preparing.push(order.clone()),
            OrderStatus::Ready => queue.ready.push(order.clone()),
            OrderStatus::Dispatched | OrderStatus::Cancelled => {}
        }
    }

    for bucket in [&mut queue.pending, &mut queue.preparing, &mut queue.ready] {
        bucket.sort_by_key(|o| (o.is_snoozed(now), o.status_changed_at()));
    }

    queue
}

/// Orders placed online whose payment has not confirmed.
///
/// A failed payment stays listed so staff can chase it up or cancel the
/// order. Refunded orders drop out: a refund implies the payment had
/// already confirmed.
#[must_use]
pub fn awaiting_payment(orders: &[Order]) -> Vec<Order> {
    orders
        .iter()
        .filter(|o| {
            o.payment_method().is_gating()
                && o.status().is_active()
                && !matches!(
                    o.payment_status(),
                    PaymentStatus::Paid | PaymentStatus::Refunded
                )
        })
        .cloned()
        .collect()
}
