//! Sales statistics over a time window.

use crate::domain::ordering::aggregate::Order;
use crate::domain::shared::{Money, Timestamp};

/// Revenue summary for a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SalesStats {
    /// Number of revenue-counting orders in the period.
    pub order_count: usize,
    /// Total amount owed across those orders.
    pub revenue: Money,
}

/// Summarize revenue for orders created in `[from, to)`.
///
/// Only orders that count as revenue contribute: online orders once
/// paid, cash orders once dispatched. Cancelled and unpaid orders are
/// excluded regardless of age.
#[must_use]
pub fn sales_stats(orders: &[Order], from: Timestamp, to: Timestamp) -> SalesStats {
    let mut stats = SalesStats::default();

    for order in orders {
        if !order.is_paid() {
            continue;
        }
        let created = order.created_at();
        if created < from || created >= to {
            continue;
        }
        stats.order_count += 1;
        stats.revenue = stats.revenue + order.total();
    }

    stats
}
