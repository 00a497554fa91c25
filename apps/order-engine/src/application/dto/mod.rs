//! Data transfer objects crossing the application boundary.

use serde::{Deserialize, Serialize};

use crate::domain::shared::OrderId;

/// Result of a successful checkout, handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutOutcome {
    /// ID of the created order.
    pub order_id: OrderId,
    /// Per-tenant display number assigned at persist time.
    pub number: u64,
    /// Payment checkout URL to redirect the buyer to, when one was
    /// obtained. Absent for cash orders and when the provider failed.
    pub checkout_url: Option<String>,
    /// True when the URL points at a demo checkout rather than a real
    /// provider session.
    pub demo: bool,
}
