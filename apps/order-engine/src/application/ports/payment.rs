//! Payment provider port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::shared::{Money, OrderId, PaymentRef, TenantId};

/// A single line sent to the payment provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutLine {
    /// Item title shown on the provider's checkout page.
    pub title: String,
    /// Price per unit. Weight lines are flattened to a single unit at
    /// the line subtotal.
    pub unit_price: Money,
    /// Number of units.
    pub quantity: u32,
}

/// URLs the provider redirects the buyer to after checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectTargets {
    /// Redirect after a confirmed payment.
    pub success: String,
    /// Redirect after a rejected payment.
    pub failure: String,
    /// Redirect while the payment is still pending provider-side.
    pub pending: String,
}

impl Default for RedirectTargets {
    fn default() -> Self {
        Self {
            success: "/checkout/success".to_string(),
            failure: "/checkout/failure".to_string(),
            pending: "/checkout/pending".to_string(),
        }
    }
}

/// Request to open a checkout session with the provider.
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    /// Order the session pays for.
    pub order_id: OrderId,
    /// Tenant the order belongs to.
    pub tenant_id: TenantId,
    /// Amount owed.
    pub total: Money,
    /// Lines shown on the checkout page.
    pub lines: Vec<CheckoutLine>,
    /// Buyer email, when known.
    pub payer_email: Option<String>,
    /// Post-checkout redirect URLs.
    pub redirect: RedirectTargets,
}

/// An open checkout session at the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    /// URL the buyer completes the payment at.
    pub url: String,
    /// Provider reference for later reconciliation, if issued.
    pub reference: Option<PaymentRef>,
    /// True when this is a demo session rather than a real provider one.
    pub demo: bool,
}

/// Errors from the payment provider.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// The provider rejected the request.
    #[error("Payment provider rejected the checkout: {message}")]
    Provider {
        /// Provider-supplied failure description.
        message: String,
    },

    /// The provider could not be reached.
    #[error("Payment provider unavailable")]
    Unavailable,
}

/// Gateway for creating payment checkout sessions.
#[async_trait]
pub trait PaymentPort: Send + Sync {
    /// Open a checkout session for an order.
    ///
    /// # Errors
    ///
    /// Returns error if the provider rejects the request or cannot be
    /// reached.
    async fn create_checkout(&self, request: CheckoutRequest)
    -> Result<CheckoutSession, PaymentError>;
}
