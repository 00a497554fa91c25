//! Payment method and payment status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the customer pays for an order.
///
/// Rows without a recorded method default to `Cash`, which is
/// non-gating for kitchen work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash on pickup or delivery.
    #[default]
    Cash,
    /// MercadoPago online checkout.
    #[serde(rename = "mercadopago")]
    MercadoPago,
}

impl PaymentMethod {
    /// True if payment state gates kitchen visibility for this method.
    ///
    /// Cash orders are always actionable; online payments must be
    /// confirmed paid first.
    #[must_use]
    pub const fn is_gating(&self) -> bool {
        matches!(self, Self::MercadoPago)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => write!(f, "cash"),
            Self::MercadoPago => write!(f, "mercadopago"),
        }
    }
}

/// Payment status, tracked independently of the kitchen status.
///
/// `Pending → Processing → {Paid | Failed}`, with `Refunded` reachable
/// from `Paid`. Only gating when the order's method is gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// No payment attempt recorded yet.
    Pending,
    /// Checkout initiated with the provider.
    Processing,
    /// Provider confirmed the payment.
    Paid,
    /// Provider rejected or the payment lapsed. Terminal.
    Failed,
    /// A paid amount was returned. Terminal.
    Refunded,
}

impl PaymentStatus {
    /// Returns true if no further payment transition is possible.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Failed | Self::Refunded)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Processing => write!(f, "PROCESSING"),
            Self::Paid => write!(f, "PAID"),
            Self::Failed => write!(f, "FAILED"),
            Self::Refunded => write!(f, "REFUNDED"),
        }
    }
}
