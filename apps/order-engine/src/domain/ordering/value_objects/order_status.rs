//! Order status in the kitchen lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status along the kitchen lifecycle.
///
/// The lifecycle moves forward only:
/// `Pending → Preparing → Ready → Dispatched`, with `Cancelled`
/// reachable from any non-terminal state. `Dispatched` and `Cancelled`
/// are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order created, not yet picked up by the kitchen.
    Pending,
    /// Kitchen is working on the order.
    Preparing,
    /// Order is ready for pickup or dispatch.
    Ready,
    /// Order handed over to the customer or courier. Terminal.
    Dispatched,
    /// Order cancelled by staff. Terminal.
    Cancelled,
}

impl OrderStatus {
    /// Returns true if the order is in a terminal state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Dispatched | Self::Cancelled)
    }

    /// Returns true if the order still needs kitchen work.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Preparing | Self::Ready)
    }

    /// Position along the forward chain, for monotonicity checks.
    ///
    /// `Cancelled` has no position: it is a jump out of the chain.
    #[must_use]
    pub const fn chain_position(&self) -> Option<u8> {
        match self {
            Self::Pending => Some(0),
            Self::Preparing => Some(1),
            Self::Ready => Some(2),
            Self::Dispatched => Some(3),
            Self::Cancelled => None,
        }
    }

    /// The next status along the forward chain, if any.
    #[must_use]
    pub const fn next_in_chain(&self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Preparing),
            Self::Preparing => Some(Self::Ready),
            Self::Ready => Some(Self::Dispatched),
            Self::Dispatched | Self::Cancelled => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Preparing => write!(f, "PREPARING"),
            Self::Ready => write!(f, "READY"),
            Self::Dispatched => write!(f, "DISPATCHED"),
            Self::Cancelled => write!(f, "CANCELLED"),
        }
    }
}
