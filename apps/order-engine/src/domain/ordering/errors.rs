//! Ordering errors.

use std::fmt;

use super::value_objects::{OrderStatus, PaymentStatus};

/// Errors that can occur in the order lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// Invalid kitchen status transition attempted.
    InvalidStatusTransition {
        /// Current order status.
        from: OrderStatus,
        /// Attempted status.
        to: OrderStatus,
        /// Reason for failure.
        reason: String,
    },

    /// Invalid payment status transition attempted.
    InvalidPaymentTransition {
        /// Current payment status.
        from: PaymentStatus,
        /// Attempted payment status.
        to: PaymentStatus,
    },

    /// An order must carry at least one item.
    EmptyOrder,

    /// Order not found.
    NotFound {
        /// Order ID.
        order_id: String,
    },

    /// Persistence gateway failure.
    Storage {
        /// Description of the failure.
        message: String,
    },
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(
                    f,
                    "Invalid order status transition: {from} -> {to}: {reason}"
                )
            }
            Self::InvalidPaymentTransition { from, to } => {
                write!(f, "Invalid payment status transition: {from} -> {to}")
            }
            Self::EmptyOrder => {
                write!(f, "Cannot create an order with no items")
            }
            Self::NotFound { order_id } => {
                write!(f, "Order not found: {order_id}")
            }
            Self::Storage { message } => {
                write!(f, "Order storage failure: {message}")
            }
        }
    }
}

impl std::error::Error for OrderError {}
