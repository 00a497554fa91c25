//! Order Status Machine Service
//!
//! Validates kitchen and payment status transitions. Transition
//! legality is enforced here, at the engine level, not only by UI
//! affordances.

use crate::domain::ordering::errors::OrderError;
use crate::domain::ordering::value_objects::{OrderStatus, PaymentStatus};

/// State machine for validating order transitions.
///
/// The kitchen lifecycle moves strictly forward along
/// `Pending → Preparing → Ready → Dispatched`; `Cancelled` is reachable
/// from any non-terminal state. Payment moves along
/// `Pending → Processing → {Paid | Failed}` with `Refunded` from `Paid`.
pub struct StatusMachine;

impl StatusMachine {
    /// Check if a kitchen status transition is valid.
    #[must_use]
    pub fn is_valid_transition(from: OrderStatus, to: OrderStatus) -> bool {
        if from.is_terminal() {
            return false;
        }
        if to == OrderStatus::Cancelled {
            return true;
        }
        from.next_in_chain() == Some(to)
    }

    /// Validate a kitchen status transition.
    ///
    /// # Errors
    ///
    /// Returns error if the transition is invalid.
    pub fn validate_transition(from: OrderStatus, to: OrderStatus) -> Result<(), OrderError> {
        if Self::is_valid_transition(from, to) {
            Ok(())
        } else {
            Err(OrderError::InvalidStatusTransition {
                from,
                to,
                reason: Self::transition_error_reason(from, to),
            })
        }
    }

    /// Get a human-readable reason for an invalid transition.
    #[must_use]
    pub fn transition_error_reason(from: OrderStatus, to: OrderStatus) -> String {
        match from {
            OrderStatus::Dispatched => {
                format!("Order is already dispatched, cannot transition to {to}")
            }
            OrderStatus::Cancelled => {
                format!("Order is cancelled, cannot transition to {to}")
            }
            _ => format!("Only the next status in the chain or a cancellation is allowed, not {to}"),
        }
    }

    /// Get all valid next kitchen statuses from a given status.
    #[must_use]
    pub fn valid_next_states(from: OrderStatus) -> Vec<OrderStatus> {
        if from.is_terminal() {
            return vec![];
        }
        let mut next = Vec::with_capacity(2);
        if let Some(n) = from.next_in_chain() {
            next.push(n);
        }
        next.push(OrderStatus::Cancelled);
        next
    }

    /// Check if a payment status transition is valid.
    #[must_use]
    pub fn is_valid_payment_transition(from: PaymentStatus, to: PaymentStatus) -> bool {
        matches!(
            (from, to),
            (PaymentStatus::Pending, PaymentStatus::Processing)
                | (PaymentStatus::Processing, PaymentStatus::Paid)
                | (PaymentStatus::Processing, PaymentStatus::Failed)
                | (PaymentStatus::Paid, PaymentStatus::Refunded)
        )
    }

    /// Validate a payment status transition.
    ///
    /// # Errors
    ///
    /// Returns error if the transition is invalid.
    pub fn validate_payment_transition(
        from: PaymentStatus,
        to: PaymentStatus,
    ) -> Result<(), OrderError> {
        if Self::is_valid_payment_transition(from, to) {
            Ok(())
        } else {
            Err(OrderError::InvalidPaymentTransition { from, to })
        }
    }
}
