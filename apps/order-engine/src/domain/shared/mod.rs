//! Shared kernel for the order engine domain.
//!
//! Value objects and errors used by both the cart and ordering contexts.

mod errors;
mod value_objects;

pub use errors::DomainError;
pub use value_objects::{MenuItemId, Money, OrderId, PaymentRef, TenantId, Timestamp};
