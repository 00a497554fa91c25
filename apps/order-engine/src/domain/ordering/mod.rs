//! Ordering bounded context.
//!
//! Owns the order lifecycle: the aggregate, the two independent status
//! axes (kitchen status and payment status), the transition rules, and
//! the derived views staff operate on.

/// Order aggregate and frozen order items.
pub mod aggregate;

/// Ordering errors.
mod errors;

/// Persistence port for orders.
mod repository;

/// Domain services: transition validation and derived views.
pub mod services;

/// Value objects: statuses, payment method, customer info.
pub mod value_objects;

pub use errors::OrderError;
pub use repository::OrderRepository;
