//! Domain layer - Core business logic.
//!
//! Contains aggregates, value objects, domain services, and domain errors.
//! This layer has no dependency on infrastructure concerns.

/// Shared kernel - value objects used across bounded contexts.
pub mod shared;

/// Menu catalog - read-only item view.
pub mod catalog;

/// Cart bounded context - pre-order line items.
pub mod cart;

/// Ordering bounded context - order lifecycle and derived views.
pub mod ordering;
