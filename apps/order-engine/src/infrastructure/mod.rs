//! Infrastructure layer: adapters implementing the application ports.

/// Cart store adapters.
pub mod cart_store;

/// Change feed adapter.
pub mod change_feed;

/// Payment adapters.
pub mod payment;

/// Order repository adapters.
pub mod persistence;
