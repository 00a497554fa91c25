//! Application layer: use cases and port definitions.
//!
//! Use cases orchestrate the domain through ports; they hold no
//! business rules of their own beyond sequencing and error mapping.

/// Data transfer objects for API boundaries.
pub mod dto;

/// Ports (interfaces) for external systems.
pub mod ports;

/// Use case implementations.
pub mod use_cases;
