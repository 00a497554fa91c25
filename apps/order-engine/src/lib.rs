// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Order Engine - Rust Core Library
//!
//! Order and cart engine for the Comanda multi-tenant restaurant
//! ordering platform.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! The order engine follows Clean Architecture principles with Domain-Driven Design:
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (aggregates, value objects, domain services)
//!   - `cart`: Cart aggregate, unit- and weight-priced lines, running total
//!   - `ordering`: Order aggregate, status/payment lifecycles, derived views
//!   - `catalog`: Read-only menu item view consumed when hydrating cart lines
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interfaces for external systems (`PaymentPort`, `CartStore`, `ChangeFeedPort`)
//!   - `use_cases`: `SubmitOrder`, `UpdateStatus`, `CartSession`, `OrderFeed`
//!   - `dto`: Data transfer objects for API boundaries
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: Order repository (in-memory)
//!   - `cart_store`: Tenant-scoped cart cache (in-memory, JSON file)
//!   - `payment`: Demo payment adapter
//!   - `change_feed`: Broadcast-channel change notifications

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Configuration loading and validation.
pub mod config;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::cart::{Cart, CartError, CartLine, LinePricing};
pub use domain::catalog::MenuItem;
pub use domain::ordering::{
    aggregate::{Order, OrderItem, PlaceOrderCommand},
    services::{
        KitchenQueue, SalesStats, StatusMachine, actionable, awaiting_payment, kitchen_queue,
        sales_stats,
    },
    value_objects::{
        CustomerInfo, DeliveryType, FieldError, OrderStatus, PaymentMethod, PaymentStatus,
    },
    OrderError, OrderRepository,
};
pub use domain::shared::{MenuItemId, Money, OrderId, PaymentRef, TenantId, Timestamp};

// Application re-exports
pub use application::dto::CheckoutOutcome;
pub use application::ports::{
    CartStore, ChangeFeedPort, CheckoutSession, OrdersChanged, PaymentError, PaymentPort,
    RedirectTargets,
};
pub use application::use_cases::{
    CartSession, CheckoutError, OrderFeed, SubmitOrderUseCase, UpdateStatusUseCase,
};

// Infrastructure re-exports
pub use infrastructure::cart_store::{InMemoryCartStore, JsonFileCartStore};
pub use infrastructure::change_feed::BroadcastChangeFeed;
pub use infrastructure::payment::DemoPaymentAdapter;
pub use infrastructure::persistence::InMemoryOrderRepository;
