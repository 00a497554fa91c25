//! Shared value objects.

mod identifiers;
mod money;
mod timestamp;

pub use identifiers::{MenuItemId, OrderId, PaymentRef, TenantId};
pub use money::Money;
pub use timestamp::Timestamp;
