//! Value objects for the ordering context.

mod customer;
mod order_status;
mod payment;

pub use customer::{CustomerInfo, DeliveryType, FieldError};
pub use order_status::OrderStatus;
pub use payment::{PaymentMethod, PaymentStatus};
