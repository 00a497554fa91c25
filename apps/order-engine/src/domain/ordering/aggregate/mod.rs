//! Order aggregate root and its entities.

mod order;
mod order_item;

pub use order::{Order, PlaceOrderCommand, ReconstitutedOrderParams};
pub use order_item::OrderItem;
