//! Use case implementations.

mod cart_session;
mod order_feed;
mod submit_order;
mod update_status;

pub use cart_session::CartSession;
pub use order_feed::OrderFeed;
pub use submit_order::{CheckoutError, SubmitOrderUseCase};
pub use update_status::UpdateStatusUseCase;
