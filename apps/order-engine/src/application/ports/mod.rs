//! Ports: interfaces the application layer depends on.

mod cart_store;
mod change_feed;
mod payment;

pub use cart_store::{CartStore, CartStoreError};
pub use change_feed::{ChangeFeedPort, OrdersChanged};
pub use payment::{
    CheckoutLine, CheckoutRequest, CheckoutSession, PaymentError, PaymentPort, RedirectTargets,
};
