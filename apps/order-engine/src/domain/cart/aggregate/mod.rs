//! Cart aggregate and its lines.

mod cart;
mod cart_line;

pub use cart::Cart;
pub use cart_line::{CartLine, LinePricing};
