//! Cart bounded context.
//!
//! The cart holds unconfirmed order lines for a single tenant. Lines
//! are priced per unit or per weight, fixed at the moment the line is
//! created from the catalog item.

mod aggregate;
mod errors;

pub use aggregate::{Cart, CartLine, LinePricing};
pub use errors::CartError;
