//! Domain services for the ordering context.

mod queues;
mod stats;
mod status_machine;

pub use queues::{KitchenQueue, actionable, awaiting_payment, kitchen_queue};
pub use stats::{SalesStats, sales_stats};
pub use status_machine::StatusMachine;
