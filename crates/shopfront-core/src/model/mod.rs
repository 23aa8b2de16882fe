//! Domain model: orders and status classification.

pub mod order;
pub mod status;

pub use order::{Order, OrderId, OrderItem};
pub use status::StatusCategory;
