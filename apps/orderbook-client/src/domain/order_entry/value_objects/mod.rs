//! Order Entry Value Objects
//!
//! Immutable types describing what the user wants to trade.

mod asset;
mod execution_mode;
mod order_side;

pub use asset::Asset;
pub use execution_mode::ExecutionMode;
pub use order_side::OrderSide;
