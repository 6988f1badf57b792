//! Order Entry Bounded Context
//!
//! Turns raw user input into a validated [`OrderIntent`]. Pure: no network,
//! no state.

pub mod errors;
pub mod intent;
pub mod value_objects;

pub use errors::{OrderField, ValidationError};
pub use intent::OrderIntent;
pub use value_objects::{Asset, ExecutionMode, OrderSide};
