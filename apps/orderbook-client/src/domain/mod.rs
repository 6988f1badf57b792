//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//!
//! # Bounded Contexts
//!
//! - [`order_entry`]: Raw input validation into typed order intents
//! - [`execution`]: Execution reports, resting orders and execution history

pub mod execution;
pub mod order_entry;
