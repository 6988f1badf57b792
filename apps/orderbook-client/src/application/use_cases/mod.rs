//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod refresh_orders;
mod submit_order;

#[cfg(test)]
pub(crate) mod testing;

pub use refresh_orders::RefreshOrdersUseCase;
pub use submit_order::SubmitOrderUseCase;
