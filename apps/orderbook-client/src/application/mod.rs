//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Ports**: Interfaces for interacting with the matching engine
//! - **Session**: Client state and its pure transition function
//! - **Use Cases**: Order submission and book refresh

pub mod ports;
pub mod session;
pub mod use_cases;

pub use ports::*;
pub use session::*;
pub use use_cases::*;
