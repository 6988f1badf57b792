//! Infrastructure Layer
//!
//! Adapters for the ports defined in the application layer:
//!
//! - **Driven Adapters (Outbound)**
//!   - `engine/`: Matching engine HTTP adapter
//!
//! - **Driver Adapters (Inbound)**
//!   - `proxy/`: Ask passthrough served with axum

pub mod engine;
pub mod proxy;
