//! Ask Proxy (Driver Adapter)
//!
//! Axum passthrough that forwards `/api/ask` to a fixed upstream, so a browser
//! client can reach it from the same origin.

mod error;
mod router;

pub use error::ProxyError;
pub use router::{ASK_ROUTE, AskProxyState, create_router};
