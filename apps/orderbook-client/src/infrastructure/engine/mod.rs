//! Matching Engine HTTP Adapter
//!
//! Implementation of `MatchingEnginePort` over the engine's JSON API:
//! - `GET /orders` for the book snapshot
//! - `POST /buy`, `POST /sell` for limit orders
//! - `POST /market-{buy,sell}-{hype,flop}` for market orders
//!
//! No retries are attempted; a failed submission surfaces immediately.

mod adapter;
mod api_types;
mod config;
mod error;
mod http_client;

pub use adapter::HttpMatchingEngine;
pub use config::{DEFAULT_ENGINE_URL, HttpEngineConfig};
pub use error::EngineHttpError;
