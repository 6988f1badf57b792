//! Application Ports
//!
//! Driven ports: how the application reaches external systems.

mod matching_engine_port;

pub use matching_engine_port::{
    EngineError, Endpoint, GENERIC_SUBMISSION_ERROR, MatchingEnginePort, OrderPayload,
    SubmitOrderRequest,
};
