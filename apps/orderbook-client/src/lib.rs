// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::option_if_let_else,
        clippy::default_trait_access,
        clippy::items_after_statements,
        clippy::missing_const_for_fn
    )
)]

//! Orderbook Client - Rust Core Library
//!
//! Client for a remote HYPE/FLOP matching engine: validates order input,
//! routes submissions, and reconciles the engine's reports into session state.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Pure order-entry and execution types
//!   - `order_entry`: `OrderIntent` construction and input validation
//!   - `execution`: Book orders, execution reports, history descriptions
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: `MatchingEnginePort`, routing and payload shapes
//!   - `session`: `SessionState` and its reducer
//!   - `use_cases`: `SubmitOrder`, `RefreshOrders`
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `engine`: HTTP matching engine adapter
//!   - `proxy`: `/api/ask` passthrough

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// YAML configuration loading and validation.
pub mod config;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::execution::{
    BookOrder, ExecutionHistory, ExecutionReport, MarketBuyFill, MarketSellFill, MatchingResult,
    OrderBookView, Trade,
};
pub use domain::order_entry::{Asset, ExecutionMode, OrderIntent, OrderSide, ValidationError};

// Application re-exports
pub use application::ports::{EngineError, Endpoint, MatchingEnginePort, SubmitOrderRequest};
pub use application::session::{OrderForm, SessionEvent, SessionState};
pub use application::use_cases::{RefreshOrdersUseCase, SubmitOrderUseCase};

// Infrastructure re-exports
pub use infrastructure::engine::{EngineHttpError, HttpEngineConfig, HttpMatchingEngine};
pub use infrastructure::proxy::{AskProxyState, ProxyError, create_router};
