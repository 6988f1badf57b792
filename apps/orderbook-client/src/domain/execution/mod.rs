//! Execution Bounded Context
//!
//! What the matching engine reports back: resting orders, fills, and the
//! human-readable history built from them.

pub mod book_order;
pub mod book_view;
pub mod history;
pub mod report;

pub use book_order::BookOrder;
pub use book_view::OrderBookView;
pub use history::{ExecutionHistory, describe_report, describe_trade};
pub use report::{
    Counterparty, ExecutionReport, MarketBuyFill, MarketSellFill, MatchingResult, Trade,
};
