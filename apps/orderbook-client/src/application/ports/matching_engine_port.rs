//! Matching Engine Port (Driven Port)
//!
//! Interface for the remote matching engine that owns the book.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::execution::{BookOrder, ExecutionReport};
use crate::domain::order_entry::{Asset, ExecutionMode, OrderIntent, OrderSide};

/// Message shown when the engine fails without a usable reason.
pub const GENERIC_SUBMISSION_ERROR: &str = "Erro ao adicionar ordem.";

/// Remote endpoint an order is submitted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `POST /buy`
    LimitBuy,
    /// `POST /sell`
    LimitSell,
    /// `POST /market-buy-hype`
    MarketBuyHype,
    /// `POST /market-buy-flop`
    MarketBuyFlop,
    /// `POST /market-sell-hype`
    MarketSellHype,
    /// `POST /market-sell-flop`
    MarketSellFlop,
}

impl Endpoint {
    /// Route a submission. Limit orders share one endpoint per side; market
    /// orders have one endpoint per side and asset.
    #[must_use]
    pub const fn route(side: OrderSide, mode: ExecutionMode, asset: Asset) -> Self {
        match (side, mode, asset) {
            (OrderSide::Buy, ExecutionMode::Limit, _) => Self::LimitBuy,
            (OrderSide::Sell, ExecutionMode::Limit, _) => Self::LimitSell,
            (OrderSide::Buy, ExecutionMode::Market, Asset::Hype) => Self::MarketBuyHype,
            (OrderSide::Buy, ExecutionMode::Market, Asset::Flop) => Self::MarketBuyFlop,
            (OrderSide::Sell, ExecutionMode::Market, Asset::Hype) => Self::MarketSellHype,
            (OrderSide::Sell, ExecutionMode::Market, Asset::Flop) => Self::MarketSellFlop,
        }
    }

    /// Path segment relative to the engine base URL.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::LimitBuy => OrderSide::Buy.as_str(),
            Self::LimitSell => OrderSide::Sell.as_str(),
            Self::MarketBuyHype => "market-buy-hype",
            Self::MarketBuyFlop => "market-buy-flop",
            Self::MarketSellHype => "market-sell-hype",
            Self::MarketSellFlop => "market-sell-flop",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Body of a submission. Asset and price travel only with limit orders;
/// market endpoints imply both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderPayload {
    /// `{ asset, price, amount }`
    LimitBuy {
        /// Asset traded.
        asset: Asset,
        /// Limit price.
        price: Decimal,
        /// Notional to spend.
        amount: Decimal,
    },
    /// `{ asset, price, shares }`
    LimitSell {
        /// Asset traded.
        asset: Asset,
        /// Limit price.
        price: Decimal,
        /// Shares offered.
        shares: Decimal,
    },
    /// `{ amount }`
    MarketBuy {
        /// Notional to spend.
        amount: Decimal,
    },
    /// `{ shares }`
    MarketSell {
        /// Shares to liquidate.
        shares: Decimal,
    },
}

/// A fully routed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOrderRequest {
    /// Target endpoint.
    pub endpoint: Endpoint,
    /// Request body.
    pub payload: OrderPayload,
    /// Asset traded, kept for tagging market reports.
    pub asset: Asset,
}

impl SubmitOrderRequest {
    /// Route an intent and build its payload.
    #[must_use]
    pub fn from_intent(intent: &OrderIntent) -> Self {
        let endpoint = Endpoint::route(intent.side(), intent.mode(), intent.asset());
        let quantity = intent.quantity();

        let payload = match (intent.mode(), intent.side(), intent.price()) {
            (ExecutionMode::Limit, OrderSide::Buy, Some(price)) => OrderPayload::LimitBuy {
                asset: intent.asset(),
                price,
                amount: quantity,
            },
            (ExecutionMode::Limit, OrderSide::Sell, Some(price)) => OrderPayload::LimitSell {
                asset: intent.asset(),
                price,
                shares: quantity,
            },
            (_, OrderSide::Buy, _) => OrderPayload::MarketBuy { amount: quantity },
            (_, OrderSide::Sell, _) => OrderPayload::MarketSell { shares: quantity },
        };

        Self {
            endpoint,
            payload,
            asset: intent.asset(),
        }
    }

    /// True when the engine answers with a match result.
    #[must_use]
    pub const fn expects_match_result(&self) -> bool {
        matches!(
            self.payload,
            OrderPayload::LimitBuy { .. } | OrderPayload::LimitSell { .. }
        )
    }
}

/// Matching engine port error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Engine answered with a non-success status and an explicit reason.
    #[error("{reason}")]
    Rejected {
        /// Reason string, shown verbatim.
        reason: String,
    },

    /// Network or decoding failure; no structured reason is available.
    #[error("Transport failure: {message}")]
    Transport {
        /// Internal details, logged but never shown to the user.
        message: String,
    },
}

impl EngineError {
    /// Message for the user-visible error slot. Transport details are not leaked.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { reason } => reason.clone(),
            Self::Transport { .. } => GENERIC_SUBMISSION_ERROR.to_string(),
        }
    }
}

/// Port for matching engine interactions.
#[async_trait]
pub trait MatchingEnginePort: Send + Sync {
    /// Fetch the full book snapshot.
    async fn fetch_orders(&self) -> Result<Vec<BookOrder>, EngineError>;

    /// Submit an order and return the report matching the request variant.
    async fn submit_order(
        &self,
        request: &SubmitOrderRequest,
    ) -> Result<ExecutionReport, EngineError>;
}
