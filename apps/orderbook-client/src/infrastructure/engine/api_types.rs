//! Matching engine API request and response types.
//!
//! These types map directly to the engine's JSON format. Field aliases the
//! engine has used over time are absorbed here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::ports::OrderPayload;
use crate::domain::execution::{
    BookOrder, MarketBuyFill, MarketSellFill, MatchingResult, Trade,
};
use crate::domain::order_entry::{Asset, OrderSide};

// ============================================================================
// Request Types
// ============================================================================

/// Limit buy body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiLimitBuyRequest {
    /// Asset ticker.
    pub asset: Asset,
    /// Limit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Notional to spend.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Limit sell body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiLimitSellRequest {
    /// Asset ticker.
    pub asset: Asset,
    /// Limit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Shares offered.
    #[serde(with = "rust_decimal::serde::float")]
    pub shares: Decimal,
}

/// Market buy body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiMarketBuyRequest {
    /// Notional to spend.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Market sell body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiMarketSellRequest {
    /// Shares to liquidate.
    #[serde(with = "rust_decimal::serde::float")]
    pub shares: Decimal,
}

/// Any request body the engine accepts.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ApiOrderRequest {
    /// `POST /buy`
    LimitBuy(ApiLimitBuyRequest),
    /// `POST /sell`
    LimitSell(ApiLimitSellRequest),
    /// `POST /market-buy-*`
    MarketBuy(ApiMarketBuyRequest),
    /// `POST /market-sell-*`
    MarketSell(ApiMarketSellRequest),
}

impl From<&OrderPayload> for ApiOrderRequest {
    fn from(payload: &OrderPayload) -> Self {
        match *payload {
            OrderPayload::LimitBuy {
                asset,
                price,
                amount,
            } => Self::LimitBuy(ApiLimitBuyRequest {
                asset,
                price,
                amount,
            }),
            OrderPayload::LimitSell {
                asset,
                price,
                shares,
            } => Self::LimitSell(ApiLimitSellRequest {
                asset,
                price,
                shares,
            }),
            OrderPayload::MarketBuy { amount } => Self::MarketBuy(ApiMarketBuyRequest { amount }),
            OrderPayload::MarketSell { shares } => {
                Self::MarketSell(ApiMarketSellRequest { shares })
            }
        }
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Order as listed by `GET /orders` or echoed as `remainingOrder`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOrder {
    /// Engine-assigned id.
    pub id: u64,
    /// Order side.
    #[serde(rename = "type", default)]
    pub side: Option<OrderSide>,
    /// Asset ticker.
    #[serde(default)]
    pub asset: Option<Asset>,
    /// Limit price.
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Buy-side notional.
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Sell-side share count.
    #[serde(default)]
    pub shares: Option<Decimal>,
    /// Sell-side derived gain.
    #[serde(default)]
    pub potential_gain: Option<Decimal>,
}

impl From<ApiOrder> for BookOrder {
    fn from(order: ApiOrder) -> Self {
        Self {
            id: order.id,
            side: order.side,
            asset: order.asset,
            price: order.price,
            amount: order.amount,
            shares: order.shares,
            potential_gain: order.potential_gain,
        }
    }
}

/// A single fill inside a match result.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTrade {
    /// Resting buy order id.
    #[serde(default)]
    pub buy_order_id: Option<u64>,
    /// Resting sell order id.
    #[serde(default)]
    pub sell_order_id: Option<u64>,
    /// Shares exchanged.
    pub executed_shares: Decimal,
    /// Execution price.
    pub price: Decimal,
}

impl From<ApiTrade> for Trade {
    fn from(trade: ApiTrade) -> Self {
        Self {
            buy_order_id: trade.buy_order_id,
            sell_order_id: trade.sell_order_id,
            executed_shares: trade.executed_shares,
            price: trade.price,
        }
    }
}

/// Response to `POST /buy` and `POST /sell`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMatchingResult {
    /// Id assigned to the incoming order.
    pub new_order_id: u64,
    /// Shares filled immediately.
    pub executed_shares: Decimal,
    /// Average fill price, `null` when nothing filled.
    #[serde(default)]
    pub average_price: Option<Decimal>,
    /// Fills in engine order.
    #[serde(default)]
    pub trades: Vec<ApiTrade>,
    /// Unfilled remainder.
    #[serde(default)]
    pub remaining_order: Option<ApiOrder>,
}

impl From<ApiMatchingResult> for MatchingResult {
    fn from(result: ApiMatchingResult) -> Self {
        Self {
            new_order_id: result.new_order_id,
            executed_shares: result.executed_shares,
            average_price: result.average_price,
            trades: result.trades.into_iter().map(Trade::from).collect(),
            remaining_order: result.remaining_order.map(BookOrder::from),
        }
    }
}

/// Response to `POST /market-buy-*`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMarketBuyResult {
    /// Shares acquired.
    pub total_shares: Decimal,
    /// Price after the sweep.
    pub price_final: Decimal,
    /// Price impact.
    #[serde(default)]
    pub price_impact: Option<Decimal>,
}

impl From<ApiMarketBuyResult> for MarketBuyFill {
    fn from(result: ApiMarketBuyResult) -> Self {
        Self {
            total_shares: result.total_shares,
            price_final: result.price_final,
            price_impact: result.price_impact,
        }
    }
}

/// Response to `POST /market-sell-*`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMarketSellResult {
    /// Shares liquidated.
    #[serde(alias = "executedShares")]
    pub total_shares: Decimal,
    /// Proceeds of the sale.
    pub total_revenue: Decimal,
    /// Realized average price.
    #[serde(alias = "averagePrice")]
    pub price_final: Decimal,
}

impl From<ApiMarketSellResult> for MarketSellFill {
    fn from(result: ApiMarketSellResult) -> Self {
        Self {
            total_shares: result.total_shares,
            total_revenue: result.total_revenue,
            average_price: result.price_final,
        }
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Error body returned with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable reason.
    pub error: String,
}
