//! Execution reports returned by the matching engine.
//!
//! One canonical internal shape per request variant. Wire-level field names
//! are translated at the HTTP boundary.

use rust_decimal::Decimal;

use super::book_order::BookOrder;
use crate::domain::order_entry::Asset;

/// A single fill between the incoming order and a resting counter-order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trade {
    /// Resting buy order hit by an incoming sell.
    pub buy_order_id: Option<u64>,
    /// Resting sell order hit by an incoming buy.
    pub sell_order_id: Option<u64>,
    /// Shares exchanged.
    pub executed_shares: Decimal,
    /// Execution price.
    pub price: Decimal,
}

/// Which resting order a trade closed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counterparty {
    /// A resting sell order.
    RestingSell(u64),
    /// A resting buy order (id missing if the engine omitted it).
    RestingBuy(Option<u64>),
}

impl Trade {
    /// Resolve the counter-order from whichever id field is present.
    #[must_use]
    pub const fn counterparty(&self) -> Counterparty {
        match self.sell_order_id {
            Some(id) => Counterparty::RestingSell(id),
            None => Counterparty::RestingBuy(self.buy_order_id),
        }
    }
}

/// Response to a limit submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingResult {
    /// Id assigned to the incoming order.
    pub new_order_id: u64,
    /// Shares filled immediately.
    pub executed_shares: Decimal,
    /// Volume-weighted fill price. Absent when nothing filled.
    pub average_price: Option<Decimal>,
    /// Fills in engine time priority. Never re-sorted.
    pub trades: Vec<Trade>,
    /// Unfilled remainder now resting in the book.
    pub remaining_order: Option<BookOrder>,
}

/// Response to a market buy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketBuyFill {
    /// Shares acquired.
    pub total_shares: Decimal,
    /// Price after the sweep.
    pub price_final: Decimal,
    /// Price impact, when the engine reports it.
    pub price_impact: Option<Decimal>,
}

/// Response to a market sell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketSellFill {
    /// Shares liquidated.
    pub total_shares: Decimal,
    /// Proceeds of the sale.
    pub total_revenue: Decimal,
    /// Realized average price.
    pub average_price: Decimal,
}

/// Successful outcome of a submission, tagged by the request variant sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionReport {
    /// Limit order matched (fully, partially or not at all).
    Matched(MatchingResult),
    /// Market buy filled.
    MarketBuy {
        /// Asset bought.
        asset: Asset,
        /// Fill summary.
        fill: MarketBuyFill,
    },
    /// Market sell filled.
    MarketSell {
        /// Asset sold.
        asset: Asset,
        /// Fill summary.
        fill: MarketSellFill,
    },
}

impl ExecutionReport {
    /// True for limit match results.
    #[must_use]
    pub const fn is_limit(&self) -> bool {
        matches!(self, Self::Matched(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn counterparty_prefers_sell_id() {
        let trade = Trade {
            buy_order_id: Some(1),
            sell_order_id: Some(7),
            executed_shares: dec!(3),
            price: dec!(10),
        };
        assert_eq!(trade.counterparty(), Counterparty::RestingSell(7));
    }

    #[test]
    fn counterparty_falls_back_to_buy_id() {
        let trade = Trade {
            buy_order_id: Some(4),
            sell_order_id: None,
            executed_shares: dec!(1),
            price: dec!(2),
        };
        assert_eq!(trade.counterparty(), Counterparty::RestingBuy(Some(4)));
    }
}
