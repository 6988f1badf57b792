//! Resting order as reported by the matching engine.

use rust_decimal::Decimal;

use crate::domain::order_entry::{Asset, OrderSide};

/// An order resting in the remote book.
///
/// Read-only mirror of the engine's state. Everything except `id` is optional
/// because the `remainingOrder` echo of a match result may carry only
/// `{id, shares, price}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookOrder {
    /// Engine-assigned identifier.
    pub id: u64,
    /// Order side.
    pub side: Option<OrderSide>,
    /// Asset traded.
    pub asset: Option<Asset>,
    /// Limit price.
    pub price: Option<Decimal>,
    /// Buy-side notional.
    pub amount: Option<Decimal>,
    /// Sell-side share count.
    pub shares: Option<Decimal>,
    /// Sell-side derived gain, when the engine reports one.
    pub potential_gain: Option<Decimal>,
}

impl BookOrder {
    /// Minimal order carrying only an id, used as a builder seed.
    #[must_use]
    pub const fn with_id(id: u64) -> Self {
        Self {
            id,
            side: None,
            asset: None,
            price: None,
            amount: None,
            shares: None,
            potential_gain: None,
        }
    }

    /// Set the price.
    #[must_use]
    pub const fn at_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the share count.
    #[must_use]
    pub const fn with_shares(mut self, shares: Decimal) -> Self {
        self.shares = Some(shares);
        self
    }

    /// Set side and asset.
    #[must_use]
    pub const fn on(mut self, side: OrderSide, asset: Asset) -> Self {
        self.side = Some(side);
        self.asset = Some(asset);
        self
    }

    /// Open quantity: shares when present, otherwise the notional amount.
    #[must_use]
    pub fn open_quantity(&self) -> Option<Decimal> {
        self.shares.or(self.amount)
    }
}
