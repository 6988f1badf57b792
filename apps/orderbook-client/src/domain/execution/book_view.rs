//! Per-asset views over an order book snapshot.

use super::book_order::BookOrder;
use crate::domain::order_entry::{Asset, OrderSide};

/// Read-only view grouping a snapshot by asset and side.
///
/// Snapshot order is preserved; the engine's ordering is authoritative.
#[derive(Debug, Clone, Copy)]
pub struct OrderBookView<'a> {
    orders: &'a [BookOrder],
}

impl<'a> OrderBookView<'a> {
    /// Wrap a snapshot.
    #[must_use]
    pub const fn new(orders: &'a [BookOrder]) -> Self {
        Self { orders }
    }

    /// Orders for `asset` on `side`.
    pub fn side(&self, asset: Asset, side: OrderSide) -> impl Iterator<Item = &'a BookOrder> {
        self.orders
            .iter()
            .filter(move |o| o.asset == Some(asset) && o.side == Some(side))
    }

    /// Resting buy orders for `asset`.
    pub fn bids(&self, asset: Asset) -> impl Iterator<Item = &'a BookOrder> {
        self.side(asset, OrderSide::Buy)
    }

    /// Resting sell orders for `asset`.
    pub fn asks(&self, asset: Asset) -> impl Iterator<Item = &'a BookOrder> {
        self.side(asset, OrderSide::Sell)
    }

    /// Total number of orders in the snapshot.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.orders.len()
    }

    /// True when the snapshot is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
