//! Order intent: validated, typed order input.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::errors::{OrderField, ValidationError};
use super::value_objects::{Asset, ExecutionMode, OrderSide};

/// A validated order the user wants to place.
///
/// Price is present iff the mode is [`ExecutionMode::Limit`]. Both numbers are
/// `Decimal`, so an intent can never carry NaN or infinity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderIntent {
    side: OrderSide,
    asset: Asset,
    mode: ExecutionMode,
    price: Option<Decimal>,
    quantity: Decimal,
}

impl OrderIntent {
    /// Build an intent from raw form input.
    ///
    /// Limit orders need both price and quantity; the price is checked first.
    /// Market orders ignore `raw_price` entirely.
    pub fn build(
        raw_price: &str,
        raw_quantity: &str,
        side: OrderSide,
        asset: Asset,
        mode: ExecutionMode,
    ) -> Result<Self, ValidationError> {
        let price = if mode.requires_price() {
            Some(parse_decimal(raw_price, OrderField::Price)?)
        } else {
            None
        };
        let quantity = parse_decimal(raw_quantity, OrderField::Quantity)?;

        Ok(Self {
            side,
            asset,
            mode,
            price,
            quantity,
        })
    }

    /// Create a limit intent from already-typed values.
    #[must_use]
    pub const fn limit(side: OrderSide, asset: Asset, price: Decimal, quantity: Decimal) -> Self {
        Self {
            side,
            asset,
            mode: ExecutionMode::Limit,
            price: Some(price),
            quantity,
        }
    }

    /// Create a market intent from already-typed values.
    #[must_use]
    pub const fn market(side: OrderSide, asset: Asset, quantity: Decimal) -> Self {
        Self {
            side,
            asset,
            mode: ExecutionMode::Market,
            price: None,
            quantity,
        }
    }

    /// Order side.
    #[must_use]
    pub const fn side(&self) -> OrderSide {
        self.side
    }

    /// Asset traded.
    #[must_use]
    pub const fn asset(&self) -> Asset {
        self.asset
    }

    /// Execution mode.
    #[must_use]
    pub const fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Limit price, `None` for market orders.
    #[must_use]
    pub const fn price(&self) -> Option<Decimal> {
        self.price
    }

    /// Notional amount for buys, share count for sells.
    #[must_use]
    pub const fn quantity(&self) -> Decimal {
        self.quantity
    }
}

/// Parse a user-typed decimal, accepting plain and scientific notation.
///
/// `Decimal::from_str` tolerates `_` digit separators; those are refused here.
fn parse_decimal(raw: &str, field: OrderField) -> Result<Decimal, ValidationError> {
    let not_a_number = || ValidationError::NotANumber {
        field,
        raw: raw.to_string(),
    };
    let trimmed = raw.trim();
    if trimmed.contains('_') {
        return Err(not_a_number());
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| not_a_number())
}
