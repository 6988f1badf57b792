//! Human-readable execution history.

use rust_decimal::Decimal;

use super::book_order::BookOrder;
use super::report::{Counterparty, ExecutionReport, MatchingResult, Trade};

/// Append-only, chronologically ordered log of execution summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionHistory(Vec<String>);

impl ExecutionHistory {
    /// Create an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append one entry at the end.
    pub fn push(&mut self, entry: String) {
        self.0.push(entry);
    }

    /// Append every entry an execution report produces, in order.
    pub fn record(&mut self, report: &ExecutionReport) {
        self.0.extend(describe_report(report));
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.0
    }

    /// Most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// History entries for a report: one primary entry, plus one for a resting
/// remainder of a limit order.
#[must_use]
pub fn describe_report(report: &ExecutionReport) -> Vec<String> {
    match report {
        ExecutionReport::Matched(result) => {
            let mut entries = vec![describe_match(result)];
            if let Some(remainder) = &result.remaining_order {
                entries.push(describe_remainder(remainder));
            }
            entries
        }
        ExecutionReport::MarketBuy { asset, fill } => {
            let mut entry = format!(
                "Compra a mercado {asset}: {} shares @ preço final {}",
                fmt_decimal(fill.total_shares),
                fmt_decimal(fill.price_final),
            );
            if let Some(impact) = fill.price_impact {
                entry.push_str(&format!(", impacto no preço {}", fmt_decimal(impact)));
            }
            vec![entry]
        }
        ExecutionReport::MarketSell { asset, fill } => vec![format!(
            "Venda a mercado {asset}: {} shares, receita total {}, preço médio {}",
            fmt_decimal(fill.total_shares),
            fmt_decimal(fill.total_revenue),
            fmt_decimal(fill.average_price),
        )],
    }
}

fn describe_match(result: &MatchingResult) -> String {
    let mut entry = format!(
        "Ordem #{}: {} shares executadas, preço médio {}",
        result.new_order_id,
        fmt_decimal(result.executed_shares),
        fmt_optional(result.average_price),
    );
    if !result.trades.is_empty() {
        let trades: Vec<String> = result.trades.iter().map(describe_trade).collect();
        entry.push_str(" | Trades: ");
        entry.push_str(&trades.join(" | "));
    }
    entry
}

/// `"Venda <id>: <qty> @ <price>"` against a resting sell, `"Compra ..."` otherwise.
#[must_use]
pub fn describe_trade(trade: &Trade) -> String {
    let (label, id) = match trade.counterparty() {
        Counterparty::RestingSell(id) => ("Venda", Some(id)),
        Counterparty::RestingBuy(id) => ("Compra", id),
    };
    format!(
        "{label} {}: {} @ {}",
        id.map_or_else(|| "?".to_string(), |id| id.to_string()),
        fmt_decimal(trade.executed_shares),
        fmt_decimal(trade.price),
    )
}

fn describe_remainder(order: &BookOrder) -> String {
    format!(
        "Ordem #{} restante no livro: {} shares @ {}",
        order.id,
        fmt_optional(order.open_quantity()),
        fmt_optional(order.price),
    )
}

fn fmt_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}

fn fmt_optional(value: Option<Decimal>) -> String {
    value.map_or_else(|| "?".to_string(), fmt_decimal)
}
