//! Client session state and its transitions.
//!
//! All mutation goes through [`SessionState::apply`], a pure reducer. Use
//! cases perform the network effects and feed the outcome back as a
//! [`SessionEvent`].


use crate::application::ports::EngineError;
use crate::domain::execution::{BookOrder, ExecutionHistory, ExecutionReport};
use crate::domain::order_entry::{
    Asset, ExecutionMode, OrderIntent, OrderSide, ValidationError,
};

/// Raw order form as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderForm {
    /// Price input, ignored for market orders.
    pub price: String,
    /// Quantity input.
    pub quantity: String,
    /// Selected side.
    pub side: OrderSide,
    /// Selected asset.
    pub asset: Asset,
    /// Selected execution mode.
    pub mode: ExecutionMode,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            price: String::new(),
            quantity: String::new(),
            side: OrderSide::Buy,
            asset: Asset::Flop,
            mode: ExecutionMode::Limit,
        }
    }
}

impl OrderForm {
    /// Validate the form into an intent.
    pub fn to_intent(&self) -> Result<OrderIntent, ValidationError> {
        OrderIntent::build(&self.price, &self.quantity, self.side, self.asset, self.mode)
    }

    /// Clear the numeric inputs, keeping the selections.
    pub fn clear_inputs(&mut self) {
        self.price.clear();
        self.quantity.clear();
    }
}

/// Everything the client shows: book snapshot, history and transient slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Last book snapshot fetched from the engine.
    pub orders: Vec<BookOrder>,
    /// Execution history, oldest first.
    pub history: ExecutionHistory,
    /// Most recent successful report.
    pub last_result: Option<ExecutionReport>,
    /// User-visible error message, if the last action failed.
    pub last_error: Option<String>,
    /// Order form inputs.
    pub form: OrderForm,
}

/// Outcome of an action, folded into the state by [`SessionState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A submission began; transient slots are reset.
    SubmissionStarted,
    /// Input was rejected before dispatch.
    ValidationFailed(ValidationError),
    /// The engine rejected the order or could not be reached.
    SubmissionFailed(EngineError),
    /// A fresh book snapshot arrived.
    OrdersRefreshed(Vec<BookOrder>),
    /// The engine executed the order. `orders` is the post-execution snapshot,
    /// or `None` if the refresh failed.
    Executed {
        /// The execution report.
        report: ExecutionReport,
        /// Post-execution snapshot.
        orders: Option<Vec<BookOrder>>,
    },
}

impl SessionState {
    /// Create a state with the given form.
    #[must_use]
    pub fn with_form(form: OrderForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    /// Apply one event and return the next state.
    #[must_use]
    pub fn apply(mut self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::SubmissionStarted => {
                self.last_error = None;
                self.last_result = None;
            }
            SessionEvent::ValidationFailed(err) => {
                self.last_error = Some(err.to_string());
            }
            SessionEvent::SubmissionFailed(err) => {
                self.last_error = Some(err.user_message());
            }
            SessionEvent::OrdersRefreshed(orders) => {
                self.orders = orders;
            }
            SessionEvent::Executed { report, orders } => {
                if let Some(orders) = orders {
                    self.orders = orders;
                }
                self.history.record(&report);
                self.form.clear_inputs();
                self.last_error = None;
                self.last_result = Some(report);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::execution::MatchingResult;
    use crate::domain::order_entry::OrderField;
    use rust_decimal_macros::dec;

    fn report() -> ExecutionReport {
        ExecutionReport::Matched(MatchingResult {
            new_order_id: 1,
            executed_shares: dec!(0),
            average_price: None,
            trades: vec![],
            remaining_order: Some(BookOrder::with_id(1).with_shares(dec!(5)).at_price(dec!(2))),
        })
    }

    fn filled_form() -> OrderForm {
        OrderForm {
            price: "2".to_string(),
            quantity: "5".to_string(),
            ..OrderForm::default()
        }
    }

    #[test]
    fn executed_replaces_orders_records_history_and_clears_inputs() {
        let state = SessionState {
            last_error: Some("old".to_string()),
            form: filled_form(),
            ..SessionState::default()
        };
        let snapshot = vec![BookOrder::with_id(1)];

        let next = state.apply(SessionEvent::Executed {
            report: report(),
            orders: Some(snapshot.clone()),
        });

        assert_eq!(next.orders, snapshot);
        assert_eq!(next.history.len(), 2);
        assert!(next.form.price.is_empty());
        assert!(next.form.quantity.is_empty());
        assert!(next.last_error.is_none());
        assert_eq!(next.last_result, Some(report()));
    }

    #[test]
    fn executed_without_snapshot_keeps_previous_orders() {
        let previous = vec![BookOrder::with_id(42)];
        let state = SessionState {
            orders: previous.clone(),
            ..SessionState::default()
        };

        let next = state.apply(SessionEvent::Executed {
            report: report(),
            orders: None,
        });

        assert_eq!(next.orders, previous);
        assert_eq!(next.history.len(), 2);
    }

    #[test]
    fn failure_sets_error_and_touches_nothing_else() {
        let state = SessionState {
            orders: vec![BookOrder::with_id(3)],
            form: filled_form(),
            ..SessionState::default()
        };
        let before = state.clone();

        let next = state.apply(SessionEvent::SubmissionFailed(EngineError::Rejected {
            reason: "insufficient balance".to_string(),
        }));

        assert_eq!(next.last_error.as_deref(), Some("insufficient balance"));
        assert_eq!(next.orders, before.orders);
        assert_eq!(next.history, before.history);
        assert_eq!(next.form, before.form);
    }

    #[test]
    fn validation_failure_surfaces_message() {
        let next = SessionState::default().apply(SessionEvent::ValidationFailed(
            ValidationError::NotANumber {
                field: OrderField::Quantity,
                raw: "x".to_string(),
            },
        ));
        assert_eq!(
            next.last_error.as_deref(),
            Some("Quantidade deve ser um número válido.")
        );
    }

    #[test]
    fn submission_started_resets_transient_slots() {
        let state = SessionState {
            last_error: Some("boom".to_string()),
            last_result: Some(report()),
            ..SessionState::default()
        };
        let next = state.apply(SessionEvent::SubmissionStarted);
        assert!(next.last_error.is_none());
        assert!(next.last_result.is_none());
    }
}
