//! Submit Order Use Case
//!
//! Validates the order form, routes the submission to the matching engine and
//! reconciles the outcome into the session.

use std::sync::Arc;

use crate::application::ports::{MatchingEnginePort, SubmitOrderRequest};
use crate::application::session::{SessionEvent, SessionState};
use crate::domain::order_entry::OrderIntent;

use super::refresh_orders::fetch_snapshot;

/// Use case for submitting an order and reconciling the execution report.
pub struct SubmitOrderUseCase<E>
where
    E: MatchingEnginePort,
{
    engine: Arc<E>,
}

impl<E> SubmitOrderUseCase<E>
where
    E: MatchingEnginePort,
{
    /// Create a new SubmitOrderUseCase.
    pub const fn new(engine: Arc<E>) -> Self {
        Self { engine }
    }

    /// Execute the use case against the state's order form.
    pub async fn execute(&self, state: SessionState) -> SessionState {
        let state = state.apply(SessionEvent::SubmissionStarted);

        match state.form.to_intent() {
            Ok(intent) => self.dispatch(state, &intent).await,
            Err(e) => {
                tracing::debug!(field = ?e.field(), "Order input rejected");
                state.apply(SessionEvent::ValidationFailed(e))
            }
        }
    }

    /// Submit an already validated intent.
    pub async fn submit(&self, state: SessionState, intent: &OrderIntent) -> SessionState {
        let state = state.apply(SessionEvent::SubmissionStarted);
        self.dispatch(state, intent).await
    }

    async fn dispatch(&self, state: SessionState, intent: &OrderIntent) -> SessionState {
        let request = SubmitOrderRequest::from_intent(intent);

        tracing::info!(
            endpoint = %request.endpoint,
            side = %intent.side(),
            asset = %intent.asset(),
            mode = %intent.mode(),
            quantity = %intent.quantity(),
            price = ?intent.price(),
            "Submitting order to matching engine"
        );

        let report = match self.engine.submit_order(&request).await {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!(endpoint = %request.endpoint, error = %e, "Order submission failed");
                return state.apply(SessionEvent::SubmissionFailed(e));
            }
        };

        // The engine is authoritative: never apply fills locally, re-fetch instead.
        let orders = fetch_snapshot(self.engine.as_ref()).await;

        tracing::info!(
            endpoint = %request.endpoint,
            limit = report.is_limit(),
            "Order executed"
        );

        state.apply(SessionEvent::Executed { report, orders })
    }
}
