//! Refresh Orders Use Case

use std::sync::Arc;

use crate::application::ports::MatchingEnginePort;
use crate::application::session::{SessionEvent, SessionState};
use crate::domain::execution::BookOrder;

/// Use case for replacing the local book with the engine's snapshot.
pub struct RefreshOrdersUseCase<E>
where
    E: MatchingEnginePort,
{
    engine: Arc<E>,
}

impl<E> RefreshOrdersUseCase<E>
where
    E: MatchingEnginePort,
{
    /// Create a new RefreshOrdersUseCase.
    pub const fn new(engine: Arc<E>) -> Self {
        Self { engine }
    }

    /// Execute the use case. A failed fetch leaves the state untouched.
    pub async fn execute(&self, state: SessionState) -> SessionState {
        match fetch_snapshot(self.engine.as_ref()).await {
            Some(orders) => state.apply(SessionEvent::OrdersRefreshed(orders)),
            None => state,
        }
    }
}

/// Fetch the book, logging and swallowing failures.
pub(crate) async fn fetch_snapshot<E>(engine: &E) -> Option<Vec<BookOrder>>
where
    E: MatchingEnginePort + ?Sized,
{
    match engine.fetch_orders().await {
        Ok(orders) => {
            tracing::debug!(count = orders.len(), "Order book refreshed");
            Some(orders)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to refresh order book");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::testing::ScriptedEngine;

    #[tokio::test]
    async fn refresh_replaces_orders() {
        let engine = Arc::new(ScriptedEngine::with_book(vec![BookOrder::with_id(1)]));
        let use_case = RefreshOrdersUseCase::new(engine);

        let state = use_case.execute(SessionState::default()).await;

        assert_eq!(state.orders, vec![BookOrder::with_id(1)]);
    }

    #[tokio::test]
    async fn refresh_is_idempotent_for_unchanged_snapshot() {
        let book = vec![BookOrder::with_id(1), BookOrder::with_id(2)];
        let engine = Arc::new(ScriptedEngine::with_book(book));
        let use_case = RefreshOrdersUseCase::new(engine);

        let first = use_case.execute(SessionState::default()).await;
        let second = use_case.execute(first.clone()).await;

        assert_eq!(first.orders, second.orders);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_state_and_sets_no_error() {
        let engine = Arc::new(ScriptedEngine::unreachable());
        let use_case = RefreshOrdersUseCase::new(engine);
        let state = SessionState {
            orders: vec![BookOrder::with_id(5)],
            ..SessionState::default()
        };

        let next = use_case.execute(state.clone()).await;

        assert_eq!(next, state);
    }
}
