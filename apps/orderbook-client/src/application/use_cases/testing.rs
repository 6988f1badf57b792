//! Scripted matching engine for use case tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::{EngineError, MatchingEnginePort, SubmitOrderRequest};
use crate::domain::execution::{BookOrder, ExecutionReport};

/// Engine returning canned answers and recording what it was asked.
pub struct ScriptedEngine {
    book: Result<Vec<BookOrder>, EngineError>,
    answer: Result<ExecutionReport, EngineError>,
    submissions: Mutex<Vec<SubmitOrderRequest>>,
    fetches: AtomicUsize,
}

impl ScriptedEngine {
    pub fn answering(answer: Result<ExecutionReport, EngineError>) -> Self {
        Self {
            book: Ok(vec![]),
            answer,
            submissions: Mutex::new(vec![]),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn with_book(book: Vec<BookOrder>) -> Self {
        Self::unreachable().and_book(book)
    }

    pub fn unreachable() -> Self {
        let down = EngineError::Transport {
            message: "engine down".to_string(),
        };
        Self {
            book: Err(down.clone()),
            ..Self::answering(Err(down))
        }
    }

    pub fn and_book(mut self, book: Vec<BookOrder>) -> Self {
        self.book = Ok(book);
        self
    }

    pub fn submissions(&self) -> Vec<SubmitOrderRequest> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MatchingEnginePort for ScriptedEngine {
    async fn fetch_orders(&self) -> Result<Vec<BookOrder>, EngineError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.book.clone()
    }

    async fn submit_order(
        &self,
        request: &SubmitOrderRequest,
    ) -> Result<ExecutionReport, EngineError> {
        self.submissions.lock().unwrap().push(request.clone());
        self.answer.clone()
    }
}
