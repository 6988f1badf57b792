//! HTTP matching engine adapter implementing `MatchingEnginePort`.

use async_trait::async_trait;

use crate::application::ports::{
    EngineError, MatchingEnginePort, OrderPayload, SubmitOrderRequest,
};
use crate::domain::execution::{BookOrder, ExecutionReport, MatchingResult};

use super::api_types::{
    ApiMarketBuyResult, ApiMarketSellResult, ApiMatchingResult, ApiOrder, ApiOrderRequest,
};
use super::config::HttpEngineConfig;
use super::error::EngineHttpError;
use super::http_client::EngineHttpClient;

/// Matching engine adapter over HTTP.
///
/// The response shape is chosen by the request variant that was sent, never by
/// inspecting the body.
#[derive(Debug, Clone)]
pub struct HttpMatchingEngine {
    client: EngineHttpClient,
}

impl HttpMatchingEngine {
    /// Create a new adapter.
    pub fn new(config: HttpEngineConfig) -> Result<Self, EngineHttpError> {
        let client = EngineHttpClient::new(config)?;
        Ok(Self { client })
    }

    /// Base URL the adapter talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    async fn post_order(
        &self,
        request: &SubmitOrderRequest,
    ) -> Result<ExecutionReport, EngineHttpError> {
        let path = format!("/{}", request.endpoint.path());
        let body = ApiOrderRequest::from(&request.payload);

        let report = match request.payload {
            OrderPayload::LimitBuy { .. } | OrderPayload::LimitSell { .. } => {
                let result: ApiMatchingResult = self.client.post(&path, &body).await?;
                ExecutionReport::Matched(MatchingResult::from(result))
            }
            OrderPayload::MarketBuy { .. } => {
                let result: ApiMarketBuyResult = self.client.post(&path, &body).await?;
                ExecutionReport::MarketBuy {
                    asset: request.asset,
                    fill: result.into(),
                }
            }
            OrderPayload::MarketSell { .. } => {
                let result: ApiMarketSellResult = self.client.post(&path, &body).await?;
                ExecutionReport::MarketSell {
                    asset: request.asset,
                    fill: result.into(),
                }
            }
        };

        Ok(report)
    }
}

#[async_trait]
impl MatchingEnginePort for HttpMatchingEngine {
    async fn fetch_orders(&self) -> Result<Vec<BookOrder>, EngineError> {
        let orders: Vec<ApiOrder> = self.client.get("/orders").await.map_err(EngineError::from)?;
        Ok(orders.into_iter().map(BookOrder::from).collect())
    }

    async fn submit_order(
        &self,
        request: &SubmitOrderRequest,
    ) -> Result<ExecutionReport, EngineError> {
        tracing::debug!(
            base_url = %self.base_url(),
            endpoint = %request.endpoint,
            "Posting order"
        );

        match self.post_order(request).await {
            Ok(report) => Ok(report),
            Err(e) => {
                match &e {
                    EngineHttpError::Rejected { status, reason } => {
                        tracing::info!(endpoint = %request.endpoint, status, reason = %reason, "Engine rejected order");
                    }
                    other => {
                        tracing::error!(endpoint = %request.endpoint, error = %other, "Engine request failed");
                    }
                }
                Err(e.into())
            }
        }
    }
}
