//! HTTP client wrapper for the matching engine.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api_types::ApiErrorResponse;
use super::config::HttpEngineConfig;
use super::error::EngineHttpError;

/// HTTP client for the matching engine API.
#[derive(Debug, Clone)]
pub struct EngineHttpClient {
    client: Client,
    config: HttpEngineConfig,
}

impl EngineHttpClient {
    /// Create a new HTTP client from config.
    pub fn new(config: HttpEngineConfig) -> Result<Self, EngineHttpError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| EngineHttpError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Make a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, EngineHttpError> {
        let request = self
            .client
            .get(self.config.url(path))
            .header(CONTENT_TYPE, "application/json");
        Self::send(request).await
    }

    /// Make a POST request with a JSON body.
    #[allow(clippy::future_not_send)]
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, EngineHttpError> {
        let request = self.client.post(self.config.url(path)).json(body);
        Self::send(request).await
    }

    async fn send<T: DeserializeOwned>(
        request: reqwest::RequestBuilder,
    ) -> Result<T, EngineHttpError> {
        let response = request
            .send()
            .await
            .map_err(|e| EngineHttpError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| EngineHttpError::Network(e.to_string()))?;

        if status.is_success() {
            return serde_json::from_str(&text).map_err(|e| EngineHttpError::JsonParse(e.to_string()));
        }

        // A blank reason is not displayable, so it falls through to the generic path.
        Err(match serde_json::from_str::<ApiErrorResponse>(&text) {
            Ok(err) if !err.error.trim().is_empty() => EngineHttpError::Rejected {
                status: status.as_u16(),
                reason: err.error,
            },
            _ => EngineHttpError::Status {
                status: status.as_u16(),
                body: text,
            },
        })
    }
}
