//! Ask proxy router and handler.

use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{self, CONTENT_TYPE, HeaderName};
use axum::http::{HeaderMap, Method, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use reqwest::Client;

use super::error::ProxyError;

/// Route served by the proxy.
pub const ASK_ROUTE: &str = "/api/ask";

/// Headers scoped to a single connection, plus the ones recomputed per hop.
static HOP_BY_HOP: [HeaderName; 10] = [
    header::CONNECTION,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    header::HOST,
    header::CONTENT_LENGTH,
    HeaderName::from_static("keep-alive"),
];

fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(name)
}

/// Copy end-to-end headers from `from` into `to`.
fn copy_end_to_end(from: &HeaderMap, to: &mut HeaderMap) {
    for (name, value) in from {
        if !is_hop_by_hop(name) {
            to.append(name.clone(), value.clone());
        }
    }
}

/// State shared across proxy handlers.
#[derive(Debug, Clone)]
pub struct AskProxyState {
    client: Client,
    upstream: Arc<str>,
}

impl AskProxyState {
    /// Create proxy state forwarding to `upstream`.
    pub fn new(upstream: &str) -> Result<Self, ProxyError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ProxyError::Client(e.to_string()))?;
        Ok(Self {
            client,
            upstream: Arc::from(upstream),
        })
    }

    /// Upstream URL requests are forwarded to.
    #[must_use]
    pub fn upstream(&self) -> &str {
        &self.upstream
    }

    fn target(&self, uri: &Uri) -> String {
        match uri.query() {
            Some(query) => format!("{}?{query}", self.upstream),
            None => self.upstream.to_string(),
        }
    }
}

/// Create the proxy router.
pub fn create_router(state: AskProxyState) -> Router {
    Router::new()
        .route(ASK_ROUTE, any(forward_ask))
        .with_state(state)
}

/// Forward a request verbatim and relay the upstream answer unchanged.
///
/// Hop-by-hop headers stay on their own connection in both directions.
async fn forward_ask(
    State(state): State<AskProxyState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let target = state.target(&uri);

    tracing::debug!(%method, target = %target, "Forwarding ask request");

    let mut forwarded = HeaderMap::new();
    copy_end_to_end(&headers, &mut forwarded);
    let request = state
        .client
        .request(method, &target)
        .headers(forwarded)
        .body(body);

    let upstream = request.send().await.map_err(|e| {
        tracing::warn!(target = %target, error = %e, "Ask upstream unreachable");
        ProxyError::Upstream(e.to_string())
    })?;

    let status = upstream.status();
    let upstream_headers = upstream.headers().clone();
    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| ProxyError::Upstream(e.to_string()))?;

    let mut response = (status, bytes).into_response();
    let headers = response.headers_mut();
    headers.remove(CONTENT_TYPE);
    copy_end_to_end(&upstream_headers, headers);
    Ok(response)
}
