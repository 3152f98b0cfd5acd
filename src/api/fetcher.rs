//! Concurrent JSON fetching with partial-failure tolerance.
//!
//! [`fetch_all`] issues every request of a batch at once and waits for
//! all of them to settle. Only successful responses with a non-empty JSON
//! body make it into the result; HTTP errors, transport failures and empty
//! bodies (`null`, `{}`, `[]`) are logged and dropped.

use std::future::Future;

use futures_util::future::join_all;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::GoalsError;

/// Result of a single GET request.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// 2xx response with a JSON body.
    Document(Value),
    /// Non-success HTTP status code.
    Status(u16),
    /// Connection, timeout or body decoding failure.
    Transport(String),
}

impl FetchOutcome {
    /// Returns the document for a successful outcome, `None` otherwise.
    ///
    /// Empty documents count as absent.
    #[must_use]
    pub fn into_document(self) -> Option<Value> {
        match self {
            Self::Document(doc) if !is_empty_document(&doc) => Some(doc),
            Self::Document(_) | Self::Status(_) | Self::Transport(_) => None,
        }
    }
}

fn is_empty_document(doc: &Value) -> bool {
    match doc {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Anything that can turn a URL into a JSON document.
///
/// Implemented by [`HttpFetcher`] for real requests and by in-memory
/// sources in tests. Implementations make exactly one attempt per call.
pub trait JsonSource: Send + Sync {
    /// Performs a single GET request for `url`.
    fn get_json(&self, url: &str) -> impl Future<Output = FetchOutcome> + Send;
}

/// [`JsonSource`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Builds a fetcher with the configured per-request timeout and
    /// user agent.
    ///
    /// # Errors
    ///
    /// Returns [`GoalsError::HttpClient`] if the TLS backend or client
    /// cannot be initialised.
    pub fn new(config: &ApiConfig) -> Result<Self, GoalsError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }

}

impl JsonSource for HttpFetcher {
    async fn get_json(&self, url: &str) -> FetchOutcome {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => return FetchOutcome::Transport(e.to_string()),
        };
        let status = response.status();
        tracing::debug!(url, status = status.as_u16(), "GET");
        if !status.is_success() {
            return FetchOutcome::Status(status.as_u16());
        }
        match response.json::<Value>().await {
            Ok(doc) => FetchOutcome::Document(doc),
            Err(e) => FetchOutcome::Transport(e.to_string()),
        }
    }
}

/// Fetches every URL concurrently and returns the documents that were
/// retrieved successfully.
///
/// Waits until all requests have settled. Survivors keep the relative
/// order of their URLs, but callers must not rely on a survivor's index
/// matching its URL's index since failures are removed.
pub async fn fetch_all<S, I>(source: &S, urls: I) -> Vec<Value>
where
    S: JsonSource,
    I: IntoIterator<Item = String>,
{
    let urls: Vec<String> = urls.into_iter().collect();
    let requested = urls.len();
    let outcomes = join_all(urls.iter().map(|url| async move {
        let outcome = source.get_json(url).await;
        match &outcome {
            FetchOutcome::Document(doc) if is_empty_document(doc) => {
                tracing::debug!(url = url.as_str(), "dropping empty document");
            }
            FetchOutcome::Document(_) => {}
            FetchOutcome::Status(code) => {
                tracing::debug!(url = url.as_str(), code, "dropping non-success response");
            }
            FetchOutcome::Transport(reason) => {
                tracing::debug!(url = url.as_str(), reason = reason.as_str(), "dropping failed request");
            }
        }
        outcome
    }))
    .await;

    let documents: Vec<Value> = outcomes
        .into_iter()
        .filter_map(FetchOutcome::into_document)
        .collect();
    tracing::debug!(requested, retrieved = documents.len(), "batch settled");
    documents
}
