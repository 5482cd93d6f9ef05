//! Notion database query client.
//!
//! Issues the bearer-token-authenticated query POST against a database
//! collection and decodes the page list. Failures stay typed: a missing
//! credential, a transport failure, an API error status, and a malformed
//! body are all distinct from a successful empty result.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::NotionCredential;
use crate::notion::properties::Property;

/// Fixed API version header value the query endpoint expects.
const NOTION_VERSION: &str = "2022-06-28";

/// Page size cap for one query request.
const QUERY_PAGE_SIZE: u32 = 100;

/// Timeout for one query round-trip.
const REQUEST_TIMEOUT_SECS: u64 = 20;

/// Error at the fetch boundary.
#[derive(Debug, thiserror::Error)]
pub enum NotionError {
    #[error("Notion token is not configured")]
    MissingCredential,

    #[error("Notion request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Notion API returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("Notion response did not match the expected shape: {0}")]
    Decode(#[source] serde_json::Error),
}

/// One page (row) of a queried collection. Only the id and the property
/// map are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub id: Uuid,
    #[serde(default)]
    pub properties: HashMap<String, Property>,
}

impl Page {
    /// Look up a property container by field name.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    /// Numeric extraction for the named field; an absent field resolves
    /// to 0.0 like any other shape without a number.
    pub fn number(&self, name: &str) -> f64 {
        self.property(name).map_or(0.0, Property::number)
    }
}

/// Subset of the query response this dashboard consumes. A body without
/// `results` decodes as an empty page list.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<Page>,
}

/// Error body the API attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// HTTP client for the database query endpoint.
#[derive(Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    base_url: String,
    credential: NotionCredential,
}

impl NotionClient {
    /// Build a client against `base_url` (overridable so tests can point
    /// at a mock server) with the fixed request timeout.
    pub fn new(
        base_url: impl Into<String>,
        credential: NotionCredential,
    ) -> Result<Self, NotionError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(NotionError::Transport)?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credential,
        })
    }

    /// Query one database collection and return its pages.
    ///
    /// An empty `results` array is a successful, empty fetch; every
    /// failure mode surfaces as a distinct [`NotionError`] variant.
    pub async fn query_database(&self, database_id: &str) -> Result<Vec<Page>, NotionError> {
        let NotionCredential::Token(token) = &self.credential else {
            return Err(NotionError::MissingCredential);
        };

        let url = format!("{}/v1/databases/{}/query", self.base_url, database_id);
        debug!(%url, "querying Notion database");

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&json!({ "page_size": QUERY_PAGE_SIZE }))
            .send()
            .await
            .map_err(NotionError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| status.to_string());
            warn!(%status, database_id, "Notion query failed");
            return Err(NotionError::Api { status, message });
        }

        let bytes = response.bytes().await.map_err(NotionError::Transport)?;
        let body: QueryResponse = serde_json::from_slice(&bytes).map_err(NotionError::Decode)?;

        debug!(database_id, pages = body.results.len(), "Notion query succeeded");
        Ok(body.results)
    }
}
