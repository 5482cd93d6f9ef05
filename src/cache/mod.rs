//! TTL cache in front of the Notion fetch layer.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tracing::debug;

use crate::notion::{NotionError, Page};

/// The remote collections the dashboard queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Deals,
    Goals,
}

/// Read-through cache over database query results.
///
/// Entries expire after the configured time-to-live. Concurrent loads of
/// the same collection collapse into one upstream call, and failed loads
/// are never stored, so the next request retries the fetch.
#[derive(Clone)]
pub struct QueryCache {
    entries: Cache<Collection, Arc<Vec<Page>>>,
}

impl QueryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Cache::builder().max_capacity(8).time_to_live(ttl).build(),
        }
    }

    /// Return cached pages for `collection`, or run `load` and store the
    /// result.
    pub async fn get_or_fetch<Fut>(
        &self,
        collection: Collection,
        load: Fut,
    ) -> Result<Arc<Vec<Page>>, Arc<NotionError>>
    where
        Fut: Future<Output = Result<Vec<Page>, NotionError>>,
    {
        self.entries
            .try_get_with(collection, async move { load.await.map(Arc::new) })
            .await
    }

    /// Drop every cached entry; the next request re-fetches.
    pub fn clear(&self) {
        debug!("invalidating cached query results");
        self.entries.invalidate_all();
    }

    /// Approximate number of live entries, for the readiness probe.
    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }
}
