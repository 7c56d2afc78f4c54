//! Memoizing, de-duplicating front for the catalog port.
//! 带去重与记忆化的图鉴查询缓存。

use std::collections::HashMap;
use std::sync::Arc;

use cc_core::ports::{CatalogError, CatalogPort};
use cc_core::{EntityId, EntityRecord};
use futures::future::{BoxFuture, FutureExt, Shared};
use tokio::sync::Mutex;
use tracing::{debug, info, warn, Instrument};

type FetchOutcome = Result<Arc<EntityRecord>, CatalogError>;
type SharedFetch = Shared<BoxFuture<'static, FetchOutcome>>;

enum CacheEntry {
    /// One remote call in flight; every caller for the id awaits this handle.
    Pending(SharedFetch),
    Resolved(Arc<EntityRecord>),
}

/// Process-scoped cache in front of a [`CatalogPort`].
///
/// ## Behavior / 行为
/// - Successes are cached for the lifetime of the cache and never replaced.
/// - Failures are handed to every attached caller, then the entry is removed
///   so the next `get` retries.
/// - At most one remote call per id is in flight at any time.
///
/// The remote call runs in a detached task: dropping every caller does not
/// cancel it, and its outcome still settles the entry.
pub struct EntityFetchCache {
    catalog: Arc<dyn CatalogPort>,
    entries: Arc<Mutex<HashMap<EntityId, CacheEntry>>>,
}

impl EntityFetchCache {
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self {
            catalog,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Resolve `id`, from cache when possible.
    ///
    /// Must be called from within a tokio runtime.
    #[tracing::instrument(name = "cache.get", skip(self, id), fields(entity_id = %id))]
    pub async fn get(&self, id: EntityId) -> Result<Arc<EntityRecord>, CatalogError> {
        // Lookup and Pending insertion happen under one lock acquisition.
        let pending = {
            let mut entries = self.entries.lock().await;
            match entries.get(&id) {
                Some(CacheEntry::Resolved(record)) => {
                    debug!("cache hit");
                    return Ok(record.clone());
                }
                Some(CacheEntry::Pending(fetch)) => {
                    debug!("attaching to in-flight fetch");
                    fetch.clone()
                }
                None => {
                    debug!("cache miss, starting fetch");
                    let fetch = self.start_fetch(id);
                    entries.insert(id, CacheEntry::Pending(fetch.clone()));
                    fetch
                }
            }
        };

        pending.await
    }

    /// Cached record for `id`, never triggers a fetch.
    pub async fn peek(&self, id: EntityId) -> Option<Arc<EntityRecord>> {
        match self.entries.lock().await.get(&id) {
            Some(CacheEntry::Resolved(record)) => Some(record.clone()),
            _ => None,
        }
    }

    pub async fn contains(&self, id: EntityId) -> bool {
        self.peek(id).await.is_some()
    }

    /// Number of resolved entries.
    pub async fn len(&self) -> usize {
        self.entries
            .lock()
            .await
            .values()
            .filter(|entry| matches!(entry, CacheEntry::Resolved(_)))
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Number of ids with a remote call in flight.
    pub async fn in_flight(&self) -> usize {
        self.entries
            .lock()
            .await
            .values()
            .filter(|entry| matches!(entry, CacheEntry::Pending(_)))
            .count()
    }

    fn start_fetch(&self, id: EntityId) -> SharedFetch {
        let catalog = self.catalog.clone();
        let entries = self.entries.clone();

        let task = tokio::spawn(
            async move {
                let outcome = catalog.fetch(id).await.map(Arc::new);

                let mut entries = entries.lock().await;
                match &outcome {
                    Ok(record) => {
                        info!(name = %record.name, "entity resolved");
                        entries.insert(id, CacheEntry::Resolved(record.clone()));
                    }
                    Err(err) => {
                        warn!(kind = %err.kind(), error = %err, "entity fetch failed");
                        entries.remove(&id);
                    }
                }
                outcome
            }
            .instrument(tracing::info_span!("cache.fetch", entity_id = %id)),
        );

        let entries = self.entries.clone();
        async move {
            match task.await {
                Ok(outcome) => outcome,
                Err(join_err) => {
                    // The task never settled the entry; clear it so the id is not stuck.
                    entries.lock().await.remove(&id);
                    Err(CatalogError::Unavailable(format!(
                        "fetch task for entity {id} failed: {join_err}"
                    )))
                }
            }
        }
        .boxed()
        .shared()
    }
}
