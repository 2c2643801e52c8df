//! Update registry abstract Trait

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::types::UpdaterId;

/// Something the registry can refresh periodically.
///
/// `update()` must not fail or panic; implementations swallow and log their
/// own errors.
#[async_trait]
pub trait Updatable: Send + Sync {
    /// Stable identity used for registration
    fn id(&self) -> UpdaterId;

    /// Refresh once
    async fn update(&self);
}

/// Update Registry Trait
///
/// Holds the live updaters, indexed by [`UpdaterId`]. `add` and `remove` are
/// idempotent. A default in-memory implementation is provided as
/// `InMemoryUpdateRegistry`; the periodic driver is
/// [`UpdateScheduler`](crate::services::UpdateScheduler).
#[async_trait]
pub trait UpdateRegistry: Send + Sync {
    /// Register an updater (re-adding the same id replaces it)
    async fn add(&self, updater: Arc<dyn Updatable>);

    /// Deregister an updater (unknown ids are ignored)
    async fn remove(&self, id: UpdaterId);

    /// Whether an updater is registered
    async fn contains(&self, id: UpdaterId) -> bool;

    /// Snapshot of all registered updaters
    async fn handles(&self) -> Vec<Arc<dyn Updatable>>;

    /// Number of registered updaters
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// In-memory update registry
///
/// Default implementation, shared by all panels of a console.
#[derive(Clone)]
pub struct InMemoryUpdateRegistry {
    updaters: Arc<RwLock<HashMap<UpdaterId, Arc<dyn Updatable>>>>,
}

impl InMemoryUpdateRegistry {
    /// Create a new memory registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            updaters: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryUpdateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpdateRegistry for InMemoryUpdateRegistry {
    async fn add(&self, updater: Arc<dyn Updatable>) {
        let id = updater.id();
        if self.updaters.write().await.insert(id, updater).is_some() {
            log::debug!("[registry] Updater {id} was already registered");
        }
    }

    async fn remove(&self, id: UpdaterId) {
        if self.updaters.write().await.remove(&id).is_none() {
            log::debug!("[registry] Updater {id} was not registered");
        }
    }

    async fn contains(&self, id: UpdaterId) -> bool {
        self.updaters.read().await.contains_key(&id)
    }

    async fn handles(&self) -> Vec<Arc<dyn Updatable>> {
        self.updaters.read().await.values().cloned().collect()
    }

    async fn len(&self) -> usize {
        self.updaters.read().await.len()
    }
}
