//! Field updater: polls one resource and renders it into its display nodes

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{Mutex, RwLock};

use broker_console_rest::ManagementApi;

use crate::error::{CoreError, CoreResult};
use crate::render::{render_all, FieldBinding};
use crate::traits::Updatable;
use crate::types::{LoadState, ResourceSnapshot, UpdaterId};

/// Keeps one resource's display nodes current.
///
/// Fetches are serialised per updater by `gate`: the initial load holds it
/// until it completes, so any `update()` issued meanwhile runs after it.
/// `attached` is checked under its own lock right before every render, and
/// [`detach`](Self::detach) takes the same lock, so once `detach` returns no
/// response (however late) reaches the display nodes.
pub struct FieldUpdater {
    id: UpdaterId,
    url: String,
    api: Arc<dyn ManagementApi>,
    bindings: Vec<FieldBinding>,
    snapshot: RwLock<Option<ResourceSnapshot>>,
    load_state: RwLock<LoadState>,
    gate: Arc<Mutex<()>>,
    attached: Mutex<bool>,
}

impl FieldUpdater {
    /// Bind to the display nodes and start the initial load.
    ///
    /// With `use_sync_get` the initial load completes before this returns;
    /// otherwise it runs as a background task.
    pub async fn start(
        bindings: Vec<FieldBinding>,
        url: String,
        api: Arc<dyn ManagementApi>,
        use_sync_get: bool,
    ) -> Arc<Self> {
        let updater = Arc::new(Self {
            id: UpdaterId::new(),
            url,
            api,
            bindings,
            snapshot: RwLock::new(None),
            load_state: RwLock::new(LoadState::Pending),
            gate: Arc::new(Mutex::new(())),
            attached: Mutex::new(true),
        });

        if use_sync_get {
            let _gate = updater.gate.lock().await;
            updater.fetch_and_render().await;
        } else {
            // Taken before spawning so that the initial load is first in line
            let guard = Arc::clone(&updater.gate).lock_owned().await;
            let task = Arc::clone(&updater);
            tokio::spawn(async move {
                task.fetch_and_render().await;
                drop(guard);
            });
        }

        updater
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Copy of the latest snapshot
    pub async fn snapshot(&self) -> Option<ResourceSnapshot> {
        self.snapshot.read().await.clone()
    }

    pub async fn load_state(&self) -> LoadState {
        self.load_state.read().await.clone()
    }

    pub async fn is_attached(&self) -> bool {
        *self.attached.lock().await
    }

    /// Stop rendering; in-flight fetches are discarded when they land
    pub async fn detach(&self) {
        *self.attached.lock().await = false;
        log::debug!("[updater] Detached {} ({})", self.id, self.url);
    }

    /// Replace the snapshot with one obtained elsewhere and render it
    pub async fn apply(&self, snapshot: ResourceSnapshot) {
        let _gate = self.gate.lock().await;
        self.store_and_render(snapshot).await;
    }

    /// Caller must hold `gate`
    async fn fetch_and_render(&self) {
        if !self.is_attached().await {
            return;
        }

        match self.fetch().await {
            Ok(snapshot) => self.store_and_render(snapshot).await,
            Err(e) => {
                if e.is_expected() {
                    log::warn!("[updater] Fetch of {} failed: {e}", self.url);
                } else {
                    log::error!("[updater] Fetch of {} failed: {e}", self.url);
                }
                let mut state = self.load_state.write().await;
                if !state.is_loaded() {
                    *state = LoadState::Failed {
                        reason: e.to_string(),
                    };
                }
            }
        }
    }

    async fn fetch(&self) -> CoreResult<ResourceSnapshot> {
        let objects = self.api.get_objects(&self.url).await?;
        objects
            .into_iter()
            .next()
            .map(ResourceSnapshot::new)
            .ok_or_else(|| CoreError::ResourceNotFound(self.url.clone()))
    }

    async fn store_and_render(&self, snapshot: ResourceSnapshot) {
        let attached = self.attached.lock().await;
        if !*attached {
            log::debug!("[updater] Discarding late response for {}", self.url);
            return;
        }
        render_all(&self.bindings, &snapshot);
        *self.snapshot.write().await = Some(snapshot);
        *self.load_state.write().await = LoadState::Loaded { at: Utc::now() };
    }
}

#[async_trait]
impl Updatable for FieldUpdater {
    fn id(&self) -> UpdaterId {
        self.id
    }

    async fn update(&self) {
        let _gate = self.gate.lock().await;
        self.fetch_and_render().await;
    }
}
