//! 信任库详情面板

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::{CoreError, CoreResult};
use crate::render::bind_fields;
use crate::services::{FieldUpdater, PanelContext};
use crate::templates::SHOW_TRUSTSTORE_TEMPLATE;
use crate::traits::{ContentPane, Updatable};
use crate::types::{
    ActionOutcome, DeleteOutcome, EditOutcome, PanelAction, ResourceIdentity, ResourceRef,
    ResourceSnapshot, UpdaterId,
};

/// Live parts of an open panel
struct OpenPanel {
    pane: Arc<dyn ContentPane>,
    updater: Arc<FieldUpdater>,
}

/// Detail panel of one trust store
///
/// `Closed` ⇄ `Open`. While open, exactly one [`FieldUpdater`] is registered
/// with the update registry; closing or a successful delete removes it.
pub struct TrustStorePanel {
    identity: ResourceIdentity,
    url: String,
    ctx: Arc<PanelContext>,
    state: Mutex<Option<OpenPanel>>,
}

impl TrustStorePanel {
    /// 创建面板实例（不发起任何请求）
    pub fn new(name: impl Into<String>, parent: Option<ResourceRef>, ctx: Arc<PanelContext>) -> Self {
        let identity = ResourceIdentity::truststore(name, parent);
        let url = identity.rest_path();
        Self {
            identity,
            url,
            ctx,
            state: Mutex::new(None),
        }
    }

    pub fn title(&self) -> String {
        format!("TrustStore: {}", self.identity.name())
    }

    pub fn identity(&self) -> &ResourceIdentity {
        &self.identity
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn is_open(&self) -> bool {
        self.state.lock().await.is_some()
    }

    /// Latest snapshot, if open and loaded
    pub async fn snapshot(&self) -> Option<ResourceSnapshot> {
        let updater = self.current_updater().await?;
        updater.snapshot().await
    }

    /// Id of the registered updater while open
    pub async fn updater_id(&self) -> Option<UpdaterId> {
        self.state
            .lock()
            .await
            .as_ref()
            .map(|open| open.updater.id())
    }

    /// Open the panel into `pane`.
    ///
    /// Installs the template, binds the field updater, registers it and runs
    /// one immediate update. A second call on an open panel does nothing.
    pub async fn open(&self, pane: Arc<dyn ContentPane>) -> CoreResult<()> {
        let mut state = self.state.lock().await;
        if state.is_some() {
            log::debug!("[panel] {} is already open", self.title());
            return Ok(());
        }

        let markup = self.ctx.templates.load(SHOW_TRUSTSTORE_TEMPLATE).await?;
        pane.install_template(&markup)?;
        let bindings = bind_fields(pane.as_ref())?;

        let use_sync_get = self.ctx.config.use_sync_get;
        let updater = FieldUpdater::start(
            bindings,
            self.url.clone(),
            Arc::clone(&self.ctx.api),
            use_sync_get,
        )
        .await;

        self.ctx
            .update_registry
            .add(Arc::clone(&updater) as Arc<dyn Updatable>)
            .await;

        if use_sync_get {
            updater.update().await;
        } else {
            let immediate = Arc::clone(&updater);
            tokio::spawn(async move { immediate.update().await });
        }

        pane.bind_actions(&[PanelAction::Delete, PanelAction::Edit]);
        log::info!("[panel] Opened {} ({})", self.title(), self.url);

        *state = Some(OpenPanel { pane, updater });
        Ok(())
    }

    /// Close the panel and deregister its updater. Closing twice is harmless.
    pub async fn close(&self) {
        let open = self.state.lock().await.take();
        match open {
            Some(open) => {
                open.updater.detach().await;
                self.release(&open).await;
            }
            None => log::debug!("[panel] {} is not open", self.title()),
        }
    }

    /// Delete the trust store after operator confirmation.
    ///
    /// On success the pane is removed from its host and destroyed, then the
    /// updater deregistered. On failure the operator is alerted and the
    /// panel is left exactly as it was.
    pub async fn delete_resource(&self) -> DeleteOutcome {
        let mut state = self.state.lock().await;
        if state.is_none() {
            return DeleteOutcome::NotOpen;
        }

        let question = format!(
            "Are you sure you want to delete trust store '{}'?",
            self.identity.name()
        );
        if !self.ctx.prompt.confirm(&question).await {
            log::debug!("[panel] Delete of {} declined", self.url);
            return DeleteOutcome::Declined;
        }

        if let Err(e) = self.ctx.api.delete_object(&self.url).await {
            if e.is_expected() {
                log::warn!("[panel] Delete of {} failed: {e}", self.url);
            } else {
                log::error!("[panel] Delete of {} failed: {e}", self.url);
            }
            let reason = e.operator_message();
            self.ctx.prompt.alert(&format!("Error:{reason}")).await;
            return DeleteOutcome::Failed(reason);
        }

        let Some(open) = state.take() else {
            return DeleteOutcome::NotOpen;
        };
        // Stop rendering before the nodes go away
        open.updater.detach().await;
        open.pane.on_close();
        self.ctx.host.remove_child(&open.pane);
        open.pane.destroy_recursive();
        self.release(&open).await;

        log::info!("[panel] Deleted {}", self.url);
        DeleteOutcome::Deleted
    }

    /// Show the edit dialog for the current snapshot.
    ///
    /// An `Updated` result is rendered straight away. Until the first fetch
    /// succeeds there is nothing to edit and `ResourceNotFound` is returned
    /// without showing the dialog.
    pub async fn edit(&self) -> CoreResult<EditOutcome> {
        let updater = self
            .current_updater()
            .await
            .ok_or_else(|| CoreError::PanelClosed(self.title()))?;

        let current = updater
            .snapshot()
            .await
            .ok_or_else(|| CoreError::ResourceNotFound(self.url.clone()))?;
        let outcome = self.ctx.edit_dialog.show_edit_dialog(&current).await?;

        if let EditOutcome::Updated(snapshot) = &outcome {
            updater.apply(snapshot.clone()).await;
        }
        Ok(outcome)
    }

    /// Dispatch an operator action from the pane
    pub async fn handle_action(&self, action: PanelAction) -> ActionOutcome {
        if !self.is_open().await {
            log::debug!("[panel] Ignoring {action:?} on closed {}", self.title());
            return ActionOutcome::Ignored;
        }

        match action {
            PanelAction::Delete => ActionOutcome::Delete(self.delete_resource().await),
            PanelAction::Edit => match self.edit().await {
                Ok(outcome) => ActionOutcome::Edit(outcome),
                Err(e) => {
                    if e.is_expected() {
                        log::warn!("[panel] Edit of {} failed: {e}", self.url);
                    } else {
                        log::error!("[panel] Edit of {} failed: {e}", self.url);
                    }
                    ActionOutcome::EditFailed(e.to_string())
                }
            },
        }
    }

    async fn current_updater(&self) -> Option<Arc<FieldUpdater>> {
        self.state
            .lock()
            .await
            .as_ref()
            .map(|open| Arc::clone(&open.updater))
    }

    async fn release(&self, open: &OpenPanel) {
        self.ctx.update_registry.remove(open.updater.id()).await;
        log::debug!("[panel] Closed {}", self.title());
    }
}
