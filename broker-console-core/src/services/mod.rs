//! 业务逻辑服务层

mod field_updater;
mod truststore_panel;
mod update_scheduler;

pub use field_updater::FieldUpdater;
pub use truststore_panel::TrustStorePanel;
pub use update_scheduler::{SchedulerHandle, UpdateScheduler};

use std::sync::Arc;

use broker_console_rest::{HttpManagementClient, ManagementApi};

use crate::config::ConsoleConfig;
use crate::error::CoreResult;
use crate::traits::{EditDialog, HostContainer, OperatorPrompt, TemplateSource, UpdateRegistry};

/// 面板上下文 - 持有所有依赖
///
/// The console creates one context and shares it between its panels; the
/// update registry in particular must be the one the scheduler drives.
pub struct PanelContext {
    /// Management REST API
    pub api: Arc<dyn ManagementApi>,
    /// Shared update registry
    pub update_registry: Arc<dyn UpdateRegistry>,
    /// Panel templates
    pub templates: Arc<dyn TemplateSource>,
    /// Trust store edit dialog
    pub edit_dialog: Arc<dyn EditDialog>,
    /// Confirm/alert prompts
    pub prompt: Arc<dyn OperatorPrompt>,
    /// Tab container owning the panes
    pub host: Arc<dyn HostContainer>,
    /// Console settings
    pub config: ConsoleConfig,
}

impl PanelContext {
    /// 创建面板上下文
    #[must_use]
    pub fn new(
        api: Arc<dyn ManagementApi>,
        update_registry: Arc<dyn UpdateRegistry>,
        templates: Arc<dyn TemplateSource>,
        edit_dialog: Arc<dyn EditDialog>,
        prompt: Arc<dyn OperatorPrompt>,
        host: Arc<dyn HostContainer>,
        config: ConsoleConfig,
    ) -> Self {
        Self {
            api,
            update_registry,
            templates,
            edit_dialog,
            prompt,
            host,
            config,
        }
    }

    /// Context talking to the broker over HTTP as configured
    pub fn with_http_client(
        config: ConsoleConfig,
        update_registry: Arc<dyn UpdateRegistry>,
        templates: Arc<dyn TemplateSource>,
        edit_dialog: Arc<dyn EditDialog>,
        prompt: Arc<dyn OperatorPrompt>,
        host: Arc<dyn HostContainer>,
    ) -> CoreResult<Self> {
        config.validate()?;
        let api = Arc::new(HttpManagementClient::new(&config.client)?);
        Ok(Self::new(
            api,
            update_registry,
            templates,
            edit_dialog,
            prompt,
            host,
            config,
        ))
    }

    /// Scheduler over this context's registry at the configured period
    pub fn scheduler(&self) -> UpdateScheduler {
        UpdateScheduler::new(Arc::clone(&self.update_registry), self.config.update_period())
    }
}
