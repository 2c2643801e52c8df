//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use broker_console_rest::{ManagementApi, ObjectAttributes, RestError};

use crate::config::ConsoleConfig;
use crate::error::{CoreError, CoreResult};
use crate::services::{PanelContext, TrustStorePanel, UpdateScheduler};
use crate::templates::BuiltinTemplates;
use crate::traits::{
    ContentPane, DisplayNode, EditDialog, HostContainer, InMemoryUpdateRegistry, OperatorPrompt,
    Updatable, UpdateRegistry,
};
use crate::types::{EditOutcome, FieldKey, PanelAction, ResourceSnapshot, UpdaterId};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// JSON object → attribute map (non-objects give an empty map)
pub fn truststore_attrs(value: serde_json::Value) -> ObjectAttributes {
    match value {
        serde_json::Value::Object(map) => map,
        _ => ObjectAttributes::new(),
    }
}

/// Let spawned tasks run until they block
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

// ===== EventLog =====

/// Ordered record of collaborator calls shared across mocks
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    pub fn push(&self, event: &str) {
        lock(&self.0).push(event.to_string());
    }

    pub fn entries(&self) -> Vec<String> {
        lock(&self.0).clone()
    }
}

// ===== Counter =====

/// Updatable that only counts its `update()` calls
pub struct Counter {
    pub id: UpdaterId,
    pub calls: AtomicUsize,
}

#[async_trait]
impl Updatable for Counter {
    fn id(&self) -> UpdaterId {
        self.id
    }

    async fn update(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn counter() -> Arc<Counter> {
    Arc::new(Counter {
        id: UpdaterId::new(),
        calls: AtomicUsize::new(0),
    })
}

// ===== MockManagementApi =====

type GetResult = Result<Vec<ObjectAttributes>, RestError>;

pub struct MockManagementApi {
    /// Consumed first, one per GET
    queued: Mutex<VecDeque<GetResult>>,
    /// Answer once the queue is empty
    fallback: Mutex<GetResult>,
    delete_result: Mutex<Result<(), RestError>>,
    /// While set, GETs block until released
    hold: Mutex<Option<Arc<Semaphore>>>,
    get_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl MockManagementApi {
    pub fn returning(attrs: ObjectAttributes) -> Self {
        Self::with_fallback(Ok(vec![attrs]))
    }

    pub fn empty() -> Self {
        Self::with_fallback(Ok(Vec::new()))
    }

    fn with_fallback(fallback: GetResult) -> Self {
        Self {
            queued: Mutex::new(VecDeque::new()),
            fallback: Mutex::new(fallback),
            delete_result: Mutex::new(Ok(())),
            hold: Mutex::new(None),
            get_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
        }
    }

    pub fn push_objects(&self, attrs: ObjectAttributes) {
        lock(&self.queued).push_back(Ok(vec![attrs]));
    }

    pub fn push_error(&self, error: RestError) {
        lock(&self.queued).push_back(Err(error));
    }

    pub fn fail_delete(&self, error: RestError) {
        *lock(&self.delete_result) = Err(error);
    }

    pub fn hold_gets(&self) {
        *lock(&self.hold) = Some(Arc::new(Semaphore::new(0)));
    }

    pub fn release_gets(&self) {
        if let Some(sem) = lock(&self.hold).take() {
            sem.add_permits(Semaphore::MAX_PERMITS / 2);
        }
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ManagementApi for MockManagementApi {
    async fn get_objects(&self, _path: &str) -> Result<Vec<ObjectAttributes>, RestError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);

        let hold = lock(&self.hold).clone();
        if let Some(sem) = hold {
            let _permit = sem.acquire().await;
        }

        let next = lock(&self.queued).pop_front();
        next.unwrap_or_else(|| lock(&self.fallback).clone())
    }

    async fn delete_object(&self, _path: &str) -> Result<(), RestError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        lock(&self.delete_result).clone()
    }
}

// ===== MockContentPane =====

struct RecordingNode {
    html: Mutex<String>,
    writes: Arc<AtomicUsize>,
    late_writes: Arc<AtomicUsize>,
    destroyed: Arc<AtomicBool>,
}

impl DisplayNode for RecordingNode {
    fn set_html(&self, html: &str) {
        if self.destroyed.load(Ordering::SeqCst) {
            self.late_writes.fetch_add(1, Ordering::SeqCst);
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        *lock(&self.html) = html.to_string();
    }
}

pub struct MockContentPane {
    nodes: HashMap<FieldKey, Arc<RecordingNode>>,
    template: Mutex<String>,
    installs: AtomicUsize,
    actions: Mutex<Vec<PanelAction>>,
    writes: Arc<AtomicUsize>,
    late_writes: Arc<AtomicUsize>,
    destroyed: Arc<AtomicBool>,
    events: EventLog,
}

impl MockContentPane {
    pub fn new() -> Self {
        Self::build(None, EventLog::default())
    }

    /// Pane whose template lacks the node for `missing`
    pub fn without_node(missing: FieldKey) -> Self {
        Self::build(Some(missing), EventLog::default())
    }

    fn build(missing: Option<FieldKey>, events: EventLog) -> Self {
        let writes = Arc::new(AtomicUsize::new(0));
        let late_writes = Arc::new(AtomicUsize::new(0));
        let destroyed = Arc::new(AtomicBool::new(false));
        let nodes = FieldKey::ALL
            .into_iter()
            .filter(|key| Some(*key) != missing)
            .map(|key| {
                let node = Arc::new(RecordingNode {
                    html: Mutex::new(String::new()),
                    writes: Arc::clone(&writes),
                    late_writes: Arc::clone(&late_writes),
                    destroyed: Arc::clone(&destroyed),
                });
                (key, node)
            })
            .collect();
        Self {
            nodes,
            template: Mutex::new(String::new()),
            installs: AtomicUsize::new(0),
            actions: Mutex::new(Vec::new()),
            writes,
            late_writes,
            destroyed,
            events,
        }
    }

    pub fn html(&self, key: FieldKey) -> String {
        self.nodes
            .get(&key)
            .map(|node| lock(&node.html).clone())
            .unwrap_or_default()
    }

    /// Total writes across all nodes
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Writes after `destroy_recursive`
    pub fn late_writes(&self) -> usize {
        self.late_writes.load(Ordering::SeqCst)
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::SeqCst)
    }

    pub fn installed_template(&self) -> String {
        lock(&self.template).clone()
    }

    pub fn install_count(&self) -> usize {
        self.installs.load(Ordering::SeqCst)
    }

    pub fn bound_actions(&self) -> Vec<PanelAction> {
        lock(&self.actions).clone()
    }
}

impl Default for MockContentPane {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentPane for MockContentPane {
    fn install_template(&self, markup: &str) -> CoreResult<()> {
        self.installs.fetch_add(1, Ordering::SeqCst);
        *lock(&self.template) = markup.to_string();
        self.events.push("pane.install_template");
        Ok(())
    }

    fn display_node(&self, key: FieldKey) -> Option<Arc<dyn DisplayNode>> {
        self.nodes
            .get(&key)
            .map(|node| Arc::clone(node) as Arc<dyn DisplayNode>)
    }

    fn bind_actions(&self, actions: &[PanelAction]) {
        *lock(&self.actions) = actions.to_vec();
    }

    fn on_close(&self) {
        self.events.push("pane.on_close");
    }

    fn destroy_recursive(&self) {
        self.destroyed.store(true, Ordering::SeqCst);
        self.events.push("pane.destroy_recursive");
    }
}

// ===== MockHost =====

pub struct MockHost {
    removed: AtomicUsize,
    events: EventLog,
}

impl MockHost {
    pub fn removed(&self) -> usize {
        self.removed.load(Ordering::SeqCst)
    }
}

impl HostContainer for MockHost {
    fn remove_child(&self, _pane: &Arc<dyn ContentPane>) {
        self.removed.fetch_add(1, Ordering::SeqCst);
        self.events.push("host.remove_child");
    }
}

// ===== RecordingRegistry =====

/// In-memory registry that also logs add/remove
pub struct RecordingRegistry {
    inner: InMemoryUpdateRegistry,
    events: EventLog,
}

#[async_trait]
impl UpdateRegistry for RecordingRegistry {
    async fn add(&self, updater: Arc<dyn Updatable>) {
        self.events.push("registry.add");
        self.inner.add(updater).await;
    }

    async fn remove(&self, id: UpdaterId) {
        self.events.push("registry.remove");
        self.inner.remove(id).await;
    }

    async fn contains(&self, id: UpdaterId) -> bool {
        self.inner.contains(id).await
    }

    async fn handles(&self) -> Vec<Arc<dyn Updatable>> {
        self.inner.handles().await
    }

    async fn len(&self) -> usize {
        self.inner.len().await
    }
}

// ===== MockPrompt =====

pub struct MockPrompt {
    answer: AtomicBool,
    questions: Mutex<Vec<String>>,
    alerts: Mutex<Vec<String>>,
}

impl MockPrompt {
    pub fn answer(&self, yes: bool) {
        self.answer.store(yes, Ordering::SeqCst);
    }

    pub fn questions(&self) -> Vec<String> {
        lock(&self.questions).clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        lock(&self.alerts).clone()
    }
}

#[async_trait]
impl OperatorPrompt for MockPrompt {
    async fn confirm(&self, message: &str) -> bool {
        lock(&self.questions).push(message.to_string());
        self.answer.load(Ordering::SeqCst)
    }

    async fn alert(&self, message: &str) {
        lock(&self.alerts).push(message.to_string());
    }
}

// ===== MockEditDialog =====

pub struct MockEditDialog {
    /// `None` makes the dialog fail
    response: Mutex<Option<EditOutcome>>,
    shown: Mutex<Vec<ResourceSnapshot>>,
}

impl MockEditDialog {
    pub fn respond(&self, outcome: EditOutcome) {
        *lock(&self.response) = Some(outcome);
    }

    pub fn fail(&self) {
        *lock(&self.response) = None;
    }

    /// Snapshots the dialog was opened with
    pub fn shown(&self) -> Vec<ResourceSnapshot> {
        lock(&self.shown).clone()
    }
}

#[async_trait]
impl EditDialog for MockEditDialog {
    async fn show_edit_dialog(&self, current: &ResourceSnapshot) -> CoreResult<EditOutcome> {
        lock(&self.shown).push(current.clone());
        lock(&self.response)
            .clone()
            .ok_or_else(|| CoreError::DialogError("dialog closed with an error".to_string()))
    }
}

// ===== PanelFixture =====

/// A panel context wired entirely to mocks
pub struct PanelFixture {
    pub api: Arc<MockManagementApi>,
    pub registry: Arc<RecordingRegistry>,
    pub prompt: Arc<MockPrompt>,
    pub dialog: Arc<MockEditDialog>,
    pub host: Arc<MockHost>,
    pub pane: Arc<MockContentPane>,
    pub events: EventLog,
    pub ctx: Arc<PanelContext>,
}

impl PanelFixture {
    /// Initial load awaited inside `open()`
    pub fn sync(attrs: serde_json::Value) -> Self {
        Self::build(true, None, attrs)
    }

    /// Initial load in the background
    pub fn background(attrs: serde_json::Value) -> Self {
        Self::build(false, None, attrs)
    }

    pub fn with_pane_missing(key: FieldKey, attrs: serde_json::Value) -> Self {
        Self::build(true, Some(key), attrs)
    }

    fn build(use_sync_get: bool, missing: Option<FieldKey>, attrs: serde_json::Value) -> Self {
        let events = EventLog::default();
        let api = Arc::new(MockManagementApi::returning(truststore_attrs(attrs)));
        let registry = Arc::new(RecordingRegistry {
            inner: InMemoryUpdateRegistry::new(),
            events: events.clone(),
        });
        let prompt = Arc::new(MockPrompt {
            answer: AtomicBool::new(true),
            questions: Mutex::new(Vec::new()),
            alerts: Mutex::new(Vec::new()),
        });
        let dialog = Arc::new(MockEditDialog {
            response: Mutex::new(Some(EditOutcome::Unchanged)),
            shown: Mutex::new(Vec::new()),
        });
        let host = Arc::new(MockHost {
            removed: AtomicUsize::new(0),
            events: events.clone(),
        });
        let pane = Arc::new(MockContentPane::build(missing, events.clone()));

        let config = ConsoleConfig {
            use_sync_get,
            ..ConsoleConfig::default()
        };
        let ctx = Arc::new(PanelContext::new(
            api.clone(),
            registry.clone(),
            Arc::new(BuiltinTemplates),
            dialog.clone(),
            prompt.clone(),
            host.clone(),
            config,
        ));

        Self {
            api,
            registry,
            prompt,
            dialog,
            host,
            pane,
            events,
            ctx,
        }
    }

    pub fn panel(&self, name: &str) -> TrustStorePanel {
        TrustStorePanel::new(name, None, Arc::clone(&self.ctx))
    }

    pub fn pane(&self) -> Arc<dyn ContentPane> {
        Arc::clone(&self.pane) as Arc<dyn ContentPane>
    }

    pub fn scheduler(&self) -> UpdateScheduler {
        self.ctx.scheduler()
    }
}
