#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use media_filter::kernel::lifecycle::AppPhase;
use media_filter::ports::{
    ClipboardError, ClipboardPort, DialogPort, LifecyclePort, NavigationPort, Notice, SharePayload,
    ShareReceiptPort,
};
use media_filter::presentation::ResultParams;
use media_filter::services::analysis::{AnalysisError, AnalysisPort, AnalysisRequest, AnalysisResult, Verdict};
use media_filter::{mount, IntakeConfig, IntakeDeps, IntakeHandle};

pub fn sample_result(title: &str, verdict: &str) -> AnalysisResult {
    AnalysisResult {
        title: title.to_string(),
        verdict: Verdict::from(verdict.to_string()),
        verdict_emoji: "⚠️".to_string(),
        summary: "summary".to_string(),
        details: "details".to_string(),
        original_text: "original".to_string(),
        score: None,
        input_type: None,
    }
}

/// Analysis service stand-in. Echoes the request content as the title,
/// fails when told to, and can hold a request until its gate is opened.
#[derive(Default)]
pub struct FakeAnalysis {
    pub requests: Mutex<Vec<AnalysisRequest>>,
    failure: Mutex<Option<AnalysisError>>,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
}

impl FakeAnalysis {
    pub fn failing(error: AnalysisError) -> Self {
        let fake = Self::default();
        *fake.failure.lock().unwrap() = Some(error);
        fake
    }

    /// Holds the request for `content` until the returned sender fires.
    pub fn gate(&self, content: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(content.to_string(), rx);
        tx
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl AnalysisPort for FakeAnalysis {
    async fn submit(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        self.requests.lock().unwrap().push(request.clone());

        let gate = self.gates.lock().unwrap().remove(request.content());
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        let failure = self.failure.lock().unwrap().clone();
        if let Some(error) = failure {
            return Err(error);
        }
        Ok(sample_result(request.content(), "caution"))
    }
}

pub struct FakeShare {
    pending: Mutex<Option<SharePayload>>,
    pub acknowledged: AtomicUsize,
    notify_tx: mpsc::Sender<()>,
    notify_rx: Mutex<Option<mpsc::Receiver<()>>>,
}

impl FakeShare {
    pub fn new() -> Self {
        let (notify_tx, notify_rx) = mpsc::channel(8);
        Self {
            pending: Mutex::new(None),
            acknowledged: AtomicUsize::new(0),
            notify_tx,
            notify_rx: Mutex::new(Some(notify_rx)),
        }
    }

    /// Share already pending when the screen mounts.
    pub fn with_pending(payload: SharePayload) -> Self {
        let share = Self::new();
        *share.pending.lock().unwrap() = Some(payload);
        share
    }

    pub fn push(&self, payload: SharePayload) {
        *self.pending.lock().unwrap() = Some(payload);
        let _ = self.notify_tx.try_send(());
    }

    /// Re-render style wake-up without a new share.
    pub fn poke(&self) {
        let _ = self.notify_tx.try_send(());
    }

    pub fn acks(&self) -> usize {
        self.acknowledged.load(Ordering::SeqCst)
    }
}

impl ShareReceiptPort for FakeShare {
    fn has_pending_share(&self) -> bool {
        self.pending.lock().unwrap().is_some()
    }

    fn pending_share_payload(&self) -> Option<SharePayload> {
        self.pending.lock().unwrap().clone()
    }

    fn acknowledge(&self) {
        self.acknowledged.fetch_add(1, Ordering::SeqCst);
        *self.pending.lock().unwrap() = None;
    }

    fn subscribe(&self) -> mpsc::Receiver<()> {
        self.notify_rx.lock().unwrap().take().expect("single subscriber")
    }
}

/// Returns scripted reads first, then the current value.
#[derive(Default)]
pub struct FakeClipboard {
    value: Mutex<String>,
    scripted: Mutex<VecDeque<Result<String, ClipboardError>>>,
    pub reads: AtomicUsize,
}

impl FakeClipboard {
    pub fn holding(value: &str) -> Self {
        let clipboard = Self::default();
        clipboard.set(value);
        clipboard
    }

    pub fn set(&self, value: &str) {
        *self.value.lock().unwrap() = value.to_string();
    }

    pub fn fail_next(&self, error: ClipboardError) {
        self.scripted.lock().unwrap().push_back(Err(error));
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClipboardPort for FakeClipboard {
    async fn read(&self) -> Result<String, ClipboardError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let scripted = self.scripted.lock().unwrap().pop_front();
        match scripted {
            Some(outcome) => outcome,
            None => Ok(self.value.lock().unwrap().clone()),
        }
    }
}

pub struct FakeLifecycle {
    initial: AppPhase,
    tx: mpsc::Sender<AppPhase>,
    rx: Mutex<Option<mpsc::Receiver<AppPhase>>>,
}

impl FakeLifecycle {
    pub fn new(initial: AppPhase) -> Self {
        let (tx, rx) = mpsc::channel(16);
        Self {
            initial,
            tx,
            rx: Mutex::new(Some(rx)),
        }
    }

    pub async fn emit(&self, phase: AppPhase) {
        self.tx.send(phase).await.expect("driver listening");
    }
}

impl LifecyclePort for FakeLifecycle {
    fn current(&self) -> AppPhase {
        self.initial
    }

    fn subscribe(&self) -> mpsc::Receiver<AppPhase> {
        self.rx.lock().unwrap().take().expect("single subscriber")
    }
}

#[derive(Default)]
pub struct FakeNavigation {
    pub results: Mutex<Vec<ResultParams>>,
    pub backs: AtomicUsize,
}

impl FakeNavigation {
    pub fn count(&self) -> usize {
        self.results.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<ResultParams> {
        self.results.lock().unwrap().last().cloned()
    }
}

impl NavigationPort for FakeNavigation {
    fn navigate_to_result(&self, params: ResultParams) {
        self.results.lock().unwrap().push(params);
    }

    fn navigate_back(&self) {
        self.backs.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct FakeDialog {
    pub alerts: Mutex<Vec<Notice>>,
    pub confirmations: Mutex<Vec<Notice>>,
    accept: AtomicBool,
}

impl FakeDialog {
    pub fn answering(accept: bool) -> Self {
        Self {
            alerts: Mutex::new(Vec::new()),
            confirmations: Mutex::new(Vec::new()),
            accept: AtomicBool::new(accept),
        }
    }

    pub fn alert_count(&self) -> usize {
        self.alerts.lock().unwrap().len()
    }

    pub fn confirm_count(&self) -> usize {
        self.confirmations.lock().unwrap().len()
    }

    pub fn last_alert(&self) -> Option<Notice> {
        self.alerts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl DialogPort for FakeDialog {
    fn alert(&self, notice: &Notice) {
        self.alerts.lock().unwrap().push(notice.clone());
    }

    async fn confirm(&self, notice: &Notice) -> bool {
        self.confirmations.lock().unwrap().push(notice.clone());
        self.accept.load(Ordering::SeqCst)
    }
}

pub struct Harness {
    pub analysis: Arc<FakeAnalysis>,
    pub share: Arc<FakeShare>,
    pub clipboard: Arc<FakeClipboard>,
    pub lifecycle: Arc<FakeLifecycle>,
    pub navigation: Arc<FakeNavigation>,
    pub dialog: Arc<FakeDialog>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            analysis: Arc::new(FakeAnalysis::default()),
            share: Arc::new(FakeShare::new()),
            clipboard: Arc::new(FakeClipboard::default()),
            lifecycle: Arc::new(FakeLifecycle::new(AppPhase::Active)),
            navigation: Arc::new(FakeNavigation::default()),
            dialog: Arc::new(FakeDialog::answering(true)),
        }
    }

    pub fn mount(&self) -> IntakeHandle {
        mount(
            IntakeDeps {
                analysis: self.analysis.clone(),
                share: self.share.clone(),
                clipboard: self.clipboard.clone(),
                lifecycle: self.lifecycle.clone(),
                navigation: self.navigation.clone(),
                dialog: self.dialog.clone(),
            },
            IntakeConfig::default(),
        )
    }
}

/// Polls `condition` until it holds, failing the test after ~2s.
pub async fn wait_until<F: Fn() -> bool>(what: &str, condition: F) {
    for _ in 0..400 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("Timed out waiting for: {}", what);
}

/// Lets spawned tasks run without waiting for anything in particular.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}
