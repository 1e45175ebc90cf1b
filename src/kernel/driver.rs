use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::event::{Event, IntakeSource, RequestId};
use super::guard::InFlightGuard;
use super::lifecycle::AppPhase;
use super::reactor::{IntakeConfig, IntakeReactor};
use super::scheduler::SideEffect;
use super::state::IntakeSnapshot;
use crate::ports::{ClipboardPort, DialogPort, LifecyclePort, NavigationPort, Notice, ShareReceiptPort};
use crate::services::analysis::{AnalysisPort, AnalysisRequest};

/// Everything the intake screen talks to.
#[derive(Clone)]
pub struct IntakeDeps {
    pub analysis: Arc<dyn AnalysisPort>,
    pub share: Arc<dyn ShareReceiptPort>,
    pub clipboard: Arc<dyn ClipboardPort>,
    pub lifecycle: Arc<dyn LifecyclePort>,
    pub navigation: Arc<dyn NavigationPort>,
    pub dialog: Arc<dyn DialogPort>,
}

/// Mounts an intake screen: fresh state, subscriptions to share and
/// lifecycle, and the driver loop on its own task.
///
/// Must be called from within a tokio runtime.
pub fn mount(deps: IntakeDeps, config: IntakeConfig) -> IntakeHandle {
    let phase = deps.lifecycle.current();
    let reactor = IntakeReactor::new(phase, config);

    let (tx, rx) = mpsc::unbounded_channel();
    let (snapshot_tx, snapshot_rx) = watch::channel(reactor.state.snapshot());
    let lifecycle_rx = deps.lifecycle.subscribe();
    let share_rx = deps.share.subscribe();
    let shutdown = CancellationToken::new();

    let driver = IntakeDriver {
        reactor,
        deps,
        tx: tx.clone(),
        rx,
        snapshot_tx,
    };
    let task = tokio::spawn(driver.run(phase, lifecycle_rx, share_rx, shutdown.clone()));

    IntakeHandle {
        tx,
        snapshot_rx,
        shutdown,
        task: Some(task),
    }
}

/// UI-facing side of a mounted intake screen.
pub struct IntakeHandle {
    tx: mpsc::UnboundedSender<Event>,
    snapshot_rx: watch::Receiver<IntakeSnapshot>,
    shutdown: CancellationToken,
    task: Option<JoinHandle<IntakeReactor>>,
}

impl IntakeHandle {
    pub fn edit_input(&self, text: &str) {
        self.send(Event::InputEdited(text.to_string()));
    }

    pub fn submit(&self) {
        self.send(Event::SubmitPressed);
    }

    pub fn paste(&self) {
        self.send(Event::PastePressed);
    }

    pub fn clear(&self) {
        self.send(Event::ClearPressed);
    }

    pub fn snapshot(&self) -> IntakeSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<IntakeSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Stops the loop and hands back the final reactor. Analysis requests
    /// already issued keep running; their results are dropped.
    pub async fn unmount(mut self) -> Option<IntakeReactor> {
        self.shutdown.cancel();
        let task = self.task.take()?;
        task.await.ok()
    }

    fn send(&self, event: Event) {
        if self.tx.send(event).is_err() {
            debug!("Intake screen already unmounted, event dropped");
        }
    }
}

impl Drop for IntakeHandle {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

struct IntakeDriver {
    reactor: IntakeReactor,
    deps: IntakeDeps,
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
    snapshot_tx: watch::Sender<IntakeSnapshot>,
}

impl IntakeDriver {
    async fn run(
        mut self,
        phase: AppPhase,
        mut lifecycle_rx: mpsc::Receiver<AppPhase>,
        mut share_rx: mpsc::Receiver<()>,
        shutdown: CancellationToken,
    ) -> IntakeReactor {
        info!("Intake screen mounted ({:?})", phase);

        self.dispatch(Event::Mounted { phase });
        self.poll_share();

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                Some(event) = self.rx.recv() => self.dispatch(event),
                Some(next) = lifecycle_rx.recv() => self.dispatch(Event::PhaseChanged(next)),
                Some(()) = share_rx.recv() => self.poll_share(),
            }
        }

        info!("Intake screen unmounted");
        self.reactor
    }

    fn poll_share(&mut self) {
        if !self.deps.share.has_pending_share() {
            return;
        }
        if let Some(payload) = self.deps.share.pending_share_payload() {
            self.dispatch(Event::ShareReceived(payload));
        }
    }

    /// One reactor step, then its side effects, then a fresh snapshot.
    fn dispatch(&mut self, event: Event) {
        let effects = self.reactor.step(event);
        for effect in effects {
            self.execute(effect);
        }
        self.snapshot_tx.send_replace(self.reactor.state.snapshot());
    }

    fn execute(&self, effect: SideEffect) {
        match effect {
            SideEffect::ReadClipboard(purpose) => {
                let clipboard = self.deps.clipboard.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let outcome = clipboard.read().await;
                    let _ = tx.send(Event::ClipboardRead { purpose, outcome });
                });
            }
            SideEffect::ConfirmAnalysis { content } => {
                let dialog = self.deps.dialog.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let accepted = dialog.confirm(&Notice::article_detected()).await;
                    let _ = tx.send(Event::PromptAnswered { content, accepted });
                });
            }
            SideEffect::Alert(notice) => self.deps.dialog.alert(&notice),
            SideEffect::Analyze {
                request_id,
                source,
                request,
            } => self.spawn_analysis(request_id, source, request),
            SideEffect::AcknowledgeShare => self.deps.share.acknowledge(),
            SideEffect::ShowResult(params) => self.deps.navigation.navigate_to_result(params),
        }
    }

    /// No timeout and no abort handle: the request runs until the
    /// transport resolves it.
    fn spawn_analysis(&self, request_id: RequestId, source: IntakeSource, request: AnalysisRequest) {
        debug!("Analysis {} started from {:?} ({})", request_id, source, request.kind());
        let analysis = self.deps.analysis.clone();
        let guard = InFlightGuard::new(request_id, self.tx.clone());
        tokio::spawn(async move {
            let outcome = analysis.submit(&request).await;
            guard.complete(outcome);
        });
    }
}
