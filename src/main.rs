use std::sync::{Arc, Mutex, Weak};

use async_trait::async_trait;
use media_filter::kernel::lifecycle::AppPhase;
use media_filter::ports::{
    ClipboardError, ClipboardPort, DialogPort, LifecyclePort, NavigationPort, Notice, SharePayload,
    ShareReceiptPort,
};
use media_filter::presentation::{ResultParams, ResultScreen};
use media_filter::services::analysis::types::looks_like_url;
use media_filter::{mount, AnalysisClient, ClientConfig, IntakeConfig, IntakeDeps};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, oneshot};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

// Console stand-ins for the host capabilities. Stdin drives all of them.

#[derive(Default)]
struct ConsoleClipboard {
    value: Mutex<String>,
}

#[async_trait]
impl ClipboardPort for ConsoleClipboard {
    async fn read(&self) -> Result<String, ClipboardError> {
        self.value
            .lock()
            .map(|value| value.clone())
            .map_err(|_| ClipboardError::Unavailable("clipboard lock poisoned".to_string()))
    }
}

struct ConsoleShare {
    pending: Mutex<Option<SharePayload>>,
    notify_tx: mpsc::Sender<()>,
    notify_rx: Mutex<Option<mpsc::Receiver<()>>>,
}

impl ConsoleShare {
    fn new() -> Self {
        let (notify_tx, notify_rx) = mpsc::channel(8);
        Self {
            pending: Mutex::new(None),
            notify_tx,
            notify_rx: Mutex::new(Some(notify_rx)),
        }
    }

    fn push(&self, payload: SharePayload) {
        if let Ok(mut pending) = self.pending.lock() {
            *pending = Some(payload);
        }
        let _ = self.notify_tx.try_send(());
    }
}

impl ShareReceiptPort for ConsoleShare {
    fn has_pending_share(&self) -> bool {
        self.pending.lock().map(|p| p.is_some()).unwrap_or(false)
    }

    fn pending_share_payload(&self) -> Option<SharePayload> {
        self.pending.lock().ok().and_then(|p| p.clone())
    }

    fn acknowledge(&self) {
        if let Ok(mut pending) = self.pending.lock() {
            *pending = None;
        }
    }

    fn subscribe(&self) -> mpsc::Receiver<()> {
        take_or_closed(&self.notify_rx)
    }
}

struct ConsoleLifecycle {
    phase: Mutex<AppPhase>,
    tx: mpsc::Sender<AppPhase>,
    rx: Mutex<Option<mpsc::Receiver<AppPhase>>>,
}

impl ConsoleLifecycle {
    fn new() -> Self {
        let (tx, rx) = mpsc::channel(8);
        Self {
            phase: Mutex::new(AppPhase::Active),
            tx,
            rx: Mutex::new(Some(rx)),
        }
    }

    async fn set(&self, next: AppPhase) {
        if let Ok(mut phase) = self.phase.lock() {
            *phase = next;
        }
        let _ = self.tx.send(next).await;
    }
}

impl LifecyclePort for ConsoleLifecycle {
    fn current(&self) -> AppPhase {
        self.phase.lock().map(|p| *p).unwrap_or_default()
    }

    fn subscribe(&self) -> mpsc::Receiver<AppPhase> {
        take_or_closed(&self.rx)
    }
}

/// Single subscriber; later callers get a receiver that is already closed.
fn take_or_closed<T>(slot: &Mutex<Option<mpsc::Receiver<T>>>) -> mpsc::Receiver<T> {
    slot.lock().ok().and_then(|mut rx| rx.take()).unwrap_or_else(|| mpsc::channel(1).1)
}

/// Keeps the result screen currently on display, if any.
struct ConsoleNavigation {
    this: Weak<ConsoleNavigation>,
    screen: Mutex<Option<ResultScreen>>,
}

impl ConsoleNavigation {
    fn new() -> Arc<Self> {
        Arc::new_cyclic(|this| Self {
            this: this.clone(),
            screen: Mutex::new(None),
        })
    }

    /// The result screen's back button.
    fn back(&self) {
        let screen = self.screen.lock().ok().and_then(|mut s| s.take());
        match screen {
            Some(screen) => screen.go_back(),
            None => println!("No result on screen"),
        }
    }
}

impl NavigationPort for ConsoleNavigation {
    fn navigate_to_result(&self, params: ResultParams) {
        let Some(this) = self.this.upgrade() else {
            return;
        };
        let screen = ResultScreen::new(&params, this);
        println!("\n{}", screen.render());
        if let Ok(mut current) = self.screen.lock() {
            *current = Some(screen);
        }
    }

    fn navigate_back(&self) {
        println!("<- 返回继续检测");
    }
}

#[derive(Default)]
struct ConsoleDialog {
    pending: Mutex<Option<oneshot::Sender<bool>>>,
}

impl ConsoleDialog {
    /// Routes a `y`/`n` line to the open prompt. False when none is open.
    fn answer(&self, line: &str) -> bool {
        let accepted = match line {
            "y" | "Y" => true,
            "n" | "N" => false,
            _ => return false,
        };
        match self.pending.lock().ok().and_then(|mut p| p.take()) {
            Some(tx) => {
                let _ = tx.send(accepted);
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl DialogPort for ConsoleDialog {
    fn alert(&self, notice: &Notice) {
        println!("[{}] {}", notice.title, notice.message);
    }

    async fn confirm(&self, notice: &Notice) -> bool {
        let (tx, rx) = oneshot::channel();
        if let Ok(mut pending) = self.pending.lock() {
            *pending = Some(tx);
        }
        println!("[{}] {} [y/n]", notice.title, notice.message);
        rx.await.unwrap_or(false)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ClientConfig::from_env();
    let client = AnalysisClient::new(config);
    tracing::info!("Analysis service: {}", client.base_url());
    match client.health().await {
        Ok(true) => tracing::info!("Analysis service healthy"),
        Ok(false) => tracing::warn!("Analysis service reports unhealthy"),
        Err(e) => tracing::warn!("Analysis service unreachable: {}", e),
    }

    let clipboard = Arc::new(ConsoleClipboard::default());
    let share = Arc::new(ConsoleShare::new());
    let lifecycle = Arc::new(ConsoleLifecycle::new());
    let navigation = ConsoleNavigation::new();
    let dialog = Arc::new(ConsoleDialog::default());

    let handle = mount(
        IntakeDeps {
            analysis: Arc::new(client),
            share: share.clone(),
            clipboard: clipboard.clone(),
            lifecycle: lifecycle.clone(),
            navigation: navigation.clone(),
            dialog: dialog.clone(),
        },
        IntakeConfig::default(),
    );

    println!("Type a link or text to analyze. Commands: :share <content>, :clip <content>, :bg, :fg, :paste, :clear, :back, :quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() || dialog.answer(line) {
            continue;
        }

        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        match command {
            ":quit" => break,
            ":share" => {
                let payload = if looks_like_url(rest) {
                    SharePayload::url(rest)
                } else {
                    SharePayload::text(rest)
                };
                share.push(payload);
            }
            ":clip" => {
                if let Ok(mut value) = clipboard.value.lock() {
                    *value = rest.to_string();
                }
            }
            ":bg" => lifecycle.set(AppPhase::Background).await,
            ":fg" => lifecycle.set(AppPhase::Active).await,
            ":paste" => handle.paste(),
            ":clear" => handle.clear(),
            ":back" => navigation.back(),
            _ => {
                handle.edit_input(line);
                handle.submit();
            }
        }
    }

    if let Some(reactor) = handle.unmount().await {
        tracing::info!("Session stats: {:?}", reactor.telemetry.snapshot());
    }
    Ok(())
}
