use tokio::sync::mpsc;

use crate::kernel::lifecycle::AppPhase;

pub trait LifecyclePort: Send + Sync {
    fn current(&self) -> AppPhase;

    /// Every phase change, in order.
    fn subscribe(&self) -> mpsc::Receiver<AppPhase>;
}
