use tokio::sync::mpsc;

use super::event::{Event, RequestId};
use crate::services::analysis::{AnalysisError, AnalysisResult};

/// Held by the task running one analysis request.
///
/// Whatever way the task ends, exactly one report reaches the reactor:
/// `complete` sends the outcome, and dropping the guard unreported sends
/// `AnalysisAbandoned` so the in-flight slot is always released.
#[derive(Debug)]
pub struct InFlightGuard {
    request_id: RequestId,
    tx: Option<mpsc::UnboundedSender<Event>>,
}

impl InFlightGuard {
    pub fn new(request_id: RequestId, tx: mpsc::UnboundedSender<Event>) -> Self {
        Self {
            request_id,
            tx: Some(tx),
        }
    }

    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    pub fn complete(mut self, outcome: Result<AnalysisResult, AnalysisError>) {
        if let Some(tx) = self.tx.take() {
            // Receiver gone means the screen unmounted; nothing left to update.
            let _ = tx.send(Event::AnalysisFinished {
                request_id: self.request_id,
                outcome,
            });
        }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(Event::AnalysisAbandoned {
                request_id: self.request_id,
            });
        }
    }
}
