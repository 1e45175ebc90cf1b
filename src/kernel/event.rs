use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::lifecycle::AppPhase;
use crate::ports::clipboard::ClipboardError;
use crate::ports::share::SharePayload;
use crate::services::analysis::{AnalysisError, AnalysisResult};

/// Identifies one submission for in-flight bookkeeping. Never used to cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Where a submission came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntakeSource {
    Share,
    Clipboard,
    Manual,
}

/// Why the clipboard is being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardPurpose {
    /// Mount/resume check. Failures are swallowed.
    Detect,
    /// The paste button. Failures are reported.
    Paste,
}

#[derive(Debug, Clone)]
pub enum Event {
    /// Screen entered. Carries the lifecycle phase at that moment.
    Mounted { phase: AppPhase },
    ShareReceived(SharePayload),
    PhaseChanged(AppPhase),
    ClipboardRead {
        purpose: ClipboardPurpose,
        outcome: Result<String, ClipboardError>,
    },
    /// The user answered the "article detected" prompt for `content`.
    PromptAnswered { content: String, accepted: bool },

    // Manual entry
    InputEdited(String),
    SubmitPressed,
    PastePressed,
    ClearPressed,

    AnalysisFinished {
        request_id: RequestId,
        outcome: Result<AnalysisResult, AnalysisError>,
    },
    /// The analysis task went away without reporting (panic, shutdown).
    AnalysisAbandoned { request_id: RequestId },
}
