use serde::{Deserialize, Serialize};

use crate::kernel::event::IntakeSource;
use crate::services::analysis::AnalysisError;

// Allowed: sources, outcome kinds, HTTP status codes
// Forbidden: links, text, clipboard values, service messages

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TelemetryEvent {
    SubmissionIssued { source: IntakeSource },
    /// Blank input, no request sent.
    SubmissionRejected { source: IntakeSource },
    ShareConsumed { auto_submitted: bool },
    Prompt(PromptEventKind),
    ClipboardReadFailed,
    AnalysisOutcome(OutcomeKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptEventKind {
    Shown,
    Accepted,
    Dismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeKind {
    Succeeded,
    NetworkFailed,
    ServiceFailed { status: u16 },
    ParseFailed,
    Abandoned,
}

impl From<&AnalysisError> for OutcomeKind {
    fn from(error: &AnalysisError) -> Self {
        match error {
            AnalysisError::Network(_) => OutcomeKind::NetworkFailed, // Message STRIPPED
            AnalysisError::Service { status, .. } => OutcomeKind::ServiceFailed { status: *status },
            AnalysisError::Parse(_) => OutcomeKind::ParseFailed,
        }
    }
}
