use std::collections::VecDeque;

use super::event::{OutcomeKind, PromptEventKind, TelemetryEvent};
use crate::kernel::event::IntakeSource;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeStats {
    pub submissions: SourceCounts,
    pub rejected_empty: u64,
    pub shares_consumed: u64,
    pub shares_auto_submitted: u64,
    pub prompt_stats: PromptStats,
    pub outcome_stats: OutcomeStats,
    pub clipboard_failures: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceCounts {
    pub share: u64,
    pub clipboard: u64,
    pub manual: u64,
}

impl SourceCounts {
    pub fn total(&self) -> u64 {
        self.share + self.clipboard + self.manual
    }

    fn bump(&mut self, source: IntakeSource) {
        match source {
            IntakeSource::Share => self.share += 1,
            IntakeSource::Clipboard => self.clipboard += 1,
            IntakeSource::Manual => self.manual += 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptStats {
    pub shown: u64,
    pub accepted: u64,
    pub dismissed: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeStats {
    pub succeeded: u64,
    pub network_failures: u64,
    pub service_failures: u64,
    pub parse_failures: u64,
    pub abandoned: u64,
}

impl OutcomeStats {
    pub fn failed(&self) -> u64 {
        self.network_failures + self.service_failures + self.parse_failures + self.abandoned
    }
}

pub fn compute_snapshot(events: &VecDeque<TelemetryEvent>) -> IntakeStats {
    let mut stats = IntakeStats::default();

    for event in events {
        match event {
            TelemetryEvent::SubmissionIssued { source } => stats.submissions.bump(*source),
            TelemetryEvent::SubmissionRejected { .. } => stats.rejected_empty += 1,
            TelemetryEvent::ShareConsumed { auto_submitted } => {
                stats.shares_consumed += 1;
                if *auto_submitted {
                    stats.shares_auto_submitted += 1;
                }
            }
            TelemetryEvent::Prompt(kind) => match kind {
                PromptEventKind::Shown => stats.prompt_stats.shown += 1,
                PromptEventKind::Accepted => stats.prompt_stats.accepted += 1,
                PromptEventKind::Dismissed => stats.prompt_stats.dismissed += 1,
            },
            TelemetryEvent::ClipboardReadFailed => stats.clipboard_failures += 1,
            TelemetryEvent::AnalysisOutcome(kind) => match kind {
                OutcomeKind::Succeeded => stats.outcome_stats.succeeded += 1,
                OutcomeKind::NetworkFailed => stats.outcome_stats.network_failures += 1,
                OutcomeKind::ServiceFailed { .. } => stats.outcome_stats.service_failures += 1,
                OutcomeKind::ParseFailed => stats.outcome_stats.parse_failures += 1,
                OutcomeKind::Abandoned => stats.outcome_stats.abandoned += 1,
            },
        }
    }

    stats
}
