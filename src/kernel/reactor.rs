use tracing::{debug, info, warn};

use super::event::{ClipboardPurpose, Event, IntakeSource, RequestId};
use super::lifecycle::{AppPhase, LifecycleGraph, PhaseTransition};
use super::policy::{decide_clipboard, decide_share, ClipboardDecision, ShareDecision, TrustedDomains};
use super::scheduler::{Scheduler, SideEffect};
use super::state::{IntakeState, StateDelta};
use super::telemetry::event::{OutcomeKind, PromptEventKind, TelemetryEvent};
use super::telemetry::recorder::TelemetryRecorder;
use crate::ports::clipboard::ClipboardError;
use crate::ports::dialog::Notice;
use crate::ports::share::SharePayload;
use crate::presentation::handoff::ResultParams;
use crate::services::analysis::client::GENERIC_FAILURE_MESSAGE;
use crate::services::analysis::{AnalysisError, AnalysisResult};

#[derive(Debug, Clone, Default)]
pub struct IntakeConfig {
    pub trusted_domains: TrustedDomains,
}

/// Pure core of the intake screen. The driver is its only caller, so every
/// mutation of `IntakeState` happens one event at a time.
pub struct IntakeReactor {
    pub state: IntakeState,
    pub scheduler: Scheduler,
    pub telemetry: TelemetryRecorder,
    config: IntakeConfig,
}

impl IntakeReactor {
    pub fn new(phase: AppPhase, config: IntakeConfig) -> Self {
        Self {
            state: IntakeState::new(phase),
            scheduler: Scheduler,
            telemetry: TelemetryRecorder::new(),
            config,
        }
    }

    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    /// Applies one event and returns the side effects for the driver.
    /// MUST NOT await I/O.
    pub fn step(&mut self, event: Event) -> Vec<SideEffect> {
        match event {
            Event::Mounted { phase } => {
                self.state.reduce(StateDelta::PhaseChanged(phase));
                vec![SideEffect::ReadClipboard(ClipboardPurpose::Detect)]
            }
            Event::ShareReceived(payload) => self.on_share(payload),
            Event::PhaseChanged(next) => self.on_phase(next),
            Event::ClipboardRead { purpose, outcome } => match purpose {
                ClipboardPurpose::Detect => self.on_clipboard_detected(outcome),
                ClipboardPurpose::Paste => self.on_paste(outcome),
            },
            Event::PromptAnswered { content, accepted } => self.on_prompt_answer(content, accepted),
            Event::InputEdited(text) => {
                self.state.reduce(StateDelta::InputReplaced(text));
                Vec::new()
            }
            Event::SubmitPressed => {
                let buffer = self.state.input_text().to_string();
                self.submit(&buffer, IntakeSource::Manual)
            }
            Event::PastePressed => vec![SideEffect::ReadClipboard(ClipboardPurpose::Paste)],
            Event::ClearPressed => {
                self.state.reduce(StateDelta::InputReplaced(String::new()));
                Vec::new()
            }
            Event::AnalysisFinished { request_id, outcome } => self.on_analysis_finished(request_id, outcome),
            Event::AnalysisAbandoned { request_id } => self.on_analysis_abandoned(request_id),
        }
    }

    fn submit(&mut self, raw: &str, source: IntakeSource) -> Vec<SideEffect> {
        if self.state.request_in_flight() {
            // No queuing, no cancellation: both requests run.
            debug!("Submitting while {} request(s) in flight", self.state.outstanding_requests());
        }

        let (delta, effect) = self.scheduler.schedule(raw, source);
        match delta {
            Some(delta) => {
                self.state.reduce(delta);
                self.telemetry.record(TelemetryEvent::SubmissionIssued { source });
            }
            None => {
                info!("Rejected blank submission from {:?}", source);
                self.telemetry.record(TelemetryEvent::SubmissionRejected { source });
            }
        }
        vec![effect]
    }

    fn on_share(&mut self, payload: SharePayload) -> Vec<SideEffect> {
        match decide_share(&payload) {
            ShareDecision::AutoSubmit(content) => {
                info!("Shared link received, submitting");
                self.state.reduce(StateDelta::InputReplaced(content.clone()));
                self.telemetry.record(TelemetryEvent::ShareConsumed { auto_submitted: true });
                let mut effects = self.submit(&content, IntakeSource::Share);
                effects.push(SideEffect::AcknowledgeShare);
                effects
            }
            ShareDecision::Populate(content) => {
                info!("Shared text received ({} chars)", content.chars().count());
                self.state.reduce(StateDelta::InputReplaced(content));
                self.telemetry.record(TelemetryEvent::ShareConsumed { auto_submitted: false });
                vec![SideEffect::AcknowledgeShare]
            }
            ShareDecision::Ignore => {
                debug!("Share without content left pending");
                Vec::new()
            }
        }
    }

    fn on_phase(&mut self, next: AppPhase) -> Vec<SideEffect> {
        let transition = LifecycleGraph::transition(self.state.phase(), next);
        self.state.reduce(StateDelta::PhaseChanged(next));

        match transition {
            PhaseTransition::Resumed => {
                debug!("App resumed, re-checking clipboard");
                vec![SideEffect::ReadClipboard(ClipboardPurpose::Detect)]
            }
            PhaseTransition::Other => Vec::new(),
        }
    }

    fn on_clipboard_detected(&mut self, outcome: Result<String, ClipboardError>) -> Vec<SideEffect> {
        let observed = match outcome {
            Ok(value) => value,
            Err(e) => {
                // Convenience path only: degrade to a no-op.
                debug!("Clipboard check skipped: {}", e);
                self.telemetry.record(TelemetryEvent::ClipboardReadFailed);
                return Vec::new();
            }
        };

        // Reads are applied in arrival order, not issue order; a slow read
        // can overwrite a newer value.
        let decision = decide_clipboard(&observed, self.state.last_seen_clipboard(), &self.config.trusted_domains);
        if observed != self.state.last_seen_clipboard() {
            self.state.reduce(StateDelta::ClipboardSeen(observed.clone()));
        }

        match decision {
            ClipboardDecision::Prompt => {
                info!("Article link detected on clipboard, asking before analysis");
                self.telemetry.record(TelemetryEvent::Prompt(PromptEventKind::Shown));
                vec![SideEffect::ConfirmAnalysis { content: observed }]
            }
            ClipboardDecision::AlreadySeen | ClipboardDecision::NotRelevant => Vec::new(),
        }
    }

    fn on_paste(&mut self, outcome: Result<String, ClipboardError>) -> Vec<SideEffect> {
        match outcome {
            Ok(text) if text.is_empty() => vec![SideEffect::Alert(Notice::clipboard_empty())],
            Ok(text) => {
                self.state.reduce(StateDelta::InputReplaced(text));
                Vec::new()
            }
            Err(e) => {
                warn!("Paste failed: {}", e);
                vec![SideEffect::Alert(Notice::clipboard_unreadable())]
            }
        }
    }

    fn on_prompt_answer(&mut self, content: String, accepted: bool) -> Vec<SideEffect> {
        if !accepted {
            self.telemetry.record(TelemetryEvent::Prompt(PromptEventKind::Dismissed));
            return Vec::new();
        }

        self.telemetry.record(TelemetryEvent::Prompt(PromptEventKind::Accepted));
        self.state.reduce(StateDelta::InputReplaced(content.clone()));
        self.submit(&content, IntakeSource::Clipboard)
    }

    fn on_analysis_finished(
        &mut self,
        request_id: RequestId,
        outcome: Result<AnalysisResult, AnalysisError>,
    ) -> Vec<SideEffect> {
        self.state.reduce(StateDelta::RequestSettled(request_id));

        match outcome {
            Ok(result) => {
                info!("Analysis {} finished: {}", request_id, result.verdict.code());
                self.telemetry.record(TelemetryEvent::AnalysisOutcome(OutcomeKind::Succeeded));
                vec![SideEffect::ShowResult(ResultParams::from_result(&result))]
            }
            Err(e) => {
                // Input buffer is left untouched so the user can retry.
                warn!("Analysis {} failed: {}", request_id, e);
                self.telemetry.record(TelemetryEvent::AnalysisOutcome(OutcomeKind::from(&e)));
                vec![SideEffect::Alert(Notice::analysis_failed(&e.user_message()))]
            }
        }
    }

    fn on_analysis_abandoned(&mut self, request_id: RequestId) -> Vec<SideEffect> {
        warn!("Analysis {} ended without a result", request_id);
        self.state.reduce(StateDelta::RequestSettled(request_id));
        self.telemetry.record(TelemetryEvent::AnalysisOutcome(OutcomeKind::Abandoned));
        vec![SideEffect::Alert(Notice::analysis_failed(GENERIC_FAILURE_MESSAGE))]
    }
}
