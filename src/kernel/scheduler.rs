use super::event::{ClipboardPurpose, IntakeSource, RequestId};
use super::state::StateDelta;
use crate::ports::dialog::Notice;
use crate::presentation::handoff::ResultParams;
use crate::services::analysis::AnalysisRequest;

/// Work the driver performs on behalf of the reactor.
#[derive(Debug, Clone, PartialEq)]
pub enum SideEffect {
    ReadClipboard(ClipboardPurpose),
    /// Ask before analysing clipboard content.
    ConfirmAnalysis { content: String },
    Alert(Notice),
    Analyze {
        request_id: RequestId,
        source: IntakeSource,
        request: AnalysisRequest,
    },
    AcknowledgeShare,
    ShowResult(ResultParams),
}

pub struct Scheduler;

impl Scheduler {
    /// Pure projection of the submission algorithm shared by every source:
    /// raw buffer -> (StateDelta, SideEffect).
    ///
    /// Blank input yields only the local prompt. An in-flight request does
    /// not hold a new one back.
    pub fn schedule(&self, raw: &str, source: IntakeSource) -> (Option<StateDelta>, SideEffect) {
        match AnalysisRequest::from_input(raw) {
            Ok(request) => {
                let request_id = RequestId::new();
                (
                    Some(StateDelta::RequestIssued(request_id)),
                    SideEffect::Analyze {
                        request_id,
                        source,
                        request,
                    },
                )
            }
            Err(_) => (None, SideEffect::Alert(Notice::empty_input())),
        }
    }
}
