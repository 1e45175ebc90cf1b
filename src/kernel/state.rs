use std::collections::HashSet;

use super::event::RequestId;
use super::lifecycle::AppPhase;

/// Strict state delta. This is the ONLY way intake state mutates.
#[derive(Debug, Clone)]
pub enum StateDelta {
    InputReplaced(String),
    ClipboardSeen(String),
    PhaseChanged(AppPhase),
    RequestIssued(RequestId),
    RequestSettled(RequestId),
}

/// State of one intake screen instance. Created on mount, dropped on unmount.
#[derive(Debug, Clone, Default)]
pub struct IntakeState {
    input_text: String,
    last_seen_clipboard: String,
    phase: AppPhase,
    outstanding: HashSet<RequestId>,
    /// Monotonic, bumped by every reduction.
    pub version: u64,
}

/// Read-only copy published to the UI after each step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeSnapshot {
    pub input_text: String,
    pub busy: bool,
    pub phase: AppPhase,
    pub version: u64,
}

impl IntakeState {
    pub fn new(phase: AppPhase) -> Self {
        Self {
            phase,
            ..Self::default()
        }
    }

    /// Pure reduction: State + Delta -> Mutated State
    pub fn reduce(&mut self, delta: StateDelta) {
        self.version += 1;

        match delta {
            StateDelta::InputReplaced(text) => {
                self.input_text = text;
            }
            StateDelta::ClipboardSeen(value) => {
                self.last_seen_clipboard = value;
            }
            StateDelta::PhaseChanged(phase) => {
                self.phase = phase;
            }
            StateDelta::RequestIssued(id) => {
                self.outstanding.insert(id);
            }
            StateDelta::RequestSettled(id) => {
                // Settling twice (late guard report) is a no-op.
                self.outstanding.remove(&id);
            }
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn last_seen_clipboard(&self) -> &str {
        &self.last_seen_clipboard
    }

    pub fn phase(&self) -> AppPhase {
        self.phase
    }

    /// True while any submission is unresolved.
    pub fn request_in_flight(&self) -> bool {
        !self.outstanding.is_empty()
    }

    pub fn outstanding_requests(&self) -> usize {
        self.outstanding.len()
    }

    pub fn snapshot(&self) -> IntakeSnapshot {
        IntakeSnapshot {
            input_text: self.input_text.clone(),
            busy: self.request_in_flight(),
            phase: self.phase,
            version: self.version,
        }
    }
}
