use serde::{Deserialize, Serialize};

/// Foreground state of the host app, as reported by the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppPhase {
    Active,
    Inactive,
    Background,
}

impl Default for AppPhase {
    fn default() -> Self {
        Self::Active
    }
}

/// What a phase change asks the intake screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseTransition {
    /// Came back to the foreground: re-check the clipboard.
    Resumed,
    /// Anything else. Only the phase is recorded.
    Other,
}

pub struct LifecycleGraph;

impl LifecycleGraph {
    /// Pure function: (previous, next) -> transition kind.
    /// Only `inactive|background -> active` counts as a resume.
    pub fn transition(previous: AppPhase, next: AppPhase) -> PhaseTransition {
        use AppPhase::*;

        match (previous, next) {
            (Inactive, Active) | (Background, Active) => PhaseTransition::Resumed,
            _ => PhaseTransition::Other,
        }
    }
}
