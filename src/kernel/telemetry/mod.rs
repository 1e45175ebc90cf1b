//! Intake telemetry.
//!
//! # SAFETY INVARIANT
//! Telemetry is a write-only side channel of the reactor.
//! It must **NEVER** be read inside intake decisions.
//!
//! # PRIVACY INVARIANT
//! Events must **NEVER** contain analysed content (links, text, clipboard values).
//! Only sources, outcomes and counts are allowed.

pub mod event;
pub mod metrics;
pub mod recorder;
