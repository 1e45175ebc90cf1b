//! Intake orchestration.
//!
//! `reactor` is the pure core: events in, state deltas applied, side effects
//! out. `driver` owns the only reactor instance, feeds it events from the
//! share, lifecycle and clipboard capabilities and from the UI, and carries
//! out the side effects.

pub mod driver;
pub mod event;
pub mod guard;
pub mod lifecycle;
pub mod policy;
pub mod reactor;
pub mod scheduler;
pub mod state;
pub mod telemetry;

pub use driver::{mount, IntakeDeps, IntakeHandle};
pub use reactor::{IntakeConfig, IntakeReactor};
