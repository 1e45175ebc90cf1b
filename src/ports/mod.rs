//! Capabilities the intake screen consumes from its host.
//!
//! Each one is implemented outside this crate (OS share sheet, system
//! clipboard, app lifecycle, router, alert dialogs) and injected into the
//! driver, so tests can script event sequences with fakes.

pub mod clipboard;
pub mod dialog;
pub mod lifecycle;
pub mod navigation;
pub mod share;

pub use clipboard::{ClipboardError, ClipboardPort};
pub use dialog::{DialogPort, Notice};
pub use lifecycle::LifecyclePort;
pub use navigation::NavigationPort;
pub use share::{SharePayload, ShareReceiptPort};
