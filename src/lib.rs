pub mod kernel;
pub mod ports;
pub mod presentation;
pub mod services;

// Re-export specific items if needed for convenient access
pub use kernel::reactor::IntakeReactor;
pub use kernel::{mount, IntakeConfig, IntakeDeps, IntakeHandle};
pub use services::analysis::{AnalysisClient, AnalysisError, AnalysisRequest, AnalysisResult, ClientConfig};
