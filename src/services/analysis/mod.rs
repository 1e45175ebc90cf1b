//! Contract with the remote classification service.

pub mod client;
pub mod types;

pub use client::{AnalysisClient, AnalysisError, AnalysisPort, ClientConfig};
pub use types::{AnalysisRequest, AnalysisResult, EmptyInput, Verdict};
