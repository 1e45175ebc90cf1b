use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard access denied")]
    Denied,
}

#[async_trait]
pub trait ClipboardPort: Send + Sync {
    async fn read(&self) -> Result<String, ClipboardError>;
}
