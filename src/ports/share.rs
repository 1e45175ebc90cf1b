use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Content handed over by another app through the OS share sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    #[serde(rename = "webUrl", default)]
    pub web_url: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl SharePayload {
    pub fn url(url: &str) -> Self {
        Self {
            web_url: Some(url.to_string()),
            text: None,
        }
    }

    pub fn text(text: &str) -> Self {
        Self {
            web_url: None,
            text: Some(text.to_string()),
        }
    }

    /// The link wins over the text; blank fields count as absent.
    pub fn content(&self) -> Option<&str> {
        [self.web_url.as_deref(), self.text.as_deref()]
            .into_iter()
            .flatten()
            .find(|value| !value.is_empty())
    }
}

pub trait ShareReceiptPort: Send + Sync {
    fn has_pending_share(&self) -> bool;
    fn pending_share_payload(&self) -> Option<SharePayload>;
    /// Fire-and-forget; clears the pending share so it is not reprocessed.
    fn acknowledge(&self);
    /// Wakes the driver whenever a new share lands.
    fn subscribe(&self) -> mpsc::Receiver<()>;
}
