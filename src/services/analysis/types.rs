use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What gets sent to `/analyze`. Exactly one field ever reaches the wire:
/// the externally tagged encoding yields `{"url": ..}` or `{"text": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisRequest {
    Url(String),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("nothing to analyze: input is empty")]
pub struct EmptyInput;

impl AnalysisRequest {
    /// Trims the raw buffer and classifies it by scheme prefix.
    pub fn from_input(raw: &str) -> Result<Self, EmptyInput> {
        let content = raw.trim();
        if content.is_empty() {
            return Err(EmptyInput);
        }

        if looks_like_url(content) {
            Ok(Self::Url(content.to_string()))
        } else {
            Ok(Self::Text(content.to_string()))
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Self::Url(url) => url,
            Self::Text(text) => text,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Url(_) => "url",
            Self::Text(_) => "text",
        }
    }
}

pub fn looks_like_url(content: &str) -> bool {
    content.starts_with("http://") || content.starts_with("https://")
}

/// Trust classification returned by the service.
///
/// The service promises one of three codes, but anything else is kept
/// verbatim instead of failing the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Verdict {
    Reliable,
    Caution,
    Misleading,
    Unrecognized(String),
}

impl Verdict {
    pub fn code(&self) -> &str {
        match self {
            Verdict::Reliable => "reliable",
            Verdict::Caution => "caution",
            Verdict::Misleading => "misleading",
            Verdict::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for Verdict {
    fn from(code: String) -> Self {
        match code.as_str() {
            "reliable" => Verdict::Reliable,
            "caution" => Verdict::Caution,
            "misleading" => Verdict::Misleading,
            _ => Verdict::Unrecognized(code),
        }
    }
}

impl From<Verdict> for String {
    fn from(verdict: Verdict) -> Self {
        verdict.code().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub title: String,
    pub verdict: Verdict,
    pub verdict_emoji: String,
    pub summary: String,
    pub details: String,
    pub original_text: String,
    /// 0-10 trust score, when the service reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    /// "url" or "text", as detected server-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
}
