//! Per-source intake policy.
//!
//! Share handoff is an explicit user action and may auto-submit links.
//! Clipboard content is untrusted and at most earns a confirmation prompt.
//! Manual entry never submits on its own.

use crate::ports::share::SharePayload;
use crate::services::analysis::types::looks_like_url;

pub const DEFAULT_TRUSTED_DOMAINS: [&str; 2] = ["mp.weixin.qq.com", "weixin.qq.com"];

/// Substring patterns that make clipboard content worth asking about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedDomains {
    patterns: Vec<String>,
}

impl Default for TrustedDomains {
    fn default() -> Self {
        Self::new(DEFAULT_TRUSTED_DOMAINS)
    }
}

impl TrustedDomains {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(Into::into)
                .filter(|p: &String| !p.is_empty())
                .collect(),
        }
    }

    pub fn matches(&self, content: &str) -> bool {
        self.patterns.iter().any(|p| content.contains(p.as_str()))
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareDecision {
    /// Link from the share sheet: fill the buffer and submit right away.
    AutoSubmit(String),
    /// Plain text: fill the buffer, the user submits.
    Populate(String),
    /// Nothing usable; leave the share pending.
    Ignore,
}

pub fn decide_share(payload: &SharePayload) -> ShareDecision {
    match payload.content() {
        Some(content) if looks_like_url(content) => ShareDecision::AutoSubmit(content.to_string()),
        Some(content) => ShareDecision::Populate(content.to_string()),
        None => ShareDecision::Ignore,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardDecision {
    Prompt,
    AlreadySeen,
    NotRelevant,
}

pub fn decide_clipboard(observed: &str, last_seen: &str, trusted: &TrustedDomains) -> ClipboardDecision {
    if observed.is_empty() || !trusted.matches(observed) {
        ClipboardDecision::NotRelevant
    } else if observed == last_seen {
        ClipboardDecision::AlreadySeen
    } else {
        ClipboardDecision::Prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_prefers_link_over_text() {
        let payload = SharePayload {
            web_url: Some("https://mp.weixin.qq.com/s/abc".into()),
            text: Some("look at this".into()),
        };
        assert_eq!(
            decide_share(&payload),
            ShareDecision::AutoSubmit("https://mp.weixin.qq.com/s/abc".into())
        );
    }

    #[test]
    fn share_with_blank_link_falls_back_to_text() {
        let payload = SharePayload {
            web_url: Some(String::new()),
            text: Some("喝绿豆汤治百病".into()),
        };
        assert_eq!(decide_share(&payload), ShareDecision::Populate("喝绿豆汤治百病".into()));
    }

    #[test]
    fn share_without_scheme_is_not_auto_submitted() {
        let payload = SharePayload::text("mp.weixin.qq.com/s/abc");
        assert_eq!(decide_share(&payload), ShareDecision::Populate("mp.weixin.qq.com/s/abc".into()));
        assert_eq!(decide_share(&SharePayload::default()), ShareDecision::Ignore);
    }

    #[test]
    fn clipboard_needs_a_trusted_pattern() {
        let trusted = TrustedDomains::default();
        assert_eq!(
            decide_clipboard("https://example.com/a", "", &trusted),
            ClipboardDecision::NotRelevant
        );
        assert_eq!(
            decide_clipboard("https://mp.weixin.qq.com/s/x", "", &trusted),
            ClipboardDecision::Prompt
        );
        assert_eq!(
            decide_clipboard("https://mp.weixin.qq.com/s/x", "https://mp.weixin.qq.com/s/x", &trusted),
            ClipboardDecision::AlreadySeen
        );
    }
}
