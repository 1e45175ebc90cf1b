use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::verdict::{color_for, guidance_for, label_for, Color};
use crate::ports::navigation::NavigationPort;
use crate::services::analysis::AnalysisResult;

pub const TITLE: &str = "title";
pub const VERDICT: &str = "verdict";
pub const VERDICT_EMOJI: &str = "verdict_emoji";
pub const SUMMARY: &str = "summary";
pub const DETAILS: &str = "details";

/// String-typed parameters carried across the navigation boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultParams(BTreeMap<String, String>);

impl ResultParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Carries the five display fields. `original_text` stays behind and the
    /// verdict travels as its raw code.
    pub fn from_result(result: &AnalysisResult) -> Self {
        let mut params = Self::new();
        params.insert(TITLE, &result.title);
        params.insert(VERDICT, result.verdict.code());
        params.insert(VERDICT_EMOJI, &result.verdict_emoji);
        params.insert(SUMMARY, &result.summary);
        params.insert(DETAILS, &result.details);
        params
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl From<BTreeMap<String, String>> for ResultParams {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

/// Receiving side of the handoff. No validation beyond presence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultView {
    pub title: String,
    pub verdict: String,
    pub verdict_emoji: String,
    pub summary: String,
    pub details: String,
}

impl ResultView {
    pub fn from_params(params: &ResultParams) -> Self {
        let field = |key: &str| params.get(key).unwrap_or_default().to_string();
        Self {
            title: field(TITLE),
            verdict: field(VERDICT),
            verdict_emoji: field(VERDICT_EMOJI),
            summary: field(SUMMARY),
            details: field(DETAILS),
        }
    }

    pub fn render(&self) -> RenderedResult {
        let color = color_for(&self.verdict);
        RenderedResult {
            color,
            label: label_for(&self.verdict),
            emoji: self.verdict_emoji.clone(),
            title: self.title.clone(),
            summary: self.summary.clone(),
            summary_tint: color.tint(),
            details: self.details.clone(),
            guidance: guidance_for(&self.verdict),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResult {
    pub color: Color,
    pub label: &'static str,
    pub emoji: String,
    pub title: String,
    pub summary: String,
    pub summary_tint: String,
    pub details: String,
    pub guidance: Option<&'static str>,
}

impl fmt::Display for RenderedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} [{}]", self.emoji, self.label, self.color)?;
        writeln!(f)?;
        writeln!(f, "文章标题")?;
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;
        writeln!(f, "简要说明")?;
        writeln!(f, "{}", self.summary)?;
        writeln!(f)?;
        writeln!(f, "详细分析")?;
        writeln!(f, "{}", self.details)?;
        writeln!(f)?;
        writeln!(f, "温馨提示")?;
        if let Some(guidance) = self.guidance {
            writeln!(f, "{}", guidance)?;
        }
        Ok(())
    }
}

/// The result-presentation surface: a rendered view plus a way back.
pub struct ResultScreen {
    view: ResultView,
    navigation: Arc<dyn NavigationPort>,
}

impl ResultScreen {
    pub fn new(params: &ResultParams, navigation: Arc<dyn NavigationPort>) -> Self {
        Self {
            view: ResultView::from_params(params),
            navigation,
        }
    }

    pub fn view(&self) -> &ResultView {
        &self.view
    }

    pub fn render(&self) -> RenderedResult {
        self.view.render()
    }

    pub fn go_back(&self) {
        self.navigation.navigate_back();
    }
}
