use std::fmt;

/// Hex color literal, `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub &'static str);

pub const RELIABLE_COLOR: Color = Color("#22C55E");
pub const CAUTION_COLOR: Color = Color("#F59E0B");
pub const MISLEADING_COLOR: Color = Color("#EF4444");
pub const FALLBACK_COLOR: Color = Color("#6B7280");

impl Color {
    pub fn hex(&self) -> &'static str {
        self.0
    }

    /// Low-alpha variant (`#RRGGBB15`) painted behind the summary.
    pub fn tint(&self) -> String {
        format!("{}15", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub fn color_for(verdict: &str) -> Color {
    match verdict {
        "reliable" => RELIABLE_COLOR,
        "caution" => CAUTION_COLOR,
        "misleading" => MISLEADING_COLOR,
        _ => FALLBACK_COLOR,
    }
}

pub fn label_for(verdict: &str) -> &'static str {
    match verdict {
        "reliable" => "内容可信",
        "caution" => "需要谨慎",
        "misleading" => "可能不实",
        _ => "未知",
    }
}

/// Advice block shown under the analysis.
///
/// Unlike color and label there is no fallback here: an unrecognized code
/// renders no guidance at all.
pub fn guidance_for(verdict: &str) -> Option<&'static str> {
    match verdict {
        "reliable" => Some("这篇文章看起来比较可信，但仍建议多方核实重要信息。"),
        "caution" => Some(
            "这篇文章存在一些疑点，建议：\n• 不要轻易转发\n• 不要根据文章内容购买产品\n• 如有健康问题，请咨询医生",
        ),
        "misleading" => Some(
            "这篇文章可能包含虚假信息，强烈建议：\n• 不要相信文章内容\n• 不要转发给他人\n• 不要购买推荐的产品\n• 如已转发，请告知收到的人",
        ),
        _ => None,
    }
}
