use async_trait::async_trait;

/// Title and body of an alert or confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn empty_input() -> Self {
        Self::new("提示", "请先粘贴文章链接或输入文字内容")
    }

    pub fn clipboard_empty() -> Self {
        Self::new("提示", "剪贴板中没有内容")
    }

    pub fn clipboard_unreadable() -> Self {
        Self::new("错误", "无法读取剪贴板")
    }

    pub fn article_detected() -> Self {
        Self::new("检测到微信文章链接", "是否要分析这篇文章？")
    }

    pub fn analysis_failed(message: &str) -> Self {
        Self::new("分析失败", message)
    }
}

#[async_trait]
pub trait DialogPort: Send + Sync {
    /// Non-blocking: shows the notice and returns.
    fn alert(&self, notice: &Notice);

    /// Resolves once the user picks; `true` means go ahead.
    async fn confirm(&self, notice: &Notice) -> bool;
}
