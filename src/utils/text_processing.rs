// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;

/// HTML清理器
///
/// 从渲染后的HTML中提取可见文本：去除脚本、样式和注释，
/// 剥离标签并解码HTML实体，逐行修剪空白
pub struct HtmlCleaner {
    script_regex: Regex,
    style_regex: Regex,
    comment_regex: Regex,
    tag_regex: Regex,
}

/// 全局HTML清理器实例
static HTML_CLEANER: Lazy<HtmlCleaner> = Lazy::new(HtmlCleaner::new);

impl HtmlCleaner {
    pub fn new() -> Self {
        Self {
            script_regex: Regex::new(r"(?is)<script\b[^>]*>.*?</script>").unwrap(),
            style_regex: Regex::new(r"(?is)<style\b[^>]*>.*?</style>").unwrap(),
            comment_regex: Regex::new(r"(?s)<!--.*?-->").unwrap(),
            tag_regex: Regex::new(r"(?s)<[^>]+>").unwrap(),
        }
    }

    /// 获取全局清理器实例
    pub fn global() -> &'static Self {
        &HTML_CLEANER
    }

    /// 提取可见文本
    ///
    /// 每个文本片段独占一行，空行被丢弃
    pub fn visible_text(&self, html: &str) -> String {
        let without_scripts = self.script_regex.replace_all(html, "");
        let without_styles = self.style_regex.replace_all(&without_scripts, "");
        let without_comments = self.comment_regex.replace_all(&without_styles, "");
        // Tags become line boundaries so adjacent elements don't merge into one word
        let stripped = self.tag_regex.replace_all(&without_comments, "\n");
        let decoded = html_escape::decode_html_entities(stripped.as_ref());

        decoded
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for HtmlCleaner {
    fn default() -> Self {
        Self::new()
    }
}

/// 提取HTML中的可见文本（便捷入口）
pub fn visible_text(html: &str) -> String {
    HtmlCleaner::global().visible_text(html)
}
