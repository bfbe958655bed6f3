// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::ScrapeError;
use async_trait::async_trait;
use lopdf::Document;

#[async_trait]
pub trait PdfServiceTrait: Send + Sync {
    /// 提取PDF文件的全部文本
    async fn extract_text(&self, path: &str) -> Result<String, ScrapeError>;
}

/// PDF服务
///
/// 按页顺序提取文本并拼接。单页提取失败以空串代替，
/// 文件无法打开或解析时整体失败
pub struct PdfService;

impl PdfService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PdfServiceTrait for PdfService {
    async fn extract_text(&self, path: &str) -> Result<String, ScrapeError> {
        let path = path.to_string();
        // lopdf does blocking file IO
        tokio::task::spawn_blocking(move || read_pdf_text(&path))
            .await
            .map_err(|e| ScrapeError::SourceRead(format!("PDF read task failed: {e}")))?
    }
}

fn read_pdf_text(path: &str) -> Result<String, ScrapeError> {
    let document =
        Document::load(path).map_err(|e| ScrapeError::SourceRead(format!("Failed to read PDF: {e}")))?;

    let mut text = String::new();
    for page_number in document.get_pages().keys() {
        // A page that yields no text contributes an empty string
        text.push_str(&document.extract_text(&[*page_number]).unwrap_or_default());
    }

    Ok(text)
}
