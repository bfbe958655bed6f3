// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::scrape_request::{ScrapeRequestDto, SourceType};
use crate::application::dto::scrape_response::{MetaDataDto, ScrapeResponseDto};
use crate::domain::services::crawl_service::CrawlServiceTrait;
use crate::domain::services::extraction_service::ExtractionServiceTrait;
use crate::domain::services::pdf_service::PdfServiceTrait;
use crate::utils::errors::ScrapeError;
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use validator::Validate;

/// 预设名到规范字段名的固定映射表
///
/// 无法识别的预设名被静默忽略
const PRESET_FIELDS: &[(&str, &str)] = &[
    ("phone", "phone_numbers"),
    ("email", "emails"),
    ("address", "physical_address"),
    ("socials", "social_media_links"),
];

/// 抓取用例
///
/// 编排一次完整的提取请求：选择数据源路径、获取原始文本、
/// 调用字段提取并组装响应信封。所有依赖在启动时注入，
/// 测试中可用桩实现替换
pub struct ScrapeUseCase {
    crawl_service: Arc<dyn CrawlServiceTrait>,
    pdf_service: Arc<dyn PdfServiceTrait>,
    extraction_service: Arc<dyn ExtractionServiceTrait>,
}

impl ScrapeUseCase {
    pub fn new(
        crawl_service: Arc<dyn CrawlServiceTrait>,
        pdf_service: Arc<dyn PdfServiceTrait>,
        extraction_service: Arc<dyn ExtractionServiceTrait>,
    ) -> Self {
        Self {
            crawl_service,
            pdf_service,
            extraction_service,
        }
    }

    /// 提取流水线是否就绪
    pub fn is_ready(&self) -> bool {
        self.extraction_service.is_ready()
    }

    /// 处理一次抓取请求
    ///
    /// # 参数
    ///
    /// * `dto` - 抓取请求
    ///
    /// # 返回值
    ///
    /// * `Ok(ScrapeResponseDto)` - 数据行和元数据
    /// * `Err(ScrapeError)` - 按错误分类映射为HTTP状态码
    pub async fn handle(&self, dto: ScrapeRequestDto) -> Result<ScrapeResponseDto, ScrapeError> {
        let started = Instant::now();

        dto.validate()
            .map_err(|e| ScrapeError::Validation(e.to_string()))?;

        // Merge presets with custom fields
        let fields = resolve_fields(&dto.fields, &dto.presets);
        if fields.is_empty() {
            return Err(ScrapeError::Validation(
                "No extraction fields provided.".to_string(),
            ));
        }

        // 1. Get text based on source type
        let scraped_text = match dto.source_type {
            SourceType::Pdf => {
                let path = dto
                    .pdf_path
                    .as_deref()
                    .filter(|p| !p.is_empty())
                    .ok_or_else(|| {
                        ScrapeError::Validation("pdf_path is required for PDF source.".to_string())
                    })?;
                info!("Extracting PDF: {}", path);
                self.pdf_service.extract_text(path).await?
            }
            SourceType::Web => {
                let url = dto
                    .url
                    .as_deref()
                    .filter(|u| !u.is_empty())
                    .ok_or_else(|| {
                        ScrapeError::Validation("url is required for Web source.".to_string())
                    })?;
                info!("Crawling Web: {} (max pages: {})", url, dto.max_pages);
                self.crawl_service.crawl_site(url, dto.max_pages).await?
            }
        };

        if scraped_text.trim().is_empty() {
            warn!("No content found for {:?} source", dto.source_type);
            return Err(ScrapeError::NotFound(
                "No content could be extracted.".to_string(),
            ));
        }

        // 2. Extract fields using the LLM
        info!("Starting LLM extraction for fields: {:?}", fields);
        let outcome = self
            .extraction_service
            .extract_fields(&scraped_text, &fields)
            .await?;

        let data = normalize_rows(outcome.extracted_data);

        Ok(ScrapeResponseDto {
            data,
            meta: MetaDataDto {
                usage: outcome.usage,
                model: outcome.model,
                duration: started.elapsed().as_secs_f64(),
                timestamp: epoch_seconds(),
            },
        })
    }
}

/// 解析最终字段列表
///
/// 显式字段在前、顺序保留，随后按提供顺序追加可识别预设映射出的
/// 字段名。重复字段名保留，不做去重
pub fn resolve_fields(fields: &[String], presets: &[String]) -> Vec<String> {
    let mut resolved: Vec<String> = fields.to_vec();
    for preset in presets {
        if let Some((_, mapped)) = PRESET_FIELDS
            .iter()
            .find(|(name, _)| *name == preset.as_str())
        {
            resolved.push((*mapped).to_string());
        }
    }
    resolved
}

/// 将提取结果归一化为数据行序列
///
/// 单个对象包装为单元素序列；序列原样透传（非对象元素包装进
/// raw_result）；标量包装为带raw_result键的单元素序列
fn normalize_rows(extracted: Value) -> Vec<Value> {
    match extracted {
        Value::Object(_) => vec![extracted],
        Value::Array(items) => items
            .into_iter()
            .map(|item| {
                if item.is_object() {
                    item
                } else {
                    json!({ "raw_result": stringify(&item) })
                }
            })
            .collect(),
        other => vec![json!({ "raw_result": stringify(&other) })],
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// 当前Unix时间戳（秒，浮点）
fn epoch_seconds() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
