// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use axum::{Extension, Router};
use extractrs::application::use_cases::scrape_use_case::ScrapeUseCase;
use extractrs::domain::models::extraction::ExtractionOutcome;
use extractrs::domain::services::crawl_service::CrawlServiceTrait;
use extractrs::domain::services::extraction_service::ExtractionServiceTrait;
use extractrs::domain::services::llm_service::TokenUsage;
use extractrs::domain::services::pdf_service::PdfServiceTrait;
use extractrs::presentation::routes;
use extractrs::utils::errors::ScrapeError;
use serde_json::Value;
use std::sync::Arc;

/// 返回固定文本的桩爬虫
pub struct StubCrawler {
    pub text: String,
}

#[async_trait]
impl CrawlServiceTrait for StubCrawler {
    async fn crawl_site(&self, _start_url: &str, _max_pages: u32) -> Result<String, ScrapeError> {
        Ok(self.text.clone())
    }
}

/// 返回固定文本的桩PDF读取器
pub struct StubReader {
    pub text: String,
}

#[async_trait]
impl PdfServiceTrait for StubReader {
    async fn extract_text(&self, _path: &str) -> Result<String, ScrapeError> {
        Ok(self.text.clone())
    }
}

/// 返回固定提取结果的桩提取器
pub struct StubExtractor {
    pub data: Value,
}

#[async_trait]
impl ExtractionServiceTrait for StubExtractor {
    async fn extract_fields(
        &self,
        _text: &str,
        _fields: &[String],
    ) -> Result<ExtractionOutcome, ScrapeError> {
        Ok(ExtractionOutcome {
            extracted_data: self.data.clone(),
            usage: Some(TokenUsage {
                prompt_tokens: 30,
                completion_tokens: 12,
                total_tokens: 42,
            }),
            model: "gpt-4o-mini".to_string(),
        })
    }

    fn is_ready(&self) -> bool {
        true
    }
}

/// 凭证缺失的桩提取器
pub struct UnconfiguredExtractor;

#[async_trait]
impl ExtractionServiceTrait for UnconfiguredExtractor {
    async fn extract_fields(
        &self,
        _text: &str,
        _fields: &[String],
    ) -> Result<ExtractionOutcome, ScrapeError> {
        Err(ScrapeError::Configuration(
            "LLM API key not configured".to_string(),
        ))
    }

    fn is_ready(&self) -> bool {
        false
    }
}

/// 以桩服务装配完整应用路由
pub fn app(crawler_text: &str, pdf_text: &str, extractor_data: Value) -> Router {
    let use_case = Arc::new(ScrapeUseCase::new(
        Arc::new(StubCrawler {
            text: crawler_text.to_string(),
        }),
        Arc::new(StubReader {
            text: pdf_text.to_string(),
        }),
        Arc::new(StubExtractor {
            data: extractor_data,
        }),
    ));

    routes::routes().layer(Extension(use_case))
}

/// 以未配置的提取器装配应用路由
pub fn unconfigured_app(crawler_text: &str) -> Router {
    let use_case = Arc::new(ScrapeUseCase::new(
        Arc::new(StubCrawler {
            text: crawler_text.to_string(),
        }),
        Arc::new(StubReader {
            text: String::new(),
        }),
        Arc::new(UnconfiguredExtractor),
    ));

    routes::routes().layer(Extension(use_case))
}
