// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, Json};
use std::sync::Arc;

use crate::application::dto::scrape_request::ScrapeRequestDto;
use crate::application::dto::scrape_response::ScrapeResponseDto;
use crate::application::use_cases::scrape_use_case::ScrapeUseCase;
use crate::presentation::errors::ApiError;

/// 抓取端点处理器
///
/// 抓取网站或PDF并通过LLM提取结构化数据
pub async fn scrape(
    Extension(use_case): Extension<Arc<ScrapeUseCase>>,
    Json(payload): Json<ScrapeRequestDto>,
) -> Result<Json<ScrapeResponseDto>, ApiError> {
    let response = use_case.handle(payload).await?;
    Ok(Json(response))
}
