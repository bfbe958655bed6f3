// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::scrape_use_case::ScrapeUseCase;
use crate::presentation::handlers::scrape_handler;
use axum::{
    extract::Extension,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes() -> Router {
    let system_routes = Router::new()
        .route("/health", get(health_check))
        .route("/", get(root));

    let api_routes = Router::new().route("/api/scrape", post(scrape_handler::scrape));

    Router::new().merge(system_routes).merge(api_routes)
}

/// 健康检查端点
pub async fn health_check(Extension(use_case): Extension<Arc<ScrapeUseCase>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0,
        "modules_loaded": use_case.is_ready(),
    }))
}

/// 服务信息端点
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Scraping Agent API is online",
        "docs": "/docs",
    }))
}
