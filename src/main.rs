// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Extension;
use extractrs::application::use_cases::scrape_use_case::ScrapeUseCase;
use extractrs::config::settings::Settings;
use extractrs::domain::services::crawl_service::CrawlService;
use extractrs::domain::services::extraction_service::ExtractionService;
use extractrs::domain::services::llm_service::LLMService;
use extractrs::domain::services::pdf_service::PdfService;
use extractrs::engines::chromium_engine::ChromiumEngine;
use extractrs::presentation::routes;
use extractrs::utils::telemetry;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting extractrs...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");
    if settings.llm.api_key.is_none() {
        warn!("LLM API key not configured; /api/scrape will fail until it is set");
    }

    // 3. Initialize engine and services
    let engine = Arc::new(ChromiumEngine::new(
        Duration::from_millis(settings.crawler.settle_delay_ms),
        Duration::from_secs(settings.crawler.request_timeout_secs),
    ));
    let crawl_service = Arc::new(CrawlService::new(engine, settings.crawler.max_text_bytes));
    let pdf_service = Arc::new(PdfService::new());
    let llm_service = Arc::new(LLMService::new(
        settings.llm.api_key.clone(),
        settings.llm.model.clone(),
        settings.llm.api_base_url.clone(),
    ));
    let extraction_service = Arc::new(ExtractionService::new(llm_service));

    // 4. Wire the scrape use case
    let use_case = Arc::new(ScrapeUseCase::new(
        crawl_service,
        pdf_service,
        extraction_service,
    ));

    // 5. Start HTTP server
    let app = routes::routes()
        .layer(Extension(use_case))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
