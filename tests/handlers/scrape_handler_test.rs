// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

/// 端到端：桩爬虫返回固定文本，桩提取器返回固定结果
#[tokio::test]
async fn test_scrape_web_end_to_end() {
    let app = helpers::app(
        "Example Domain. This domain is for use in examples.",
        "",
        json!({"title": null}),
    );
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/scrape")
        .json(&json!({
            "url": "https://example.com",
            "fields": ["title"],
            "max_pages": 1
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"], json!([{"title": null}]));
    assert_eq!(body["meta"]["usage"]["total_tokens"], 42);
    assert_eq!(body["meta"]["model"], "gpt-4o-mini");
    assert!(body["meta"]["duration"].as_f64().unwrap() >= 0.0);
    assert!(body["meta"]["timestamp"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn test_scrape_pdf_end_to_end() {
    let app = helpers::app("", "Invoice #42 issued to Acme Corp", json!({"invoice": "42"}));
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/scrape")
        .json(&json!({
            "source_type": "PDF",
            "pdf_path": "/data/invoice.pdf",
            "fields": ["invoice"]
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"], json!([{"invoice": "42"}]));
}

#[tokio::test]
async fn test_empty_crawl_text_returns_404() {
    let app = helpers::app("", "", json!({"title": null}));
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/scrape")
        .json(&json!({
            "url": "https://example.com",
            "fields": ["title"]
        }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["detail"], "No content could be extracted.");
}

#[tokio::test]
async fn test_missing_url_returns_400() {
    let app = helpers::app("some text", "", json!({"title": null}));
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/scrape")
        .json(&json!({"fields": ["title"]}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["detail"], "url is required for Web source.");
}

#[tokio::test]
async fn test_missing_pdf_path_returns_400() {
    let app = helpers::app("", "pdf text", json!({"title": null}));
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/scrape")
        .json(&json!({"source_type": "PDF", "fields": ["title"]}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["detail"], "pdf_path is required for PDF source.");
}

#[tokio::test]
async fn test_no_resolvable_fields_returns_400() {
    let app = helpers::app("some text", "", json!({}));
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/scrape")
        .json(&json!({
            "url": "https://example.com",
            "presets": ["unknown_preset"]
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["detail"], "No extraction fields provided.");
}

#[tokio::test]
async fn test_preset_expansion_feeds_extraction() {
    // Presets alone satisfy the field requirement
    let app = helpers::app(
        "Call us at 555-0100",
        "",
        json!({"phone_numbers": ["555-0100"]}),
    );
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/scrape")
        .json(&json!({
            "url": "https://example.com",
            "presets": ["phone"]
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"], json!([{"phone_numbers": ["555-0100"]}]));
}

#[tokio::test]
async fn test_sequence_result_passes_through() {
    let app = helpers::app("listing page", "", json!([{"a": 1}, {"a": 2}]));
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/scrape")
        .json(&json!({
            "url": "https://example.com",
            "fields": ["a"]
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"], json!([{"a": 1}, {"a": 2}]));
}

#[tokio::test]
async fn test_configuration_error_returns_500() {
    let app = helpers::unconfigured_app("some text");
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/scrape")
        .json(&json!({
            "url": "https://example.com",
            "fields": ["title"]
        }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .contains("configuration error"));
}
