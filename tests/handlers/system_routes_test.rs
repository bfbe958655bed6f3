// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers;
use axum_test::TestServer;
use serde_json::{json, Value};

#[tokio::test]
async fn test_health_reports_ready_modules() {
    let app = helpers::app("", "", json!({}));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["modules_loaded"], true);
    assert!(body["timestamp"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn test_health_reports_unconfigured_modules() {
    let app = helpers::unconfigured_app("");
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["modules_loaded"], false);
}

#[tokio::test]
async fn test_root_banner() {
    let app = helpers::app("", "", json!({}));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Scraping Agent API is online");
    assert_eq!(body["docs"], "/docs");
}
