// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::utils::errors::ScrapeError;

/// API错误类型
///
/// 将领域错误映射为HTTP状态码和统一的错误响应体
#[derive(Debug)]
pub struct ApiError(pub ScrapeError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ScrapeError::Validation(_) => StatusCode::BAD_REQUEST,
            ScrapeError::NotFound(_) => StatusCode::NOT_FOUND,
            ScrapeError::Configuration(_)
            | ScrapeError::SourceRead(_)
            | ScrapeError::ModelInvocation(_)
            | ScrapeError::MalformedModelOutput(_)
            | ScrapeError::Engine(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let detail = self.0.to_string();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("Exception during processing: {}", detail);
        } else {
            warn!("Request rejected: {}", detail);
        }

        let body = Json(json!({ "detail": detail }));
        (status, body).into_response()
    }
}

impl From<ScrapeError> for ApiError {
    fn from(err: ScrapeError) -> Self {
        Self(err)
    }
}
