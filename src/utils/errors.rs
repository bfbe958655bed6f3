// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::EngineError;
use thiserror::Error;

/// 抓取流水线错误类型
///
/// 覆盖从请求校验到LLM输出解析的所有失败路径，
/// 由表示层统一映射为HTTP状态码
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// 请求参数缺失或非法
    #[error("{0}")]
    Validation(String),

    /// 数据源未产出任何文本
    #[error("{0}")]
    NotFound(String),

    /// 必需能力不可用（例如LLM凭证未配置）
    #[error("Backend configuration error: {0}")]
    Configuration(String),

    /// 数据源读取失败
    #[error("Failed to read source: {0}")]
    SourceRead(String),

    /// LLM调用失败
    #[error("LLM invocation failed: {0}")]
    ModelInvocation(String),

    /// LLM输出不是合法JSON
    #[error("Malformed model output: {0}")]
    MalformedModelOutput(String),

    /// 浏览器引擎错误
    #[error("Browser engine error: {0}")]
    Engine(#[from] EngineError),
}
