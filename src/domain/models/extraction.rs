// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::llm_service::TokenUsage;
use serde_json::Value;

/// 字段提取结果
///
/// LLM返回的结构化数据及其调用元信息
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    /// 提取出的数据：单个对象或对象序列
    pub extracted_data: Value,
    /// 令牌使用统计（模型上报，可能缺失）
    pub usage: Option<TokenUsage>,
    /// 模型标识
    pub model: String,
}
