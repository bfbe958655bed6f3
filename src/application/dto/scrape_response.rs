// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::llm_service::TokenUsage;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 抓取响应数据传输对象
///
/// 结构化提取结果及其调用元数据
#[derive(Debug, Deserialize, Serialize)]
pub struct ScrapeResponseDto {
    /// 提取出的数据行，每行是字段到取值的映射
    pub data: Vec<Value>,
    /// 调用元数据
    pub meta: MetaDataDto,
}

/// 响应元数据
#[derive(Debug, Deserialize, Serialize)]
pub struct MetaDataDto {
    /// 令牌使用统计（模型上报，可能缺失）
    pub usage: Option<TokenUsage>,
    /// 模型标识
    pub model: String,
    /// 请求处理耗时（秒）
    pub duration: f64,
    /// 响应生成时刻（Unix时间戳，秒）
    pub timestamp: f64,
}
