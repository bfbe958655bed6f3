// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// 令牌使用统计
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// LLM调用结果
#[derive(Debug, Clone)]
pub struct LLMCompletion {
    /// 模型返回的文本内容
    pub content: String,
    /// 令牌使用统计
    pub usage: TokenUsage,
}

/// LLM服务错误类型
#[derive(Error, Debug)]
pub enum LLMError {
    /// API密钥未配置
    #[error("LLM API key not configured")]
    NotConfigured,
    /// 网络请求失败
    #[error("LLM API request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// API返回非成功状态码
    #[error("LLM API returned error: {status} - {body}")]
    Api { status: u16, body: String },
    /// 响应体结构不符合预期
    #[error("Invalid response format from LLM API")]
    InvalidResponse,
}

#[async_trait]
pub trait LLMServiceTrait: Send + Sync {
    /// 以固定的系统指令和用户消息调用模型，返回原始文本输出
    async fn complete(&self, system: &str, user: &str) -> Result<LLMCompletion, LLMError>;

    /// 模型标识
    fn model(&self) -> &str;

    /// 凭证是否已配置
    fn is_configured(&self) -> bool;
}

/// LLM服务 - 处理与LLM提供商的交互
///
/// # 配置
///
/// 通过环境变量进行配置：
/// - `LLM_API_KEY` - LLM API密钥
/// - `LLM_MODEL` - 使用的模型名称（默认为 gpt-4o-mini）
/// - `LLM_API_BASE_URL` - LLM API基础URL
pub struct LLMService {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    api_base_url: String,
}

#[async_trait]
impl LLMServiceTrait for LLMService {
    async fn complete(&self, system: &str, user: &str) -> Result<LLMCompletion, LLMError> {
        LLMService::complete(self, system, user).await
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl LLMService {
    pub fn new(api_key: Option<String>, model: String, api_base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            api_base_url,
        }
    }

    /// 调用聊天补全API
    ///
    /// # 参数
    /// * `system` - 系统指令
    /// * `user` - 用户消息
    ///
    /// # 返回值
    /// * `Ok(LLMCompletion)` - 模型输出和令牌使用情况
    /// * `Err(LLMError)` - 凭证缺失、网络失败或响应结构异常
    ///
    /// 每个请求只尝试一次，不做重试
    pub async fn complete(&self, system: &str, user: &str) -> Result<LLMCompletion, LLMError> {
        let api_key = self.api_key.as_ref().ok_or(LLMError::NotConfigured)?;

        let request_body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user }
            ],
            "temperature": 0.0
        });

        let url = format!("{}/chat/completions", self.api_base_url);
        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(LLMError::Api { status, body });
        }

        let body: Value = response.json().await?;

        let usage = if let Some(usage_val) = body.get("usage") {
            TokenUsage {
                prompt_tokens: usage_val["prompt_tokens"].as_u64().unwrap_or(0) as u32,
                completion_tokens: usage_val["completion_tokens"].as_u64().unwrap_or(0) as u32,
                total_tokens: usage_val["total_tokens"].as_u64().unwrap_or(0) as u32,
            }
        } else {
            TokenUsage::default()
        };

        let content = body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(LLMError::InvalidResponse)?
            .to_string();

        Ok(LLMCompletion { content, usage })
    }
}
