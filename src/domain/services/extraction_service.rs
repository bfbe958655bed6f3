// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::extraction::ExtractionOutcome;
use crate::domain::services::llm_service::{LLMError, LLMServiceTrait};
use crate::utils::errors::ScrapeError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// 送入提示词的文本上限（字符数）
///
/// 超长文档从尾部静默截断，属于成本与精度的折中
pub const MAX_TEXT_CHARS: usize = 12_000;

const SYSTEM_DIRECTIVE: &str = "You are a data extraction engine. \
Extract ONLY factual information from the website text. \
If a field is not present, return null.";

#[async_trait]
pub trait ExtractionServiceTrait: Send + Sync {
    /// 从文本中提取请求的字段
    async fn extract_fields(
        &self,
        text: &str,
        fields: &[String],
    ) -> Result<ExtractionOutcome, ScrapeError>;

    /// 提取能力是否就绪（LLM凭证已配置）
    fn is_ready(&self) -> bool;
}

/// 提取服务
///
/// 负责构造字段提取提示词、调用LLM并解析严格JSON输出
pub struct ExtractionService {
    llm: Arc<dyn LLMServiceTrait>,
}

impl ExtractionService {
    pub fn new(llm: Arc<dyn LLMServiceTrait>) -> Self {
        Self { llm }
    }

    fn build_user_prompt(text: &str, fields: &[String]) -> String {
        let field_list = fields.join(", ");
        format!(
            "Extract the following fields from the website text:\n\n\
            FIELDS:\n{field_list}\n\n\
            RULES:\n\
            - Return STRICT JSON\n\
            - Keys must exactly match field names\n\
            - No explanations\n\
            - If unsure, use null\n\n\
            WEBSITE TEXT:\n{text}"
        )
    }
}

#[async_trait]
impl ExtractionServiceTrait for ExtractionService {
    /// 提取字段
    ///
    /// # 参数
    /// * `text` - 来源文本（网页可见文本或PDF文本）
    /// * `fields` - 请求的字段名列表，顺序保留，允许重复
    ///
    /// # 返回值
    /// * `Ok(ExtractionOutcome)` - 解析后的数据、令牌使用情况和模型标识
    /// * `Err(ScrapeError)` - 凭证缺失、调用失败或输出不是合法JSON
    async fn extract_fields(
        &self,
        text: &str,
        fields: &[String],
    ) -> Result<ExtractionOutcome, ScrapeError> {
        let excerpt = truncate_chars(text, MAX_TEXT_CHARS);
        let user_prompt = Self::build_user_prompt(excerpt, fields);

        let completion = self
            .llm
            .complete(SYSTEM_DIRECTIVE, &user_prompt)
            .await
            .map_err(|e| match e {
                LLMError::NotConfigured => ScrapeError::Configuration(e.to_string()),
                other => ScrapeError::ModelInvocation(other.to_string()),
            })?;

        // Clean up potential markdown code blocks before parsing
        let clean_content = completion
            .content
            .trim()
            .trim_start_matches("```json")
            .trim_start_matches("```")
            .trim_end_matches("```");

        let extracted_data = serde_json::from_str::<Value>(clean_content)
            .map_err(|e| ScrapeError::MalformedModelOutput(e.to_string()))?;

        Ok(ExtractionOutcome {
            extracted_data,
            usage: Some(completion.usage),
            model: self.llm.model().to_string(),
        })
    }

    fn is_ready(&self) -> bool {
        self.llm.is_configured()
    }
}

/// 按字符数截断文本，保持UTF-8边界
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
