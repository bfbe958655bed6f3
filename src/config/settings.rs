// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、LLM和爬虫的所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// LLM配置
    pub llm: LlmSettings,
    /// 爬虫配置
    pub crawler: CrawlerSettings,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// LLM配置设置
#[derive(Debug, Deserialize, Clone)]
pub struct LlmSettings {
    /// API密钥，缺失时提取端点返回配置错误
    pub api_key: Option<String>,
    /// 模型名称
    pub model: String,
    /// API基础URL
    pub api_base_url: String,
}

/// 爬虫配置设置
#[derive(Debug, Deserialize)]
pub struct CrawlerSettings {
    /// 导航后的固定等待时间（毫秒），等待动态内容渲染
    pub settle_delay_ms: u64,
    /// 浏览器请求超时时间（秒）
    pub request_timeout_secs: u64,
    /// 累积文本的防御性上限（字节）
    pub max_text_bytes: usize,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从默认值、可选配置文件和环境变量加载配置
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            // Default LLM settings
            .set_default("llm.model", "gpt-4o-mini")?
            .set_default("llm.api_base_url", "https://api.openai.com/v1")?
            // Default crawler settings
            .set_default("crawler.settle_delay_ms", 2000)?
            .set_default("crawler.request_timeout_secs", 30)?
            .set_default("crawler.max_text_bytes", 2_000_000)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("EXTRACTRS").separator("__"));

        let mut settings: Settings = builder.build()?.try_deserialize()?;

        // Bare LLM_* variables take effect when the prefixed form is absent
        if settings.llm.api_key.is_none() {
            settings.llm.api_key = std::env::var("LLM_API_KEY").ok();
        }
        if let Ok(model) = std::env::var("LLM_MODEL") {
            settings.llm.model = model;
        }
        if let Ok(base_url) = std::env::var("LLM_API_BASE_URL") {
            settings.llm.api_base_url = base_url;
        }

        Ok(settings)
    }
}
