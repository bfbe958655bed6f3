// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// 数据源类型
///
/// 线格式取值为 "Web" 或 "PDF"；任何无法识别的取值按Web处理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum SourceType {
    #[serde(rename = "PDF")]
    Pdf,
    #[default]
    Web,
}

impl<'de> Deserialize<'de> for SourceType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Any value other than "PDF" falls through to Web
        let value = String::deserialize(deserializer)?;
        Ok(if value == "PDF" {
            SourceType::Pdf
        } else {
            SourceType::Web
        })
    }
}

/// 抓取请求数据传输对象
///
/// 封装一次结构化提取请求：数据源定位、字段列表和爬取预算
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct ScrapeRequestDto {
    /// 网页来源的起始URL
    pub url: Option<String>,
    /// PDF来源的文件路径
    pub pdf_path: Option<String>,
    /// 数据源类型，默认Web
    #[serde(default)]
    pub source_type: SourceType,
    /// 请求提取的字段名列表
    #[serde(default)]
    pub fields: Vec<String>,
    /// 爬取页面数上限
    #[serde(default = "default_max_pages")]
    #[validate(range(min = 1, max = 100))]
    pub max_pages: u32,
    /// 预设字段快捷方式
    #[serde(default)]
    pub presets: Vec<String>,
}

fn default_max_pages() -> u32 {
    5
}
