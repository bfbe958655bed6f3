// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 浏览器启动失败
    #[error("Browser launch failed: {0}")]
    Launch(String),
    /// 页面导航失败
    #[error("Navigation failed: {0}")]
    Navigation(String),
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 浏览器引擎
///
/// 每次爬取开启一个独立的浏览器会话，会话结束时无条件释放，
/// 避免泄漏操作系统级浏览器进程
#[async_trait]
pub trait BrowserEngine: Send + Sync {
    /// 启动一个新的浏览器会话
    async fn start_session(&self) -> Result<Box<dyn BrowserSession>, EngineError>;
}

/// 浏览器会话
///
/// 单次爬取范围内的页面获取接口
#[async_trait]
pub trait BrowserSession: Send {
    /// 导航到指定URL并返回渲染后的HTML
    ///
    /// 导航完成后观察固定的等待时间，让客户端渲染的内容有机会落盘
    async fn fetch_page(&mut self, url: &str) -> Result<String, EngineError>;

    /// 关闭会话并回收浏览器进程
    ///
    /// 尽力而为，不返回错误
    async fn shutdown(&mut self);
}
