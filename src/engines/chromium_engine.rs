// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::{BrowserEngine, BrowserSession, EngineError};
use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::warn;

/// Chromium引擎
///
/// 基于chromiumoxide的无头浏览器引擎。每次爬取启动一个独立的
/// 浏览器进程，爬取结束时由调用方关闭会话
pub struct ChromiumEngine {
    /// 导航后的固定等待时间，等待动态内容渲染
    settle_delay: Duration,
    /// CDP请求超时时间
    request_timeout: Duration,
}

impl ChromiumEngine {
    pub fn new(settle_delay: Duration, request_timeout: Duration) -> Self {
        Self {
            settle_delay,
            request_timeout,
        }
    }
}

#[async_trait]
impl BrowserEngine for ChromiumEngine {
    /// 启动无头浏览器会话
    ///
    /// # 返回值
    ///
    /// * `Ok(Box<dyn BrowserSession>)` - 新的浏览器会话
    /// * `Err(EngineError)` - 浏览器启动失败
    async fn start_session(&self) -> Result<Box<dyn BrowserSession>, EngineError> {
        let config = BrowserConfig::builder()
            .no_sandbox()
            .request_timeout(self.request_timeout)
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .build()
            .map_err(EngineError::Launch)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| EngineError::Launch(e.to_string()))?;

        // Drive browser events until the connection drops
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        Ok(Box::new(ChromiumSession {
            browser,
            handler_task,
            settle_delay: self.settle_delay,
        }))
    }
}

/// Chromium会话
///
/// 持有单次爬取的浏览器进程和事件处理任务
pub struct ChromiumSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    settle_delay: Duration,
}

#[async_trait]
impl BrowserSession for ChromiumSession {
    async fn fetch_page(&mut self, url: &str) -> Result<String, EngineError> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| EngineError::Other(e.to_string()))?;

        let navigated = page.goto(url).await;

        // Settle delay applies after navigation, before text extraction
        tokio::time::sleep(self.settle_delay).await;

        let content = match navigated {
            Ok(_) => page
                .content()
                .await
                .map_err(|e| EngineError::Other(e.to_string())),
            Err(e) => Err(EngineError::Navigation(e.to_string())),
        };

        if let Err(e) = page.close().await {
            warn!("Failed to close page for {}: {}", url, e);
        }

        content
    }

    async fn shutdown(&mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser cleanly: {}", e);
        }
        let _ = self.browser.wait().await;
        self.handler_task.abort();
    }
}
