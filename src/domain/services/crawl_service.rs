// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::{BrowserEngine, BrowserSession};
use crate::utils::errors::ScrapeError;
use crate::utils::text_processing;
use crate::utils::url_utils;
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

#[async_trait]
pub trait CrawlServiceTrait: Send + Sync {
    /// 从起始URL出发执行有界同域爬取，返回累积的可见文本
    async fn crawl_site(&self, start_url: &str, max_pages: u32) -> Result<String, ScrapeError>;
}

/// 单页访问结果
///
/// 页面级失败在爬取循环内部消化：跳过该页并继续，
/// 只留下日志，不向调用方冒泡
pub enum PageVisit {
    /// 页面获取成功
    Fetched { text: String, links: Vec<String> },
    /// 页面被跳过
    Skipped { reason: String },
}

/// 爬取服务
///
/// 广度优先遍历同域链接，直到页面预算耗尽或前沿队列为空。
/// 浏览器会话以单次爬取为作用域，结束时无条件释放
pub struct CrawlService {
    engine: Arc<dyn BrowserEngine>,
    /// 累积文本的防御性上限（字节）
    max_text_bytes: usize,
}

impl CrawlService {
    pub fn new(engine: Arc<dyn BrowserEngine>, max_text_bytes: usize) -> Self {
        Self {
            engine,
            max_text_bytes,
        }
    }

    async fn crawl_with_session(
        &self,
        session: &mut dyn BrowserSession,
        start_url: &str,
        max_pages: u32,
    ) -> String {
        let seed = Url::parse(start_url).ok();
        let mut visited: HashSet<String> = HashSet::new();
        let mut frontier: VecDeque<String> = VecDeque::new();
        frontier.push_back(start_url.to_string());
        let mut all_text = String::new();

        while visited.len() < max_pages as usize {
            let Some(url) = frontier.pop_front() else {
                break;
            };
            // Dedup happens at pop time; the frontier itself may hold repeats
            if visited.contains(&url) {
                continue;
            }
            visited.insert(url.clone());
            debug!("Scraping: {}", url);

            match Self::visit_page(session, &url).await {
                PageVisit::Fetched { text, links } => {
                    if !text.is_empty() {
                        all_text.push('\n');
                        all_text.push_str(&text);
                    }
                    if all_text.len() >= self.max_text_bytes {
                        let mut cut = self.max_text_bytes;
                        while !all_text.is_char_boundary(cut) {
                            cut -= 1;
                        }
                        all_text.truncate(cut);
                        debug!("Accumulated text cap reached, stopping crawl early");
                        break;
                    }
                    if let Some(seed_url) = &seed {
                        for link in links {
                            let on_domain = Url::parse(&link)
                                .map(|u| url_utils::same_domain(seed_url, &u))
                                .unwrap_or(false);
                            if on_domain {
                                frontier.push_back(link);
                            }
                        }
                    }
                }
                PageVisit::Skipped { reason } => {
                    warn!("Page skipped ({}): {}", url, reason);
                }
            }
        }

        all_text
    }

    async fn visit_page(session: &mut dyn BrowserSession, url: &str) -> PageVisit {
        match session.fetch_page(url).await {
            Ok(html) => PageVisit::Fetched {
                text: text_processing::visible_text(&html),
                links: LinkDiscoverer::extract_links(&html, url),
            },
            Err(e) => PageVisit::Skipped {
                reason: e.to_string(),
            },
        }
    }
}

#[async_trait]
impl CrawlServiceTrait for CrawlService {
    /// 执行有界爬取
    ///
    /// # 参数
    ///
    /// * `start_url` - 种子URL，其网络位置决定同域判定
    /// * `max_pages` - 访问页面数上限
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 累积的可见文本，可能为空
    /// * `Err(ScrapeError)` - 浏览器会话启动失败
    async fn crawl_site(&self, start_url: &str, max_pages: u32) -> Result<String, ScrapeError> {
        let mut session = self.engine.start_session().await?;
        let text = self
            .crawl_with_session(session.as_mut(), start_url, max_pages)
            .await;
        // Teardown runs regardless of what the crawl produced
        session.shutdown().await;
        Ok(text)
    }
}

/// 链接发现器
///
/// 负责从HTML内容中提取出站链接
pub struct LinkDiscoverer;

impl LinkDiscoverer {
    /// 从HTML内容中按文档顺序提取链接
    ///
    /// 相对链接针对当前页面URL解析；忽略锚点、mailto和javascript链接；
    /// 仅保留http/https并去除fragment以便去重
    pub fn extract_links(html_content: &str, base_url: &str) -> Vec<String> {
        let Ok(selector) = Selector::parse("a") else {
            return Vec::new();
        };
        let Ok(base) = Url::parse(base_url) else {
            return Vec::new();
        };

        let fragment = Html::parse_document(html_content);
        let mut links = Vec::new();

        for element in fragment.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if href.starts_with('#')
                    || href.starts_with("mailto:")
                    || href.starts_with("javascript:")
                {
                    continue;
                }

                if let Ok(url) = url_utils::resolve_url(&base, href) {
                    if url.scheme() == "http" || url.scheme() == "https" {
                        let mut url_clean = url;
                        url_clean.set_fragment(None);
                        links.push(url_clean.to_string());
                    }
                }
            }
        }

        links
    }
}
