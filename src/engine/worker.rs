//! 候选页 Worker
//!
//! 一个 Worker 处理一个候选详情页：抓取、解析、校验、缓存封面、
//! 发布记录。全部失败都在 `run` 边界截获并记入日志，
//! 单个坏候选不会影响同批其他 Worker。

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use crate::core::error::{MetadataError, Result};
use crate::core::model::BookRecord;
use crate::host::browser::Browser;
use crate::host::cache::CoverCache;
use crate::site::{extract_fields, fetch_page};

/// 单个候选页的抓取任务
pub struct Worker {
    url: String,
    results: flume::Sender<BookRecord>,
    browser: Arc<dyn Browser>,
    cache: Arc<dyn CoverCache>,
    timeout: Duration,
}

impl Worker {
    pub fn new(
        url: String,
        results: flume::Sender<BookRecord>,
        browser: Arc<dyn Browser>,
        cache: Arc<dyn CoverCache>,
        timeout: Duration,
    ) -> Self {
        Self {
            url,
            results,
            browser,
            cache,
            timeout,
        }
    }

    /// 执行任务，消费自身；错误就地降级为日志
    pub async fn run(self) {
        if let Err(e) = self.process().await {
            error!("Worker failed to fetch and parse url {}: {}", self.url, e);
        }
    }

    async fn process(&self) -> Result<()> {
        info!("Worker parsing url: {}", self.url);

        let html = fetch_page(&*self.browser, &self.url, self.timeout).await?;
        let fields = extract_fields(&html)?;

        let cover_url = fields.cover_url.clone();
        let mut record = fields.into_record()?;

        if let (Some(isbn), Some(cover)) = (record.isbn.as_deref(), cover_url.as_deref()) {
            self.cache.store(isbn, cover);
        }

        record.cleanup();

        self.results
            .send(record)
            .map_err(|e| MetadataError::Channel(e.to_string()))?;

        Ok(())
    }
}
