//! 查询协调器 (Concurrent Fetch Coordinator)
//!
//! 每个候选详情页对应一个独立 Worker 任务。协调器负责错开启动、
//! 轮询监督与协作式取消；任何单个候选的失败都不会中断整批查询。

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};
use url::Url;

use crate::core::config::LookupConfig;
use crate::core::error::{MetadataError, Result};
use crate::core::model::{BookRecord, Identity};
use crate::host::browser::{Browser, HttpBrowser};
use crate::host::cache::{CoverCache, MemoryCoverCache};
use crate::site::{build_query, extract_candidates, fetch_page};

use super::worker::Worker;

/// PWN 元数据源
pub struct PwnSource {
    pub(crate) config: Arc<LookupConfig>,
    pub(crate) browser: Arc<dyn Browser>,
    pub(crate) cache: Arc<dyn CoverCache>,
    pub(crate) base: Url,
}

impl PwnSource {
    /// 用注入的协作者创建元数据源
    pub fn new(
        config: Arc<LookupConfig>,
        browser: Arc<dyn Browser>,
        cache: Arc<dyn CoverCache>,
    ) -> Result<Self> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| MetadataError::Parse(format!("invalid base URL: {e}")))?;
        Ok(Self {
            config,
            browser,
            cache,
            base,
        })
    }

    /// 使用默认配置、HTTP 客户端与进程内缓存创建
    pub fn with_defaults() -> Result<Self> {
        Self::new(
            Arc::new(LookupConfig::load()?),
            Arc::new(HttpBrowser::new()?),
            Arc::new(MemoryCoverCache::new()),
        )
    }

    /// 执行一次完整的元数据查询
    ///
    /// 永不向调用方抛出错误：查询失败只体现为零条结果加日志。
    /// 结果经由 `results` 通道交付，到达顺序不做任何保证。
    pub async fn identify(
        &self,
        identity: &Identity,
        results: flume::Sender<BookRecord>,
        abort: &CancellationToken,
        timeout: Duration,
    ) {
        if let Err(e) = self.run_identify(identity, results, abort, timeout).await {
            error!("{}", e);
        }
    }

    async fn run_identify(
        &self,
        identity: &Identity,
        results: flume::Sender<BookRecord>,
        abort: &CancellationToken,
        timeout: Duration,
    ) -> Result<()> {
        if identity.is_empty() {
            return Err(MetadataError::InsufficientInput);
        }

        let query = build_query(identity, &self.config.tokens, &self.config.base_url)
            .ok_or(MetadataError::InsufficientInput)?;

        info!("Using query: {} ({:?})", query.url, query.strategy);

        let html = fetch_page(&*self.browser, &query.url, timeout).await?;
        let candidates = extract_candidates(&html, &self.base);

        if abort.is_cancelled() {
            return Ok(());
        }

        let mut workers = JoinSet::new();
        for url in candidates {
            // 取消后停止派生新 Worker
            if abort.is_cancelled() {
                break;
            }

            let worker = Worker::new(
                url,
                results.clone(),
                self.browser.fork(),
                self.cache.clone(),
                self.config.cover_timeout(),
            );
            workers.spawn(worker.run());

            // 错开启动，避免对站点的瞬时并发冲击
            tokio::time::sleep(self.config.spawn_stagger()).await;
        }

        self.supervise(workers, abort).await;
        Ok(())
    }

    /// 轮询监督所有 Worker，直到全部结束或观察到取消
    ///
    /// 取消只是停止等待：已在途的 Worker 继续在后台运行到自然结束，
    /// 其结果能否赶上通道不做保证。
    async fn supervise(&self, mut workers: JoinSet<()>, abort: &CancellationToken) {
        while !workers.is_empty() {
            if abort.is_cancelled() {
                debug!("Abort observed, detaching {} running workers", workers.len());
                workers.detach_all();
                return;
            }

            match tokio::time::timeout(self.config.poll_interval(), workers.join_next()).await {
                Ok(Some(_)) => {}
                Ok(None) => return,
                // 本轮等待片耗尽，回头重查取消标志
                Err(_) => {}
            }
        }
    }
}
