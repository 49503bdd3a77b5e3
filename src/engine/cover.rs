//! 封面解析 (Cover Resolver)
//!
//! 缓存优先：identity 携带 ISBN 且缓存命中时直接取图，
//! 完全跳过搜索管线；否则跑一次完整 identify，把收集到的记录
//! 按相关性排序后，取第一条缓存过封面 URL 的记录。

use std::time::Duration;

use bytes::Bytes;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::core::model::{BookRecord, Identity};
use crate::host::isbn::check_isbn;

use super::pipeline::PwnSource;

impl PwnSource {
    /// 解析并下载最匹配的封面，使用默认相关性键
    pub async fn download_cover(
        &self,
        identity: &Identity,
        abort: &CancellationToken,
        timeout: Duration,
    ) -> Option<Bytes> {
        self.download_cover_with_key(identity, abort, timeout, relevance_keygen(identity))
            .await
    }

    /// 解析并下载最匹配的封面
    ///
    /// `key` 由调用方提供，键值越小相关性越高。
    /// 任何阶段失败或观察到取消都降级为 None。
    pub async fn download_cover_with_key<K, O>(
        &self,
        identity: &Identity,
        abort: &CancellationToken,
        timeout: Duration,
        key: K,
    ) -> Option<Bytes>
    where
        K: Fn(&BookRecord) -> O,
        O: Ord,
    {
        let mut cached_url = identity
            .isbn
            .as_deref()
            .and_then(check_isbn)
            .and_then(|isbn| self.cache.lookup(&isbn));

        if cached_url.is_none() {
            info!("No cached cover found, running identify");

            let (tx, rx) = flume::unbounded();
            self.identify(identity, tx, abort, timeout).await;

            if abort.is_cancelled() {
                return None;
            }

            let mut records: Vec<BookRecord> = rx.try_iter().collect();
            records.sort_by(|a, b| key(a).cmp(&key(b)));

            cached_url = records
                .iter()
                .filter_map(|r| r.isbn.as_deref())
                .find_map(|isbn| self.cache.lookup(isbn));
        }

        let Some(url) = cached_url else {
            info!("No cover found.");
            return None;
        };

        if abort.is_cancelled() {
            return None;
        }

        info!("Downloading cover from: {}", url);

        match self.browser.get_bytes(&url, timeout).await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!("Failed to download cover from {}: {}", url, e);
                None
            }
        }
    }
}

/// 默认相关性键：ISBN 精确命中 > 标题命中 > 作者命中
///
/// 代替宿主的 keygen；键为三元组，逐项 0 表示命中。
pub fn relevance_keygen(identity: &Identity) -> impl Fn(&BookRecord) -> (u8, u8, u8) + '_ {
    let wanted_isbn = identity.isbn.as_deref().and_then(check_isbn);

    move |record| {
        let isbn_miss = match (&wanted_isbn, &record.isbn) {
            (Some(wanted), Some(found)) if wanted == found => 0,
            _ => 1,
        };

        let title_miss = match &identity.title {
            Some(title) if title.trim().eq_ignore_ascii_case(record.title.trim()) => 0,
            _ => 1,
        };

        let author_miss = if identity
            .authors
            .iter()
            .any(|a| record.authors.iter().any(|b| a.eq_ignore_ascii_case(b)))
        {
            0
        } else {
            1
        };

        (isbn_miss, title_miss, author_miss)
    }
}
