//! 封面 URL 缓存
//!
//! ISBN → 封面 URL 的共享映射。实现方必须保证并发读写安全，
//! Worker 与封面解析流程会同时访问。

use std::collections::HashMap;

use parking_lot::RwLock;

/// 宿主封面缓存接口
pub trait CoverCache: Send + Sync {
    /// 查询某 ISBN 已知的封面 URL
    fn lookup(&self, isbn: &str) -> Option<String>;

    /// 记录 ISBN 对应的封面 URL
    fn store(&self, isbn: &str, url: &str);
}

/// 进程内缓存实现
#[derive(Debug, Default)]
pub struct MemoryCoverCache {
    map: RwLock<HashMap<String, String>>,
}

impl MemoryCoverCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CoverCache for MemoryCoverCache {
    fn lookup(&self, isbn: &str) -> Option<String> {
        self.map.read().get(isbn).cloned()
    }

    fn store(&self, isbn: &str, url: &str) {
        self.map.write().insert(isbn.to_string(), url.to_string());
    }
}
