//! 网络客户端抽象
//!
//! 宿主注入的 HTTP 能力。`fork` 产出独立的客户端实例，
//! 保证并发 Worker 之间不共享任何可变连接状态。

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::core::error::Result;

/// 面向站点的 HTTP 客户端接口
#[async_trait]
pub trait Browser: Send + Sync {
    /// 执行单次 GET 并按响应声明的字符集解码为文本
    async fn get_text(&self, url: &str, timeout: Duration) -> Result<String>;

    /// 执行单次 GET，返回原始字节 (封面下载)
    async fn get_bytes(&self, url: &str, timeout: Duration) -> Result<Bytes>;

    /// 派生一个独立的客户端实例 (独立连接池)
    fn fork(&self) -> Arc<dyn Browser>;
}

/// 基于 reqwest 的生产实现
pub struct HttpBrowser {
    client: reqwest::Client,
}

impl HttpBrowser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: Self::build_client()?,
        })
    }

    /// 构建底层的 HTTP 客户端
    fn build_client() -> Result<reqwest::Client> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("pwn-metadata/", env!("CARGO_PKG_VERSION")))
            // 站点依赖会话 cookie，搜索页与详情页要在同一会话内抓取
            .cookie_store(true)
            .pool_max_idle_per_host(8)
            .tcp_nodelay(true)
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(client)
    }
}

#[async_trait]
impl Browser for HttpBrowser {
    async fn get_text(&self, url: &str, timeout: Duration) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.text().await?)
    }

    async fn get_bytes(&self, url: &str, timeout: Duration) -> Result<Bytes> {
        let resp = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.bytes().await?)
    }

    fn fork(&self) -> Arc<dyn Browser> {
        // 构建失败时回退到共享客户端
        let client = Self::build_client().unwrap_or_else(|_| self.client.clone());
        Arc::new(HttpBrowser { client })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_with_cookie_jar() {
        assert!(HttpBrowser::new().is_ok());
    }
}
