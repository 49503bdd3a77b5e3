//! 配置管理 (Configuration Management)
//!
//! 负责 `pwn-metadata.toml` 的反序列化，支持默认值回退机制。
//! 所有站点与调度参数都集中于此，宿主也可以通过 Builder 直接构造。

use std::path::Path;
use std::time::Duration;

use bon::Builder;
use config::{Config, File};
use serde::Deserialize;

use crate::core::error::Result;

/// 一次元数据查询的全局配置
#[derive(Debug, Deserialize, Builder, Clone)]
pub struct LookupConfig {
    /// 站点基准 URL (用于镜像站点覆盖)
    #[serde(default = "default_base_url")]
    #[builder(default = default_base_url())]
    pub base_url: String,

    /// 搜索页请求超时 (秒)
    #[serde(default = "default_timeout_secs")]
    #[builder(default = default_timeout_secs())]
    pub timeout_secs: u64,

    /// 详情页 / 封面请求超时 (秒)
    #[serde(default = "default_cover_timeout_secs")]
    #[builder(default = default_cover_timeout_secs())]
    pub cover_timeout_secs: u64,

    /// Worker 启动间隔 (毫秒)，避免对站点瞬时并发冲击
    #[serde(default = "default_spawn_stagger_ms")]
    #[builder(default = default_spawn_stagger_ms())]
    pub spawn_stagger_ms: u64,

    /// 监督循环的轮询等待片 (毫秒)
    #[serde(default = "default_poll_interval_ms")]
    #[builder(default = default_poll_interval_ms())]
    pub poll_interval_ms: u64,

    /// 查询分词选项
    #[serde(default)]
    #[builder(default)]
    pub tokens: TokenConfig,
}

/// 标题 / 作者分词选项
#[derive(Debug, Deserialize, Builder, Clone)]
pub struct TokenConfig {
    /// 丢弃冒号之后的副标题段
    #[serde(default = "default_strip_subtitle")]
    #[builder(default = default_strip_subtitle())]
    pub strip_subtitle: bool,

    /// 丢弃连接词 (and / the / ...)
    #[serde(default)]
    #[builder(default)]
    pub strip_joiners: bool,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            strip_subtitle: true,
            strip_joiners: false,
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            cover_timeout_secs: default_cover_timeout_secs(),
            spawn_stagger_ms: default_spawn_stagger_ms(),
            poll_interval_ms: default_poll_interval_ms(),
            tokens: TokenConfig::default(),
        }
    }
}

fn default_strip_subtitle() -> bool {
    true
}
fn default_base_url() -> String {
    "https://ksiegarnia.pwn.pl".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_cover_timeout_secs() -> u64 {
    20
}
fn default_spawn_stagger_ms() -> u64 {
    100
}
fn default_poll_interval_ms() -> u64 {
    200
}

impl LookupConfig {
    /// 从文件系统中加载并解析配置，文件缺失时回退到默认值
    pub fn load() -> Result<Self> {
        let config_path = Path::new("pwn-metadata.toml");
        let builder = Config::builder();

        let builder = if config_path.exists() {
            builder.add_source(File::from(config_path))
        } else {
            builder
        };

        let settings = builder.build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn cover_timeout(&self) -> Duration {
        Duration::from_secs(self.cover_timeout_secs)
    }

    pub fn spawn_stagger(&self) -> Duration {
        Duration::from_millis(self.spawn_stagger_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
