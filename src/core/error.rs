//! 错误处理体系 (Error Handling System)
//!
//! 定义领域相关的错误类型及全局 Result 别名。
//!
//! 传播策略：`InsufficientInput` 终止整次查询；其余错误均局限在
//! 单个候选页的 Worker 内部，记录日志后丢弃，不会越过协调器边界。

use thiserror::Error;

/// 全局错误定义
#[derive(Error, Debug)]
pub enum MetadataError {
    /// 元数据不足，无法构造查询 (终止整次查询，不发起任何网络请求)
    #[error("Insufficient metadata to construct query")]
    InsufficientInput,

    /// 单个 URL 的网络传输失败或超时
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// 页面缺失必需锚点，结构与预期不符
    #[error("Parsing error: {0}")]
    Parse(String),

    /// 解析完成后仍缺失必需元数据字段
    #[error("Insufficient metadata found: {0}")]
    Validation(String),

    /// 结果通道已被消费端关闭
    #[error("Result channel closed: {0}")]
    Channel(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// 全局 Result 别名
pub type Result<T> = std::result::Result<T, MetadataError>;
