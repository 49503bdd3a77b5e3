//! ksiegarnia.pwn.pl 元数据查询插件
//!
//! 面向图书管理宿主的元数据源：给定标题 / 作者 / ISBN，
//! 检索站点搜索页，并发抓取候选详情页，把规范化的书目记录
//! 推入结果通道；另提供缓存优先的封面解析。
//!
//! 宿主通过 [`PwnSource::identify`] 发起查询，自己持有
//! [`flume`] 接收端；取消经由共享的 [`CancellationToken`]
//! 协作式传播 (`tokio_util::sync::CancellationToken`)。
//!
//! ```no_run
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//! use pwn_metadata::{Identity, PwnSource};
//!
//! # async fn lookup() -> pwn_metadata::Result<()> {
//! let source = PwnSource::with_defaults()?;
//! let identity = Identity::builder().isbn("9788301186891".to_string()).build();
//!
//! let (tx, rx) = flume::unbounded();
//! let abort = CancellationToken::new();
//! source
//!     .identify(&identity, tx, &abort, std::time::Duration::from_secs(30))
//!     .await;
//!
//! for record in rx.try_iter() {
//!     println!("{} — {:?}", record.title, record.authors);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod engine;
pub mod host;
pub mod site;
pub mod utils;

pub use crate::core::config::{LookupConfig, TokenConfig};
pub use crate::core::error::{MetadataError, Result};
pub use crate::core::model::{
    BookFields, BookRecord, Identity, Query, Strategy, CAPABILITIES, SOURCE_DESCRIPTION,
    SOURCE_NAME, TOUCHED_FIELDS,
};
pub use crate::engine::{PwnSource, relevance_keygen};
pub use crate::host::{Browser, CoverCache, HttpBrowser, MemoryCoverCache};
