//! 并发查询引擎
//!
//! 协调一次查询的完整生命周期：构造查询 -> 发现候选 -> 并发抓取 -> 发布结果

mod cover;
mod pipeline;
mod worker;

pub use cover::relevance_keygen;
pub use pipeline::PwnSource;
