//! 宿主协作者接口 (Host Collaborators)
//!
//! 插件框架提供的外部能力：网络客户端、封面缓存、ISBN 校验与分词工具。
//! 网络与缓存以 Trait 形式注入，便于宿主替换实现。

pub mod browser;
pub mod cache;
pub mod isbn;
pub mod tokens;

pub use browser::{Browser, HttpBrowser};
pub use cache::{CoverCache, MemoryCoverCache};
pub use isbn::check_isbn;
pub use tokens::{author_tokens, title_tokens};
