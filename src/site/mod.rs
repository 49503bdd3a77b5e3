//! ksiegarnia.pwn.pl 站点模块
//!
//! 查询构造、页面抓取与 HTML 抽取逻辑。抓取与解析严格分离：
//! 网络层只交付清理过的文本，解析函数对文本同步工作。

mod detail;
mod fetch;
mod query;
mod search;
mod selectors;

pub use self::detail::extract_fields;
pub use self::fetch::fetch_page;
pub use self::query::build_query;
pub use self::search::extract_candidates;
pub use self::selectors::SiteSelectors;
