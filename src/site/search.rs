//! 搜索结果抽取 (Search Result Extractor)
//!
//! 从搜索结果页提取候选详情页 URL。相对链接统一补上站点源，
//! 顺序保持页面内的出现顺序 (站内相关性排序)。

use scraper::Html;
use tracing::info;
use url::Url;

use crate::utils::to_absolute_url;

use super::SiteSelectors;

/// 提取候选详情页 URL 列表
///
/// 页面中没有结果容器时返回空列表，属于正常结果而非错误。
pub fn extract_candidates(html: &str, base: &Url) -> Vec<String> {
    let doc = Html::parse_document(html);
    let s = SiteSelectors::get();

    let candidates: Vec<String> = doc
        .select(&s.result_container)
        .filter_map(|container| {
            let href = container
                .select(&s.result_link)
                .next()?
                .value()
                .attr("href")?;
            if href.is_empty() {
                return None;
            }
            Some(to_absolute_url(base, href))
        })
        .collect();

    info!("Found {} publications", candidates.len());

    candidates
}
