//! 站点选择器
//!
//! 预编译的 CSS 选择器

use std::sync::OnceLock;

use scraper::Selector;

/// 站点选择器集合
pub struct SiteSelectors {
    pub rating: Selector,
    pub title: Selector,
    pub cover_link: Selector,
    pub result_container: Selector,
    pub result_link: Selector,
    pub description_item: Selector,
    pub key_primary: Selector,
    pub key_secondary: Selector,
    pub edition_value: Selector,
    pub author_value: Selector,
    pub publisher_value: Selector,
    pub details_item: Selector,
    pub details_label: Selector,
    pub details_value: Selector,
}

static SELECTORS: OnceLock<SiteSelectors> = OnceLock::new();

impl SiteSelectors {
    /// 获取全局选择器实例
    pub fn get() -> &'static SiteSelectors {
        SELECTORS.get_or_init(|| SiteSelectors {
            rating: Selector::parse("span[itemprop='rating']").unwrap(),
            title: Selector::parse("h1[itemprop='name'] span.name").unwrap(),
            cover_link: Selector::parse("div#product-cover div a").unwrap(),
            result_container: Selector::parse("div.emp-info-container").unwrap(),
            result_link: Selector::parse("a").unwrap(),
            description_item: Selector::parse("div.emp-product-description ul li").unwrap(),
            key_primary: Selector::parse("h3 span.key").unwrap(),
            key_secondary: Selector::parse("h2 span.key").unwrap(),
            edition_value: Selector::parse("h3 span.value").unwrap(),
            author_value: Selector::parse("h2 span.value a").unwrap(),
            publisher_value: Selector::parse("h3 span.value a").unwrap(),
            details_item: Selector::parse("div#details ul.head li").unwrap(),
            details_label: Selector::parse("span[class*='text']").unwrap(),
            details_value: Selector::parse("span.wartosc").unwrap(),
        })
    }
}
