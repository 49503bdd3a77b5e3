//! 详情页抽取 (Detail Page Extractor)
//!
//! 把一张详情页解析为 `BookFields`。评分、标题、封面容器是
//! 结构锚点，缺失任意一个即判定页面形状不符，返回 Parse 错误；
//! 其余字段缺失属于正常情况。
//!
//! 属性区与明细区的标签词表是封闭的，词表外的条目一律忽略。

use chrono::NaiveDate;
use scraper::{ElementRef, Html};

use crate::core::error::{MetadataError, Result};
use crate::core::model::BookFields;

use super::SiteSelectors;

/// 属性区标签：出版年份
const KEY_EDITION: &str = "Wydanie:";
/// 属性区标签：作者列表
const KEY_AUTHOR: &str = "Autor:";
/// 属性区标签：出版社
const KEY_PUBLISHER: &str = "Wydawca:";
/// 明细区标签
const KEY_ISBN: &str = "ISBN:";
const KEY_EAN: &str = "EAN:";
const KEY_LANGUAGE: &str = "Język wydania:";

/// 从详情页 HTML 抽取原始字段集合
pub fn extract_fields(html: &str) -> Result<BookFields> {
    let doc = Html::parse_document(html);
    let s = SiteSelectors::get();

    let mut fields = BookFields::default();

    fields.rating = doc
        .select(&s.rating)
        .next()
        .ok_or_else(|| MetadataError::Parse("rating anchor not found".into()))?
        .text()
        .collect::<String>()
        .trim()
        .parse::<f32>()
        .ok();

    fields.title = doc
        .select(&s.title)
        .next()
        .ok_or_else(|| MetadataError::Parse("title anchor not found".into()))?
        .text()
        .collect::<String>()
        .trim()
        .to_string();

    fields.cover_url = Some(
        doc.select(&s.cover_link)
            .next()
            .and_then(|a| a.value().attr("href"))
            .ok_or_else(|| MetadataError::Parse("cover anchor not found".into()))?
            .to_string(),
    );

    for item in doc.select(&s.description_item) {
        let Some(label) = section_label(&item, s) else {
            continue;
        };

        match label.as_str() {
            KEY_EDITION => {
                for value in item.select(&s.edition_value) {
                    let text = value.text().collect::<String>();
                    if let Some(year) = leading_year(text.trim()) {
                        fields.pubdate = NaiveDate::from_ymd_opt(year, 1, 1);
                    }
                }
            }
            KEY_AUTHOR => {
                // TODO 多作者条目是否会拆成多个 value 节点仍待站点样本确认
                fields.authors = item
                    .select(&s.author_value)
                    .map(|a| a.text().collect::<String>().trim().to_string())
                    .filter(|a| !a.is_empty())
                    .collect();
            }
            KEY_PUBLISHER => {
                fields.publisher = item
                    .select(&s.publisher_value)
                    .next()
                    .map(|a| a.text().collect::<String>().trim().to_string());
            }
            _ => {}
        }
    }

    for item in doc.select(&s.details_item) {
        let Some(label) = item.select(&s.details_label).next() else {
            continue;
        };
        let label = label.text().collect::<String>();

        let value = item
            .select(&s.details_value)
            .next()
            .map(|v| v.text().collect::<String>().trim().to_string())
            .filter(|v| !v.is_empty());
        let Some(value) = value else {
            continue;
        };

        match label.trim() {
            KEY_ISBN => fields.isbn = Some(value),
            KEY_EAN => fields.ean = Some(value),
            KEY_LANGUAGE => {
                if let Some(code) = language_code(&value) {
                    fields.languages.push(code.to_string());
                }
            }
            _ => {}
        }
    }

    Ok(fields)
}

/// 读取属性条目的标签文本
///
/// 主形态 (h3) 优先，缺失时回退到次形态 (h2)，两者不要求同时存在。
fn section_label(item: &ElementRef, s: &SiteSelectors) -> Option<String> {
    item.select(&s.key_primary)
        .next()
        .or_else(|| item.select(&s.key_secondary).next())
        .map(|el| el.text().collect::<String>().trim().to_string())
}

/// 取值开头的 4 位年份
fn leading_year(value: &str) -> Option<i32> {
    let lead: String = value.chars().take(4).collect();
    if lead.len() == 4 && lead.chars().all(|c| c.is_ascii_digit()) {
        lead.parse().ok()
    } else {
        None
    }
}

/// 语言名 → 语言码映射表
///
/// 站点目前只观察到一种语言；未知语言名静默忽略。
fn language_code(name: &str) -> Option<&'static str> {
    match name {
        "polski" => Some("pl"),
        _ => None,
    }
}
