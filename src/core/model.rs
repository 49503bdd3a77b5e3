//! 领域模型定义
//!
//! 覆盖一次查询的输入 (Identity)、搜索策略 (Query)、详情页原始字段
//! (BookFields) 以及交付给宿主的规范化记录 (BookRecord)。

use bon::Builder;
use chrono::NaiveDate;

use crate::core::error::{MetadataError, Result};

/// 插件标识
pub const SOURCE_NAME: &str = "PWN";
/// 插件描述
pub const SOURCE_DESCRIPTION: &str = "Downloads metadata and covers from ksiegarnia.pwn.pl";
/// 插件能力集合
pub const CAPABILITIES: &[&str] = &["identify", "cover"];
/// 插件可填充的宿主字段
pub const TOUCHED_FIELDS: &[&str] = &[
    "title",
    "authors",
    "identifier:isbn",
    "rating",
    "publisher",
    "pubdate",
    "languages",
];

/// 调用方提供的查询键
///
/// 标题、作者序列与 ISBN 均为可选；一次查询期间不可变。
#[derive(Debug, Clone, Default, Builder)]
pub struct Identity {
    pub title: Option<String>,
    #[builder(default)]
    pub authors: Vec<String>,
    pub isbn: Option<String>,
}

impl Identity {
    /// 是否携带任何可用于构造查询的信息
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.authors.is_empty() && self.isbn.is_none()
    }
}

/// 搜索策略，每次查询恰好选中一种
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// 13 位 ISBN (fa_ean)
    Ean,
    /// 10 位 ISBN (faa_bookIdent)
    BookIdent,
    /// 标题 + 第一作者 (faa_name / faa_creator)
    NameCreator,
}

/// 构造完成的搜索请求，使用一次后即丢弃
#[derive(Debug, Clone)]
pub struct Query {
    pub url: String,
    pub strategy: Strategy,
}

/// 详情页抽取出的原始字段集合
///
/// title 与 authors 为必需键，其余字段缺失属于正常情况。
#[derive(Debug, Clone, Default)]
pub struct BookFields {
    pub title: String,
    pub authors: Vec<String>,
    pub rating: Option<f32>,
    pub cover_url: Option<String>,
    pub publisher: Option<String>,
    pub pubdate: Option<NaiveDate>,
    pub isbn: Option<String>,
    pub ean: Option<String>,
    pub languages: Vec<String>,
}

impl BookFields {
    /// 将原始字段转换为规范化记录
    ///
    /// 缺失标题或作者视为校验失败，该候选被整体丢弃。
    /// 标识符优先取 EAN，其次 ISBN。
    pub fn into_record(self) -> Result<BookRecord> {
        if self.title.trim().is_empty() || self.authors.is_empty() {
            return Err(MetadataError::Validation(
                "missing title or authors".into(),
            ));
        }

        let mut record = BookRecord::new(self.title, self.authors);
        record.isbn = self.ean.or(self.isbn);
        record.publisher = self.publisher;
        record.pubdate = self.pubdate;
        record.rating = self.rating;
        record.languages = self.languages;
        record.has_cover = self.cover_url.is_some();

        Ok(record)
    }
}

/// 交付给宿主的规范化元数据记录
#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
    pub title: String,
    pub authors: Vec<String>,
    pub isbn: Option<String>,
    pub publisher: Option<String>,
    pub pubdate: Option<NaiveDate>,
    pub rating: Option<f32>,
    pub languages: Vec<String>,
    pub has_cover: bool,
}

impl BookRecord {
    pub fn new(title: impl Into<String>, authors: Vec<String>) -> Self {
        Self {
            title: title.into(),
            authors,
            isbn: None,
            publisher: None,
            pubdate: None,
            rating: None,
            languages: Vec::new(),
            has_cover: false,
        }
    }

    /// 宿主侧的记录清理钩子
    ///
    /// 去除各字段首尾空白，丢弃清理后为空的作者项。
    pub fn cleanup(&mut self) {
        self.title = self.title.trim().to_string();

        for author in &mut self.authors {
            *author = author.trim().to_string();
        }
        self.authors.retain(|a| !a.is_empty());

        if let Some(publisher) = &self.publisher {
            let trimmed = publisher.trim();
            self.publisher = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> BookFields {
        BookFields {
            title: "Fizyka".into(),
            authors: vec!["Jan Kowalski".into()],
            ..Default::default()
        }
    }

    #[test]
    fn identity_is_empty_only_without_any_key() {
        assert!(Identity::default().is_empty());
        assert!(!Identity::builder().isbn("9788301186891".to_string()).build().is_empty());
        assert!(
            !Identity::builder()
                .authors(vec!["Jan Kowalski".to_string()])
                .build()
                .is_empty()
        );
    }

    #[test]
    fn ean_takes_priority_over_isbn() {
        let mut f = fields();
        f.isbn = Some("8301186895".into());
        f.ean = Some("9788301186891".into());

        let record = f.into_record().unwrap();
        assert_eq!(record.isbn.as_deref(), Some("9788301186891"));
    }

    #[test]
    fn isbn_used_when_no_ean() {
        let mut f = fields();
        f.isbn = Some("8301186895".into());

        let record = f.into_record().unwrap();
        assert_eq!(record.isbn.as_deref(), Some("8301186895"));
    }

    #[test]
    fn missing_title_fails_validation() {
        let mut f = fields();
        f.title = "  ".into();
        assert!(matches!(
            f.into_record(),
            Err(MetadataError::Validation(_))
        ));
    }

    #[test]
    fn missing_authors_fails_validation() {
        let mut f = fields();
        f.authors.clear();
        assert!(f.into_record().is_err());
    }

    #[test]
    fn has_cover_tracks_cover_url() {
        let mut with = fields();
        with.cover_url = Some("https://cdn.pwn.pl/c.jpg".into());
        assert!(with.into_record().unwrap().has_cover);

        assert!(!fields().into_record().unwrap().has_cover);
    }

    #[test]
    fn cleanup_trims_and_drops_empty_authors() {
        let mut record = BookRecord::new("  Fizyka ", vec!["  Jan ".into(), "  ".into()]);
        record.publisher = Some(" PWN ".into());
        record.cleanup();

        assert_eq!(record.title, "Fizyka");
        assert_eq!(record.authors, vec!["Jan".to_string()]);
        assert_eq!(record.publisher.as_deref(), Some("PWN"));
    }
}
