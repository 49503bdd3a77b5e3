//! 标题 / 作者分词
//!
//! 构造搜索查询前的分词处理。规则保持与宿主工具一致：
//! 副标题截断发生在第一个冒号处，连接词表只覆盖常见英文虚词。

use crate::core::config::TokenConfig;

/// 连接词表
const JOINERS: &[&str] = &["a", "an", "and", "the", "&"];

/// 标题分词
///
/// `strip_subtitle` 丢弃第一个冒号之后的副标题段；
/// `strip_joiners` 丢弃连接词 (大小写不敏感)。
pub fn title_tokens(title: &str, options: &TokenConfig) -> Vec<String> {
    let main = if options.strip_subtitle {
        title.split(':').next().unwrap_or(title)
    } else {
        title
    };

    main.split_whitespace()
        .map(|t| t.trim_matches(|c: char| c.is_ascii_punctuation()))
        .filter(|t| !t.is_empty())
        .filter(|t| !(options.strip_joiners && JOINERS.contains(&t.to_lowercase().as_str())))
        .map(str::to_string)
        .collect()
}

/// 作者名分词
///
/// 调用方只传入第一作者 (多作者消歧策略未定，沿用单作者启发式)。
pub fn author_tokens(author: &str) -> Vec<String> {
    author
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| matches!(c, ',' | '.' | ';')))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
