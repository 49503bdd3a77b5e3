//! 搜索查询构造 (Search Query Builder)
//!
//! 每次查询恰好选中一种策略：13 位 ISBN 优先走 EAN 搜索，
//! 10 位走书号搜索，否则回退到标题 + 第一作者。
//! 无可用信息时返回 None，调用方必须就此终止且不发起网络请求。

use crate::core::config::TokenConfig;
use crate::core::model::{Identity, Query, Strategy};
use crate::host::isbn::check_isbn;
use crate::host::tokens::{author_tokens, title_tokens};

/// 构造搜索查询
pub fn build_query(identity: &Identity, tokens: &TokenConfig, base_url: &str) -> Option<Query> {
    if let Some(isbn) = identity.isbn.as_deref().and_then(check_isbn) {
        let strategy = match isbn.len() {
            13 => Some((Strategy::Ean, "fa_ean")),
            10 => Some((Strategy::BookIdent, "faa_bookIdent")),
            _ => None,
        };
        if let Some((strategy, param)) = strategy {
            return search_url(base_url, &[(param, isbn.as_str())], strategy);
        }
    }

    // 无效或缺失的 ISBN 回退到标题路径
    let title = identity.title.as_deref()?;
    let name = title_tokens(title, tokens).join(" ");
    let creator = identity
        .authors
        .first()
        .map(|a| author_tokens(a).join(" "))
        .unwrap_or_default();

    search_url(
        base_url,
        &[("faa_name", name.as_str()), ("faa_creator", creator.as_str())],
        Strategy::NameCreator,
    )
}

fn search_url(base_url: &str, params: &[(&str, &str)], strategy: Strategy) -> Option<Query> {
    let encoded = serde_urlencoded::to_string(params).ok()?;
    Some(Query {
        url: format!("{}/szukaj?{}", base_url.trim_end_matches('/'), encoded),
        strategy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://ksiegarnia.pwn.pl";

    fn tokens() -> TokenConfig {
        TokenConfig::default()
    }

    #[test]
    fn isbn13_selects_ean_strategy() {
        let identity = Identity::builder().isbn("9788301186891".to_string()).build();
        let query = build_query(&identity, &tokens(), BASE).unwrap();

        assert_eq!(query.strategy, Strategy::Ean);
        assert_eq!(
            query.url,
            "https://ksiegarnia.pwn.pl/szukaj?fa_ean=9788301186891"
        );
    }

    #[test]
    fn isbn13_wins_over_title_and_author() {
        let identity = Identity::builder()
            .title("Fizyka".to_string())
            .authors(vec!["Jan Kowalski".to_string()])
            .isbn("978-83-01-18689-1".to_string())
            .build();

        let query = build_query(&identity, &tokens(), BASE).unwrap();
        assert_eq!(query.strategy, Strategy::Ean);
        assert!(query.url.contains("fa_ean=9788301186891"));
    }

    #[test]
    fn isbn10_selects_book_ident_strategy() {
        let identity = Identity::builder().isbn("830118689X".to_string()).build();
        let query = build_query(&identity, &tokens(), BASE).unwrap();

        assert_eq!(query.strategy, Strategy::BookIdent);
        assert!(query.url.contains("faa_bookIdent=830118689X"));
    }

    #[test]
    fn title_and_first_author_fallback() {
        let identity = Identity::builder()
            .title("Fizyka: tom pierwszy".to_string())
            .authors(vec!["Jan Kowalski".to_string(), "Anna Nowak".to_string()])
            .build();

        let query = build_query(&identity, &tokens(), BASE).unwrap();
        assert_eq!(query.strategy, Strategy::NameCreator);
        assert_eq!(
            query.url,
            "https://ksiegarnia.pwn.pl/szukaj?faa_name=Fizyka&faa_creator=Jan+Kowalski"
        );
    }

    #[test]
    fn invalid_isbn_falls_back_to_title() {
        let identity = Identity::builder()
            .title("Fizyka".to_string())
            .isbn("garbage".to_string())
            .build();

        let query = build_query(&identity, &tokens(), BASE).unwrap();
        assert_eq!(query.strategy, Strategy::NameCreator);
    }

    #[test]
    fn no_usable_input_yields_none() {
        assert!(build_query(&Identity::default(), &tokens(), BASE).is_none());

        let authors_only = Identity::builder()
            .authors(vec!["Jan Kowalski".to_string()])
            .build();
        assert!(build_query(&authors_only, &tokens(), BASE).is_none());
    }
}
