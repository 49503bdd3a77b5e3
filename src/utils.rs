//! 通用工具函数

use url::Url;

/// 将站点返回的相对链接规范化为绝对 URL
pub fn to_absolute_url(base: &Url, href: &str) -> String {
    if href.is_empty() {
        return String::new();
    }

    if let Some(path_without_slashes) = href.strip_prefix("//") {
        return format!("{}://{}", base.scheme(), path_without_slashes);
    }

    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }

    base.join(href)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}

/// 剔除响应体中非 XML 安全的控制字符
///
/// 保留 TAB / LF / CR，其余 C0 控制符一律丢弃，避免解析器在脏页面上出错。
pub fn strip_control_chars(raw: &str) -> String {
    if raw
        .chars()
        .all(|c| !c.is_control() || matches!(c, '\t' | '\n' | '\r'))
    {
        return raw.to_string();
    }

    raw.chars()
        .filter(|c| !c.is_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect()
}
