//! 页面抓取 (Page Fetcher)
//!
//! 单次 GET，无自动重试。字符集解码由网络层完成，
//! 这里只负责剔除控制字符，交付可安全解析的文本。

use std::time::Duration;

use tracing::info;

use crate::core::error::Result;
use crate::host::browser::Browser;
use crate::utils::strip_control_chars;

/// 抓取一个页面并返回清理后的文本
pub async fn fetch_page(browser: &dyn Browser, url: &str, timeout: Duration) -> Result<String> {
    info!("Fetching: {}", url);
    let raw = browser.get_text(url, timeout).await?;
    Ok(strip_control_chars(&raw))
}
