//! ISBN 校验
//!
//! 接受带连字符 / 空格的输入，校验形状后返回规范形式 (纯数字，
//! ISBN-10 末位允许 X)。只做形状校验，不做校验位运算。

/// 校验候选 ISBN，返回规范化结果
pub fn check_isbn(candidate: &str) -> Option<String> {
    let cleaned: String = candidate
        .trim()
        .chars()
        .filter(|c| !matches!(c, '-' | ' '))
        .map(|c| c.to_ascii_uppercase())
        .collect();

    match cleaned.len() {
        10 if valid_isbn10(&cleaned) => Some(cleaned),
        13 if cleaned.chars().all(|c| c.is_ascii_digit()) => Some(cleaned),
        _ => None,
    }
}

/// ISBN-10：前 9 位为数字，末位为数字或 X
fn valid_isbn10(isbn: &str) -> bool {
    isbn.chars().enumerate().all(|(i, c)| match c {
        '0'..='9' => true,
        'X' => i == 9,
        _ => false,
    })
}
