/// 转义 LIKE 模式中的通配符
///
/// 用户输入直接拼进 LIKE 查询时，`%` 和 `_` 会被当作通配符，
/// 搜索 "100%" 会匹配所有以 100 开头的记录。
pub fn escape_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_percent() {
        assert_eq!(escape_like_pattern("100%"), "100\\%");
    }

    #[test]
    fn test_escape_underscore() {
        assert_eq!(escape_like_pattern("unit_1"), "unit\\_1");
    }

    #[test]
    fn test_escape_backslash_first() {
        assert_eq!(escape_like_pattern("a\\%"), "a\\\\\\%");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_like_pattern("algebra"), "algebra");
    }
}
