//! AI 生成练习 JSON 的修复工具
//!
//! 模型输出的题目 JSON 经常裹着 Markdown 代码栅栏、带前后说明文字
//! 或者在数组末尾多一个逗号。导入前先按原样解析，失败后做一轮
//! 清理再重试一次。

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;

static TRAILING_COMMA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*([}\]])").expect("Invalid trailing comma regex"));

/// 剥掉 Markdown 代码栅栏并裁剪到最外层 JSON 值
pub fn strip_markdown_fences(raw: &str) -> String {
    let mut text = raw.trim();

    // ```json ... ``` 或 ``` ... ```：只保留栅栏之间的内容
    if let Some(start) = text.find("```") {
        let after_fence = &text[start + 3..];
        // 跳过栅栏后的语言标记行
        let body_start = after_fence.find('\n').map(|i| i + 1).unwrap_or(0);
        let body = &after_fence[body_start..];
        text = match body.find("```") {
            Some(end) => body[..end].trim(),
            None => body.trim(),
        };
    }

    // 裁掉 JSON 值前后的说明文字
    let first = text.find(['{', '[']);
    let last = text.rfind(['}', ']']);
    match (first, last) {
        (Some(f), Some(l)) if f < l => text[f..=l].to_string(),
        _ => text.to_string(),
    }
}

/// 移除对象/数组末尾的多余逗号
pub fn strip_trailing_commas(raw: &str) -> String {
    TRAILING_COMMA_RE.replace_all(raw, "$1").to_string()
}

/// 先按原样解析，失败后清理一轮再重试
pub fn parse_with_repair<T: DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    match serde_json::from_str::<T>(raw) {
        Ok(value) => Ok(value),
        Err(_) => {
            let cleaned = strip_trailing_commas(&strip_markdown_fences(raw));
            serde_json::from_str::<T>(&cleaned)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_plain_json_passes_through() {
        let v: Value = parse_with_repair(r#"{"title": "Unit 1"}"#).unwrap();
        assert_eq!(v["title"], "Unit 1");
    }

    #[test]
    fn test_strips_json_fence() {
        let raw = "```json\n{\"title\": \"Unit 1\"}\n```";
        let v: Value = parse_with_repair(raw).unwrap();
        assert_eq!(v["title"], "Unit 1");
    }

    #[test]
    fn test_strips_bare_fence_and_prose() {
        let raw = "Here is the quiz you asked for:\n```\n[{\"text\": \"Q1\"}]\n```\nLet me know!";
        let v: Value = parse_with_repair(raw).unwrap();
        assert_eq!(v[0]["text"], "Q1");
    }

    #[test]
    fn test_removes_trailing_comma() {
        let raw = "{\"choices\": [\"a\", \"b\",],}";
        let v: Value = parse_with_repair(raw).unwrap();
        assert_eq!(v["choices"][1], "b");
    }

    #[test]
    fn test_unclosed_fence() {
        let raw = "```json\n{\"title\": \"Unit 2\"}";
        let v: Value = parse_with_repair(raw).unwrap();
        assert_eq!(v["title"], "Unit 2");
    }

    #[test]
    fn test_garbage_still_fails() {
        assert!(parse_with_repair::<Value>("not json at all").is_err());
    }
}
