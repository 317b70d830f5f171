//! 路径参数安全提取器
//!
//! 路径里的 ID 和文件 token 在进入业务层前先做格式校验，
//! 非法值直接返回 400 而不是落到数据库查询。

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse, error::InternalError};
use futures_util::future::{Ready, ready};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ApiResponse, ErrorCode};

static FILE_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]{8,64}$").expect("Invalid file token regex"));

fn bad_request(message: &str) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
        ErrorCode::BadRequest,
        message,
    ));
    InternalError::from_response(message.to_string(), response).into()
}

/// 路径 `{id}` 的 i64 提取器，拒绝非数字和非正数
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().query("id");
        match raw.parse::<i64>() {
            Ok(id) if id > 0 => ready(Ok(SafeIDI64(id))),
            _ => ready(Err(bad_request("无效的 ID 参数"))),
        }
    }
}

/// 路径 `{token}` 的文件 token 提取器
pub struct SafeFileToken(pub String);

impl FromRequest for SafeFileToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().query("token");
        if FILE_TOKEN_RE.is_match(raw) {
            ready(Ok(SafeFileToken(raw.to_string())))
        } else {
            ready(Err(bad_request("无效的文件 token")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_token_format() {
        assert!(FILE_TOKEN_RE.is_match("550e8400-e29b-41d4-a716-446655440000"));
        assert!(!FILE_TOKEN_RE.is_match("../etc/passwd"));
        assert!(!FILE_TOKEN_RE.is_match("short"));
    }
}
