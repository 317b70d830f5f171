pub mod common;

pub mod attendance;
pub mod auth;
pub mod catalog;
pub mod exercises;
pub mod files;
pub mod finance;
pub mod homeworks;
pub mod lessons;
pub mod reports;
pub mod sections;
pub mod users;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 业务错误码（HTTP 状态码 x100 细分）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub enum ErrorCode {
    Success = 0,
    BadRequest = 40000,
    ValidationFailed = 40001,
    FileTypeNotAllowed = 40002,
    FileSizeExceeded = 40003,
    MultifileUploadNotAllowed = 40004,
    Unauthorized = 40100,
    AuthFailed = 40101,
    Forbidden = 40300,
    NotFound = 40400,
    FileNotFound = 40401,
    Conflict = 40900,
    RateLimitExceeded = 42900,
    InternalServerError = 50000,
    FileUploadFailed = 50001,
}

/// 程序启动时间，用于 /system/info 的运行时长
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
