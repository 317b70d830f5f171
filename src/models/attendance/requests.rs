use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

use crate::models::attendance::entities::{RecordStatus, SessionStatus};
use crate::models::common::pagination::{PaginationQuery, deserialize_optional_i64};

/// 创建考勤课次请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct CreateSessionRequest {
    pub section_id: i64,
    /// ISO 日期（YYYY-MM-DD）
    pub session_date: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub note: Option<String>,
}

/// 更新考勤课次请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct UpdateSessionRequest {
    pub session_date: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: Option<SessionStatus>,
    pub note: Option<String>,
}

/// 课次列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct SessionListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub section_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub teacher_id: Option<i64>,
    pub status: Option<SessionStatus>,
    /// 起始日期（含），ISO 格式
    pub date_from: Option<String>,
    /// 结束日期（含），ISO 格式
    pub date_to: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct SessionListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub section_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub status: Option<SessionStatus>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl From<SessionListParams> for SessionListQuery {
    fn from(params: SessionListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            section_id: params.section_id,
            teacher_id: params.teacher_id,
            status: params.status,
            date_from: params.date_from,
            date_to: params.date_to,
        }
    }
}

/// 批量登记考勤请求：整个课次的点名结果一次提交
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct RecordAttendanceRequest {
    pub records: Vec<RecordEntry>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct RecordEntry {
    pub student_id: i64,
    pub status: RecordStatus,
    pub note: Option<String>,
}

/// 学生考勤汇总查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct StudentSummaryParams {
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}
