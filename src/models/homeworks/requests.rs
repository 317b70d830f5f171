use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::{PaginationQuery, deserialize_optional_i64};

/// 创建作业请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct CreateHomeworkRequest {
    pub section_id: i64,
    pub lesson_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub max_score: Option<f64>,
    pub deadline: Option<DateTime<Utc>>, // ISO 8601 格式，如 "2026-01-24T12:00:00Z"
    pub allow_late: Option<bool>,
}

/// 更新作业请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct UpdateHomeworkRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub max_score: Option<f64>,
    pub deadline: Option<DateTime<Utc>>, // ISO 8601 格式
    pub allow_late: Option<bool>,
}

/// 作业列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct HomeworkListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub section_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub created_by: Option<i64>,
    pub search: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct HomeworkListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub section_id: Option<i64>,
    pub section_ids: Option<Vec<i64>>,
    pub created_by: Option<i64>,
    pub search: Option<String>,
}

impl From<HomeworkListParams> for HomeworkListQuery {
    fn from(params: HomeworkListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            section_id: params.section_id,
            section_ids: None,
            created_by: params.created_by,
            search: params.search,
        }
    }
}

/// 提交作业请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct SubmitHomeworkRequest {
    pub content: String,
    pub attachment_token: Option<String>,
}

/// 评分请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct GradeSubmissionRequest {
    pub score: f64,
    pub feedback: Option<String>,
}
