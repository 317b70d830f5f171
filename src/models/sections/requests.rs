use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::{PaginationQuery, deserialize_optional_i64};

/// 创建班级请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/section.ts")]
pub struct CreateSectionRequest {
    pub grade_id: i64,
    pub track_id: Option<i64>,
    pub teacher_id: i64,
    pub name: String,
}

/// 更新班级请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/section.ts")]
pub struct UpdateSectionRequest {
    pub track_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub name: Option<String>,
}

/// 班级列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/section.ts")]
pub struct SectionListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub grade_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub teacher_id: Option<i64>,
    pub search: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct SectionListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub grade_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub search: Option<String>,
}

impl From<SectionListParams> for SectionListQuery {
    fn from(params: SectionListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            grade_id: params.grade_id,
            teacher_id: params.teacher_id,
            search: params.search,
        }
    }
}

/// 学生选课请求（管理员操作）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/section.ts")]
pub struct EnrollRequest {
    pub student_id: i64,
}
