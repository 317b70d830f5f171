use serde::Deserialize;
use serde_json::Value;
use ts_rs::TS;

use crate::models::common::pagination::{PaginationQuery, deserialize_optional_i64};
use crate::models::lessons::entities::{Cycle, ResourceKind};

/// 创建课程请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct CreateLessonRequest {
    pub subject_id: i64,
    pub track_id: Option<i64>,
    pub cycle: Cycle,
    pub title: String,
    /// 不传时排到 (科目, 学期) 末尾
    pub position: Option<i32>,
}

/// 更新课程请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct UpdateLessonRequest {
    pub track_id: Option<i64>,
    pub cycle: Option<Cycle>,
    pub title: Option<String>,
    pub position: Option<i32>,
}

/// 课程列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct LessonListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub subject_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub grade_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub track_id: Option<i64>,
    pub cycle: Option<Cycle>,
    pub search: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct LessonListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub subject_id: Option<i64>,
    pub grade_id: Option<i64>,
    pub track_id: Option<i64>,
    pub cycle: Option<Cycle>,
    pub search: Option<String>,
}

impl From<LessonListParams> for LessonListQuery {
    fn from(params: LessonListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            subject_id: params.subject_id,
            grade_id: params.grade_id,
            track_id: params.track_id,
            cycle: params.cycle,
            search: params.search,
        }
    }
}

/// 添加课程资源请求
///
/// kind 决定有效载荷：pdf 需要 download_token，markdown 需要 content，
/// blocks 需要 JSON 数组。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct CreateResourceRequest {
    pub kind: ResourceKind,
    pub title: String,
    pub download_token: Option<String>,
    pub content: Option<String>,
    pub blocks: Option<Value>,
}
