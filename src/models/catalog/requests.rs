use serde::Deserialize;
use ts_rs::TS;

/// 创建年级请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct CreateGradeRequest {
    pub name: String,
    pub display_order: Option<i32>,
}

/// 更新年级请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct UpdateGradeRequest {
    pub name: Option<String>,
    pub display_order: Option<i32>,
}

/// 创建科目请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct CreateSubjectRequest {
    pub grade_id: i64,
    pub name: String,
}

/// 更新科目请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct UpdateSubjectRequest {
    pub name: Option<String>,
}

/// 创建轨道请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct CreateTrackRequest {
    pub grade_id: i64,
    pub name: String,
}

/// 更新轨道请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct UpdateTrackRequest {
    pub name: Option<String>,
}

/// 科目/轨道列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct CatalogListParams {
    pub grade_id: Option<i64>,
}
