use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 年级
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct Grade {
    pub id: i64,
    pub name: String,
    pub display_order: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 科目（隶属于年级）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct Subject {
    pub id: i64,
    pub grade_id: i64,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 轨道：年级下的课程变体（如授课语言选项）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct Track {
    pub id: i64,
    pub grade_id: i64,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
