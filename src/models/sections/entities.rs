use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 班级：某年级（可选轨道）下由一名教师授课的学生分组
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/section.ts")]
pub struct ClassSection {
    pub id: i64,
    pub grade_id: i64,
    pub track_id: Option<i64>,
    pub teacher_id: i64,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 选课记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/section.ts")]
pub struct Enrollment {
    pub id: i64,
    pub section_id: i64,
    pub student_id: i64,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}
