use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 作业
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct Homework {
    pub id: i64,
    pub section_id: i64,
    pub lesson_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub max_score: f64,
    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
    pub allow_late: bool,
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 作业提交（评分信息就地记录）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct Submission {
    pub id: i64,
    pub homework_id: i64,
    pub student_id: i64,
    pub content: String,
    pub attachment_token: Option<String>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub is_late: bool,
    pub score: Option<f64>,
    pub feedback: Option<String>,
    pub graded_by: Option<i64>,
    pub graded_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Submission {
    pub fn is_graded(&self) -> bool {
        self.score.is_some()
    }
}
