use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 练习：课程下的选择题集合
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exercise.ts")]
pub struct Exercise {
    pub id: i64,
    pub lesson_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 题目（含选项）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exercise.ts")]
pub struct Question {
    pub id: i64,
    pub exercise_id: i64,
    pub text: String,
    pub position: i32,
    pub choices: Vec<QuestionChoice>,
}

// 题目选项
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exercise.ts")]
pub struct QuestionChoice {
    pub id: i64,
    pub question_id: i64,
    pub text: String,
    pub is_correct: bool,
}
