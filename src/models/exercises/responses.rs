use serde::Serialize;
use ts_rs::TS;

use crate::models::exercises::entities::{Exercise, Question};

/// 练习详情（整棵树）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exercise.ts")]
pub struct ExerciseDetailResponse {
    pub exercise: Exercise,
    pub questions: Vec<Question>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exercise.ts")]
pub struct ExerciseListResponse {
    pub items: Vec<Exercise>,
}
