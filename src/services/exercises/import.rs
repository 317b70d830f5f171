use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    exercises::requests::{CreateExerciseRequest, ImportExerciseRequest},
};
use crate::utils::json_repair::parse_with_repair;

use super::ExerciseService;

/// 导入 AI 生成的练习
///
/// 原始文本先做一轮 JSON 修复（剥代码栅栏、去尾逗号），
/// 解析出练习树后走与手工创建相同的校验和入库路径。
pub async fn import_exercise(
    service: &ExerciseService,
    request: &HttpRequest,
    lesson_id: i64,
    created_by: i64,
    req: ImportExerciseRequest,
) -> ActixResult<HttpResponse> {
    if req.raw.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "导入内容不能为空",
        )));
    }

    let parsed: CreateExerciseRequest = match parse_with_repair(&req.raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::info!("Exercise import parse failed for lesson {}: {}", lesson_id, e);
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                format!("JSON 解析失败: {e}"),
            )));
        }
    };

    super::create::create_exercise(service, request, lesson_id, created_by, parsed).await
}
