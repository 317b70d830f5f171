use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode, exercises::responses::ExerciseDetailResponse};

use super::ExerciseService;

/// 练习详情（整棵树）
pub async fn get_exercise(
    service: &ExerciseService,
    request: &HttpRequest,
    exercise_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_exercise_with_questions(exercise_id).await {
        Ok(Some((exercise, questions))) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ExerciseDetailResponse {
                exercise,
                questions,
            },
            "获取练习详情成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "练习不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取练习详情失败: {e}"),
            )),
        ),
    }
}
