use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode, exercises::responses::ExerciseListResponse};

use super::ExerciseService;

pub async fn list_exercises(
    service: &ExerciseService,
    request: &HttpRequest,
    lesson_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_exercises_by_lesson(lesson_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ExerciseListResponse { items },
            "获取练习列表成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取练习列表失败: {e}"),
            )),
        ),
    }
}
