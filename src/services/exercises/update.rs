use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode, exercises::requests::UpdateExerciseRequest};

use super::ExerciseService;

pub async fn update_exercise(
    service: &ExerciseService,
    request: &HttpRequest,
    exercise_id: i64,
    req: UpdateExerciseRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_exercise(exercise_id, req).await {
        Ok(Some(exercise)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(exercise, "更新练习成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "练习不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新练习失败: {e}"),
            )),
        ),
    }
}
