use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode, exercises::requests::CreateExerciseRequest};

use super::ExerciseService;

pub async fn create_exercise(
    service: &ExerciseService,
    request: &HttpRequest,
    lesson_id: i64,
    created_by: i64,
    req: CreateExerciseRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(e) = req.validate() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, e)));
    }

    // 课程必须存在
    match storage.get_lesson_by_id(lesson_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotFound,
                "课程不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建练习失败: {e}"),
                )),
            );
        }
    }

    match storage.create_exercise(lesson_id, created_by, req).await {
        Ok(exercise) => Ok(HttpResponse::Ok().json(ApiResponse::success(exercise, "创建练习成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建练习失败: {e}"),
            )),
        ),
    }
}
