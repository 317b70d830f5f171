use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode, lessons::requests::UpdateLessonRequest};

use super::LessonService;

pub async fn update_lesson(
    service: &LessonService,
    request: &HttpRequest,
    lesson_id: i64,
    req: UpdateLessonRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_lesson(lesson_id, req).await {
        Ok(Some(lesson)) => Ok(HttpResponse::Ok().json(ApiResponse::success(lesson, "更新课程成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "课程不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新课程失败: {e}"),
            )),
        ),
    }
}
