use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode, lessons::responses::LessonDetailResponse};

use super::LessonService;

/// 课程详情（带资源列表）
pub async fn get_lesson(
    service: &LessonService,
    request: &HttpRequest,
    lesson_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let lesson = match storage.get_lesson_by_id(lesson_id).await {
        Ok(Some(lesson)) => lesson,
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
                    format!("获取课程失败: {e}"),
                )),
            );
        }
    };

    match storage.list_lesson_resources(lesson_id).await {
        Ok(resources) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            LessonDetailResponse { lesson, resources },
            "获取课程详情成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取课程资源失败: {e}"),
            )),
        ),
    }
}
