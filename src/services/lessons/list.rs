use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode, lessons::requests::LessonListParams};

use super::LessonService;

pub async fn list_lessons(
    service: &LessonService,
    request: &HttpRequest,
    params: LessonListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_lessons_with_pagination(params.into()).await {
        Ok(resp) => Ok(HttpResponse::Ok().json(ApiResponse::success(resp, "获取课程列表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取课程列表失败: {e}"),
            )),
        ),
    }
}
