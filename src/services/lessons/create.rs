use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode, lessons::requests::CreateLessonRequest};

use super::LessonService;

pub async fn create_lesson(
    service: &LessonService,
    request: &HttpRequest,
    created_by: i64,
    req: CreateLessonRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "课程标题不能为空",
        )));
    }

    // 科目必须存在
    let subject = match storage.get_subject_by_id(req.subject_id).await {
        Ok(Some(subject)) => subject,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotFound,
                "科目不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建课程失败: {e}"),
                )),
            );
        }
    };

    // 轨道必须属于科目所在的年级
    if let Some(track_id) = req.track_id {
        match storage.get_track_by_id(track_id).await {
            Ok(Some(track)) if track.grade_id == subject.grade_id => {}
            Ok(_) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ValidationFailed,
                    "轨道与科目不属于同一年级",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("创建课程失败: {e}"),
                    )),
                );
            }
        }
    }

    match storage.create_lesson(created_by, req).await {
        Ok(lesson) => Ok(HttpResponse::Ok().json(ApiResponse::success(lesson, "创建课程成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建课程失败: {e}"),
            )),
        ),
    }
}
