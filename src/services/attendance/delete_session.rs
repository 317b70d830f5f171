use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode, users::entities::User};

use super::{AttendanceService, can_manage_section};

pub async fn delete_session(
    service: &AttendanceService,
    request: &HttpRequest,
    session_id: i64,
    user: User,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let session = match storage.get_session_by_id(session_id).await {
        Ok(Some(session)) => session,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotFound,
                "课次不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("删除课次失败: {e}"),
                )),
            );
        }
    };

    match can_manage_section(&storage, &user, session.section_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "只能删除自己授课班级的课次",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("删除课次失败: {e}"),
                )),
            );
        }
    }

    match storage.delete_session(session_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("删除课次成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "课次不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除课次失败: {e}"),
            )),
        ),
    }
}
