use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    attendance::requests::CreateSessionRequest,
    users::entities::User,
};
use crate::utils::validate::validate_iso_date;

use super::{AttendanceService, can_manage_section};

pub async fn create_session(
    service: &AttendanceService,
    request: &HttpRequest,
    user: User,
    req: CreateSessionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(e) = validate_iso_date(&req.session_date) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, e)));
    }

    // 下课时间必须晚于上课时间
    if req.end_time <= req.start_time {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "下课时间必须晚于上课时间",
        )));
    }

    match storage.get_section_by_id(req.section_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotFound,
                "班级不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建课次失败: {e}"),
                )),
            );
        }
    }

    match can_manage_section(&storage, &user, req.section_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "只能给自己授课的班级排课",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建课次失败: {e}"),
                )),
            );
        }
    }

    match storage.create_session(user.id, req).await {
        Ok(session) => Ok(HttpResponse::Ok().json(ApiResponse::success(session, "创建课次成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建课次失败: {e}"),
            )),
        ),
    }
}
