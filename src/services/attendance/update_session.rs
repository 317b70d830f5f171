use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    attendance::requests::UpdateSessionRequest,
    users::entities::User,
};
use crate::utils::validate::validate_iso_date;

use super::{AttendanceService, can_manage_section};

pub async fn update_session(
    service: &AttendanceService,
    request: &HttpRequest,
    session_id: i64,
    user: User,
    req: UpdateSessionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref date) = req.session_date
        && let Err(e) = validate_iso_date(date)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, e)));
    }

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
                    format!("更新课次失败: {e}"),
                )),
            );
        }
    };

    match can_manage_section(&storage, &user, session.section_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "只能修改自己授课班级的课次",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("更新课次失败: {e}"),
                )),
            );
        }
    }

    // 更新后的时间关系仍需成立
    let start = req.start_time.unwrap_or(session.start_time);
    let end = req.end_time.unwrap_or(session.end_time);
    if end <= start {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "下课时间必须晚于上课时间",
        )));
    }

    match storage.update_session(session_id, req).await {
        Ok(Some(session)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(session, "更新课次成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "课次不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新课次失败: {e}"),
            )),
        ),
    }
}
