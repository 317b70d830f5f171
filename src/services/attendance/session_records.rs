use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    attendance::responses::RecordListResponse,
    users::entities::User,
};

use super::{AttendanceService, can_manage_section};

/// 课次考勤记录（教师/管理员）
pub async fn list_session_records(
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
                    format!("获取考勤记录失败: {e}"),
                )),
            );
        }
    };

    match can_manage_section(&storage, &user, session.section_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "只能查看自己授课班级的考勤",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("获取考勤记录失败: {e}"),
                )),
            );
        }
    }

    match storage.list_session_records(session_id).await {
        Ok(records) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RecordListResponse { session, records },
            "获取考勤记录成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取考勤记录失败: {e}"),
            )),
        ),
    }
}
