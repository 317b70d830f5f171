use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    attendance::requests::{SessionListParams, SessionListQuery},
    users::entities::UserRole,
};
use crate::utils::validate::validate_iso_date;

use super::AttendanceService;

pub async fn list_sessions(
    service: &AttendanceService,
    request: &HttpRequest,
    params: SessionListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "无法获取用户信息",
        )));
    };

    for date in [&params.date_from, &params.date_to].into_iter().flatten() {
        if let Err(e) = validate_iso_date(date) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, e)));
        }
    }

    let mut query: SessionListQuery = params.into();

    // 教师只能看到自己的课次
    if current.role == UserRole::Teacher {
        query.teacher_id = Some(current.id);
    }

    match storage.list_sessions_with_pagination(query).await {
        Ok(resp) => Ok(HttpResponse::Ok().json(ApiResponse::success(resp, "获取课次列表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取课次列表失败: {e}"),
            )),
        ),
    }
}
