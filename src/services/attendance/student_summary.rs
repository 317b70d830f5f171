use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    attendance::requests::StudentSummaryParams,
    users::entities::{User, UserRole},
};
use crate::utils::validate::validate_iso_date;

use super::AttendanceService;

/// 学生考勤汇总
///
/// 学生查自己；家长只能查自己名下的孩子；教师和管理员不受限制。
pub async fn student_summary(
    service: &AttendanceService,
    request: &HttpRequest,
    student_id: i64,
    user: User,
    params: StudentSummaryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    for date in [&params.date_from, &params.date_to].into_iter().flatten() {
        if let Err(e) = validate_iso_date(date) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, e)));
        }
    }

    // 范围校验
    match user.role {
        UserRole::Admin | UserRole::Teacher => {}
        UserRole::Student => {
            if user.id != student_id {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "只能查询自己的考勤",
                )));
            }
        }
        UserRole::Parent => {
            let is_own_child = match storage.get_user_by_id(student_id).await {
                Ok(Some(student)) => student.guardian_id == Some(user.id),
                Ok(None) => {
                    return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                        ErrorCode::NotFound,
                        "学生不存在",
                    )));
                }
                Err(e) => {
                    return Ok(
                        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("查询考勤汇总失败: {e}"),
                        )),
                    );
                }
            };
            if !is_own_child {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "只能查询自己孩子的考勤",
                )));
            }
        }
    }

    match storage
        .student_attendance_summary(student_id, params.date_from, params.date_to)
        .await
    {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiResponse::success(summary, "获取考勤汇总成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取考勤汇总失败: {e}"),
            )),
        ),
    }
}
