use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    reports::requests::AttendanceReportParams,
    users::entities::User,
};
use crate::utils::validate::validate_iso_date;

use super::{ReportService, can_manage_section};

/// 班级考勤报表
///
/// 教师只能查自己授课的班级，其他教师的班级在报表里不可见。
pub async fn attendance_report(
    service: &ReportService,
    request: &HttpRequest,
    user: User,
    params: AttendanceReportParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    for date in [&params.date_from, &params.date_to].into_iter().flatten() {
        if let Err(e) = validate_iso_date(date) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, e)));
        }
    }

    match storage.get_section_by_id(params.section_id).await {
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
                    format!("生成考勤报表失败: {e}"),
                )),
            );
        }
    }

    match can_manage_section(&storage, &user, params.section_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "只能查看自己授课班级的报表",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("生成考勤报表失败: {e}"),
                )),
            );
        }
    }

    match storage
        .attendance_report(params.section_id, params.date_from, params.date_to)
        .await
    {
        Ok(report) => Ok(HttpResponse::Ok().json(ApiResponse::success(report, "生成考勤报表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("生成考勤报表失败: {e}"),
            )),
        ),
    }
}
