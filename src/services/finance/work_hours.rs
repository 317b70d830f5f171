use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    finance::{requests::WorkHoursParams, responses::WorkHoursResponse},
    users::entities::{User, UserRole},
};
use crate::utils::validate::validate_iso_date;
use crate::utils::work_hours::{sum_work_hours, work_amount};

use super::FinanceService;

/// 教师课时结算
///
/// 汇总时间段内已完成课次的时长，换算成课时数；
/// 教师配置了课时费时同时给出金额。
/// 管理员可查任意教师，教师只能查自己。
pub async fn work_hours(
    service: &FinanceService,
    request: &HttpRequest,
    user: User,
    params: WorkHoursParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    for date in [&params.date_from, &params.date_to].into_iter().flatten() {
        if let Err(e) = validate_iso_date(date) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, e)));
        }
    }

    let teacher_id = params.teacher_id.unwrap_or(user.id);

    if user.role != UserRole::Admin && teacher_id != user.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只能查询自己的课时",
        )));
    }

    let teacher = match storage.get_user_by_id(teacher_id).await {
        Ok(Some(teacher)) if teacher.role == UserRole::Teacher || teacher.role == UserRole::Admin => {
            teacher
        }
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotFound,
                "教师不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("课时结算失败: {e}"),
                )),
            );
        }
    };

    let durations = match storage
        .completed_session_durations(
            teacher_id,
            params.date_from.clone(),
            params.date_to.clone(),
        )
        .await
    {
        Ok(durations) => durations,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("课时结算失败: {e}"),
                )),
            );
        }
    };

    let session_count = durations.len() as i64;
    let total_hours = sum_work_hours(durations);
    let amount = teacher
        .hourly_rate
        .map(|rate| work_amount(total_hours, rate));

    let response = WorkHoursResponse {
        teacher_id,
        session_count,
        total_hours,
        amount,
        date_from: params.date_from,
        date_to: params.date_to,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "课时结算成功")))
}
