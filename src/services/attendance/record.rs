use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashSet;

use crate::models::{
    ApiResponse, ErrorCode,
    attendance::{requests::RecordAttendanceRequest, responses::RecordListResponse},
    users::entities::User,
};

use super::{AttendanceService, can_manage_section};

/// 批量登记考勤
///
/// 整个课次的点名结果一次提交；名单里出现非本班学生时整批拒绝。
pub async fn record_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    session_id: i64,
    user: User,
    req: RecordAttendanceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.records.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "考勤名单不能为空",
        )));
    }

    // 同一学生出现两次视为客户端错误
    let mut seen = HashSet::new();
    for entry in &req.records {
        if !seen.insert(entry.student_id) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                format!("学生 {} 在名单中出现了多次", entry.student_id),
            )));
        }
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
                    format!("登记考勤失败: {e}"),
                )),
            );
        }
    };

    match can_manage_section(&storage, &user, session.section_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "只能登记自己授课班级的考勤",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("登记考勤失败: {e}"),
                )),
            );
        }
    }

    // 所有学生必须在本班
    for entry in &req.records {
        match storage
            .is_student_enrolled(session.section_id, entry.student_id)
            .await
        {
            Ok(true) => {}
            Ok(false) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ValidationFailed,
                    format!("学生 {} 不在该班级中", entry.student_id),
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("登记考勤失败: {e}"),
                    )),
                );
            }
        }
    }

    match storage
        .upsert_attendance_records(session_id, req.records)
        .await
    {
        Ok(records) => {
            tracing::info!(
                "Attendance recorded for session {} ({} record(s))",
                session_id,
                records.len()
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                RecordListResponse { session, records },
                "登记考勤成功",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("登记考勤失败: {e}"),
            )),
        ),
    }
}
