use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    sections::requests::EnrollRequest,
    users::entities::UserRole,
};

use super::SectionService;

/// 学生选课（管理员操作）
pub async fn enroll_student(
    service: &SectionService,
    request: &HttpRequest,
    section_id: i64,
    req: EnrollRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 班级必须存在
    match storage.get_section_by_id(section_id).await {
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
                    format!("选课失败: {e}"),
                )),
            );
        }
    }

    // 只能给学生账号选课
    match storage.get_user_by_id(req.student_id).await {
        Ok(Some(user)) if user.role == UserRole::Student => {}
        Ok(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                "student_id 必须是学生账号",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("选课失败: {e}"),
                )),
            );
        }
    }

    // 重复选课直接报冲突
    match storage.is_student_enrolled(section_id, req.student_id).await {
        Ok(true) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::Conflict,
                "该学生已在班级中",
            )));
        }
        Ok(false) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("选课失败: {e}"),
                )),
            );
        }
    }

    match storage.enroll_student(section_id, req.student_id).await {
        Ok(enrollment) => Ok(HttpResponse::Ok().json(ApiResponse::success(enrollment, "选课成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("选课失败: {e}"),
            )),
        ),
    }
}

/// 学生退课（管理员操作）
pub async fn unenroll_student(
    service: &SectionService,
    request: &HttpRequest,
    section_id: i64,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.unenroll_student(section_id, student_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("退课成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "该学生不在班级中",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("退课失败: {e}"),
            )),
        ),
    }
}
