use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    sections::responses::SectionStudentsResponse,
    users::entities::UserRole,
};

use super::SectionService;

/// 班级学生名单
///
/// 管理员任意查；教师只能查自己授课的班级。
pub async fn list_section_students(
    service: &SectionService,
    request: &HttpRequest,
    section_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "无法获取用户信息",
        )));
    };

    let section = match storage.get_section_by_id(section_id).await {
        Ok(Some(section)) => section,
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
                    format!("获取班级失败: {e}"),
                )),
            );
        }
    };

    if current.role == UserRole::Teacher && section.teacher_id != current.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只能查看自己授课班级的学生名单",
        )));
    }

    match storage.list_section_students(section_id).await {
        Ok(students) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SectionStudentsResponse { section, students },
            "获取班级学生名单成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取班级学生名单失败: {e}"),
            )),
        ),
    }
}
