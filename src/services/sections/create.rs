use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    sections::requests::CreateSectionRequest,
    users::entities::UserRole,
};

use super::SectionService;

pub async fn create_section(
    service: &SectionService,
    request: &HttpRequest,
    req: CreateSectionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "班级名称不能为空",
        )));
    }

    // 年级必须存在
    match storage.get_grade_by_id(req.grade_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotFound,
                "年级不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建班级失败: {e}"),
                )),
            );
        }
    }

    // teacher_id 必须指向教师账号
    match storage.get_user_by_id(req.teacher_id).await {
        Ok(Some(user)) if user.role == UserRole::Teacher || user.role == UserRole::Admin => {}
        Ok(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                "teacher_id 必须是教师账号",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建班级失败: {e}"),
                )),
            );
        }
    }

    match storage.create_section(req).await {
        Ok(section) => Ok(HttpResponse::Ok().json(ApiResponse::success(section, "创建班级成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建班级失败: {e}"),
            )),
        ),
    }
}
