use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    sections::requests::{SectionListParams, SectionListQuery},
    users::entities::UserRole,
};

use super::SectionService;

pub async fn list_sections(
    service: &SectionService,
    request: &HttpRequest,
    params: SectionListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "无法获取用户信息",
        )));
    };

    let mut query: SectionListQuery = params.into();

    // 教师只能看到自己授课的班级
    if current.role == UserRole::Teacher {
        query.teacher_id = Some(current.id);
    }

    match storage.list_sections_with_pagination(query).await {
        Ok(resp) => Ok(HttpResponse::Ok().json(ApiResponse::success(resp, "获取班级列表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取班级列表失败: {e}"),
            )),
        ),
    }
}
