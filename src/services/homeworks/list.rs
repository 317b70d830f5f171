use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    homeworks::requests::{HomeworkListParams, HomeworkListQuery},
    users::entities::UserRole,
};

use super::HomeworkService;

/// 列出作业，按角色裁剪可见范围
///
/// 学生看到所在班级的作业，教师看到自己授课班级的作业，
/// 管理员不受限制。
pub async fn list_homeworks(
    service: &HomeworkService,
    request: &HttpRequest,
    params: HomeworkListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "无法获取用户信息",
        )));
    };

    let mut query: HomeworkListQuery = params.into();

    let scope = match current.role {
        UserRole::Admin => Ok(None),
        UserRole::Teacher => storage.list_teacher_section_ids(current.id).await.map(Some),
        UserRole::Student => storage.list_student_section_ids(current.id).await.map(Some),
        // 家长查看孩子的作业走报表/考勤接口，这里不开放
        UserRole::Parent => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "家长账号不能查看作业列表",
            )));
        }
    };

    match scope {
        Ok(section_ids) => query.section_ids = section_ids,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("获取作业列表失败: {e}"),
                )),
            );
        }
    }

    match storage.list_homeworks_with_pagination(query).await {
        Ok(resp) => Ok(HttpResponse::Ok().json(ApiResponse::success(resp, "获取作业列表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取作业列表失败: {e}"),
            )),
        ),
    }
}
