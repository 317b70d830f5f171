use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{entities::UserRole, responses::ChildrenResponse},
};

use super::UserService;

/// 列出某家长名下的学生账号
///
/// 管理员可以查任何家长；家长只能查自己名下的孩子。
pub async fn list_children(
    service: &UserService,
    request: &HttpRequest,
    guardian_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "无法获取用户信息",
        )));
    };

    if current.role != UserRole::Admin && current.id != guardian_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只能查询自己名下的学生",
        )));
    }

    match storage.list_children(guardian_id).await {
        Ok(children) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ChildrenResponse { children },
            "获取学生列表成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取学生列表失败: {e}"),
            )),
        ),
    }
}
