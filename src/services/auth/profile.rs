use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::UpdateProfileRequest,
    users::requests::UpdateUserRequest,
};
use crate::utils::password::hash_password;
use crate::utils::validate::validate_password_simple;

use super::AuthService;

pub async fn get_profile(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user_claims(request) {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(user, "获取个人资料成功"))),
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "无法获取用户信息",
        ))),
    }
}

pub async fn update_profile(
    service: &AuthService,
    request: &HttpRequest,
    req: UpdateProfileRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "无法获取用户信息",
        )));
    };

    // 修改密码需要先过策略校验再哈希
    let password_hash = match req.password {
        Some(ref password) => {
            if let Err(e) = validate_password_simple(password) {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, e)));
            }
            match hash_password(password) {
                Ok(hash) => Some(hash),
                Err(e) => {
                    tracing::error!("Password hashing failed: {}", e);
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(ErrorCode::InternalServerError, "更新失败"),
                    ));
                }
            }
        }
        None => None,
    };

    // 个人资料只允许改显示名/头像/密码，角色等字段不经过这里
    let update = UpdateUserRequest {
        email: None,
        password: password_hash,
        role: None,
        status: None,
        display_name: req.display_name,
        avatar_url: req.avatar_url,
        guardian_id: None,
        hourly_rate: None,
    };

    match storage.update_user(user_id, update).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(user, "更新个人资料成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "用户不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新个人资料失败: {e}"),
            )),
        ),
    }
}
