use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::RegisterRequest,
    users::{entities::UserRole, requests::CreateUserRequest},
};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple, validate_username};

use super::AuthService;

/// 学生自助注册；教师和管理员账号走用户管理接口
pub async fn handle_register(
    service: &AuthService,
    request: &HttpRequest,
    req: RegisterRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 入参校验
    if let Err(e) = validate_username(&req.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, e)));
    }
    if let Err(e) = validate_email(&req.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, e)));
    }
    if let Err(e) = validate_password_simple(&req.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, e)));
    }

    // 2. 用户名/邮箱查重
    match storage.get_user_by_username(&req.username).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::Conflict,
                "Username already taken",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("注册失败: {e}"),
                )),
            );
        }
    }
    match storage.get_user_by_email(&req.email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::Conflict,
                "Email already registered",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("注册失败: {e}"),
                )),
            );
        }
    }

    // 3. 哈希密码并入库
    let password_hash = match hash_password(&req.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Password hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "注册失败",
                )),
            );
        }
    };

    let create_request = CreateUserRequest {
        username: req.username,
        email: req.email,
        password: password_hash,
        role: UserRole::Student,
        display_name: req.display_name,
        avatar_url: None,
        guardian_id: None,
        hourly_rate: None,
    };

    match storage.create_user(create_request).await {
        Ok(user) => {
            tracing::info!("New student registered: {} (ID: {})", user.username, user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(user, "注册成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("注册失败: {e}"),
            )),
        ),
    }
}
