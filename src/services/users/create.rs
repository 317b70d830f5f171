use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode, users::requests::CreateUserRequest};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple, validate_username};

use super::UserService;

/// 管理员创建用户（任意角色）
pub async fn create_user(
    service: &UserService,
    request: &HttpRequest,
    mut req: CreateUserRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

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

    // guardian_id 必须指向一个已存在的家长账号
    if let Some(guardian_id) = req.guardian_id {
        match storage.get_user_by_id(guardian_id).await {
            Ok(Some(guardian))
                if guardian.role == crate::models::users::entities::UserRole::Parent => {}
            Ok(_) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ValidationFailed,
                    "guardian_id 必须是家长账号",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("创建用户失败: {e}"),
                    )),
                );
            }
        }
    }

    req.password = match hash_password(&req.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Password hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "创建用户失败",
                )),
            );
        }
    };

    match storage.create_user(req).await {
        Ok(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(user, "创建用户成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建用户失败: {e}"),
            )),
        ),
    }
}
