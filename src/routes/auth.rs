use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::auth::{LoginRequest, RegisterRequest, UpdateProfileRequest};
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

// 登录
pub async fn login(req: HttpRequest, body: web::Json<LoginRequest>) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(&req, body.into_inner()).await
}

// 注销
pub async fn logout(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout(&req).await
}

// 刷新访问令牌
pub async fn refresh(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.refresh(&req).await
}

// 学生注册
pub async fn register(
    req: HttpRequest,
    body: web::Json<RegisterRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.register(&req, body.into_inner()).await
}

// 获取个人资料
pub async fn get_profile(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.get_profile(&req).await
}

// 更新个人资料
pub async fn update_profile(
    req: HttpRequest,
    body: web::Json<UpdateProfileRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.update_profile(&req, body.into_inner()).await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(
                web::resource("/login")
                    .route(web::post().to(login))
                    .wrap(RateLimit::login()),
            )
            .service(
                web::resource("/register")
                    .route(web::post().to(register))
                    .wrap(RateLimit::register()),
            )
            .service(
                web::resource("/refresh")
                    .route(web::post().to(refresh))
                    .wrap(RateLimit::refresh_token()),
            )
            .service(
                web::resource("/logout")
                    .route(web::post().to(logout))
                    .wrap(middlewares::RequireJWT),
            )
            .service(
                web::resource("/profile")
                    .route(web::get().to(get_profile))
                    .route(web::put().to(update_profile))
                    .wrap(middlewares::RequireJWT),
            ),
    );
}
