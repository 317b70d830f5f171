use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireRole};
use crate::models::users::entities::UserRole;
use crate::services::SystemService;

// 懒加载的全局 SystemService 实例
static SYSTEM_SERVICE: Lazy<SystemService> = Lazy::new(SystemService::new_lazy);

// 健康检查
pub async fn health(req: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.health(&req).await
}

// 系统信息
pub async fn info(req: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.info(&req).await
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/system")
            // 健康检查无需认证
            .service(web::resource("/health").route(web::get().to(health)))
            .service(
                web::resource("/info")
                    .route(web::get().to(info))
                    .wrap(RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT),
            ),
    );
}
