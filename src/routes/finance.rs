use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT, RequireRole};
use crate::models::finance::requests::WorkHoursParams;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::FinanceService;

// 懒加载的全局 FinanceService 实例
static FINANCE_SERVICE: Lazy<FinanceService> = Lazy::new(FinanceService::new_lazy);

// 课时结算
pub async fn work_hours(
    req: HttpRequest,
    query: web::Query<WorkHoursParams>,
) -> ActixResult<HttpResponse> {
    let user = match RequireJWT::extract_user_claims(&req) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    FINANCE_SERVICE
        .work_hours(&req, user, query.into_inner())
        .await
}

// 配置路由
pub fn configure_finance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/finance")
            .wrap(middlewares::RequireJWT)
            // 课时结算 - 教师查自己，管理员查任意教师（业务层校验）
            .service(
                web::resource("/work-hours").route(
                    web::get()
                        .to(work_hours)
                        .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                ),
            ),
    );
}
