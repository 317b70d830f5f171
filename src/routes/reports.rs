use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT, RequireRole};
use crate::models::reports::requests::{AttendanceReportParams, HomeworkReportParams};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::ReportService;

// 懒加载的全局 ReportService 实例
static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

macro_rules! current_user {
    ($req:expr) => {
        match RequireJWT::extract_user_claims($req) {
            Some(user) => user,
            None => {
                return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::Unauthorized,
                    "无法获取用户信息",
                )));
            }
        }
    };
}

// 班级考勤报表
pub async fn attendance_report(
    req: HttpRequest,
    query: web::Query<AttendanceReportParams>,
) -> ActixResult<HttpResponse> {
    let user = current_user!(&req);
    REPORT_SERVICE
        .attendance_report(&req, user, query.into_inner())
        .await
}

// 班级作业报表
pub async fn homework_report(
    req: HttpRequest,
    query: web::Query<HomeworkReportParams>,
) -> ActixResult<HttpResponse> {
    let user = current_user!(&req);
    REPORT_SERVICE
        .homework_report(&req, user, query.into_inner())
        .await
}

// 全局概览报表
pub async fn overview(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.overview(&req).await
}

// 配置路由
pub fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reports")
            .wrap(middlewares::RequireJWT)
            // 班级报表 - 教师/管理员（业务层校验授课关系）
            .service(
                web::resource("/attendance").route(
                    web::get()
                        .to(attendance_report)
                        .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/homework").route(
                    web::get()
                        .to(homework_report)
                        .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            // 概览报表 - 仅管理员
            .service(
                web::resource("/overview").route(
                    web::get()
                        .to(overview)
                        .wrap(RequireRole::new_any(UserRole::admin_roles())),
                ),
            ),
    );
}
