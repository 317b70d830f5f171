use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT, RequireRole};
use crate::models::attendance::requests::{
    CreateSessionRequest, RecordAttendanceRequest, SessionListParams, StudentSummaryParams,
    UpdateSessionRequest,
};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::AttendanceService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AttendanceService 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

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

// 创建课次
pub async fn create_session(
    req: HttpRequest,
    body: web::Json<CreateSessionRequest>,
) -> ActixResult<HttpResponse> {
    let user = current_user!(&req);
    ATTENDANCE_SERVICE
        .create_session(&req, user, body.into_inner())
        .await
}

// 列出课次
pub async fn list_sessions(
    req: HttpRequest,
    query: web::Query<SessionListParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_sessions(&req, query.into_inner())
        .await
}

// 更新课次
pub async fn update_session(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateSessionRequest>,
) -> ActixResult<HttpResponse> {
    let user = current_user!(&req);
    ATTENDANCE_SERVICE
        .update_session(&req, path.0, user, body.into_inner())
        .await
}

// 删除课次
pub async fn delete_session(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    let user = current_user!(&req);
    ATTENDANCE_SERVICE.delete_session(&req, path.0, user).await
}

// 批量登记考勤
pub async fn record_attendance(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<RecordAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    let user = current_user!(&req);
    ATTENDANCE_SERVICE
        .record_attendance(&req, path.0, user, body.into_inner())
        .await
}

// 课次考勤记录
pub async fn list_session_records(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    let user = current_user!(&req);
    ATTENDANCE_SERVICE
        .list_session_records(&req, path.0, user)
        .await
}

// 学生考勤汇总
pub async fn student_summary(
    req: HttpRequest,
    path: SafeIDI64,
    query: web::Query<StudentSummaryParams>,
) -> ActixResult<HttpResponse> {
    let user = current_user!(&req);
    ATTENDANCE_SERVICE
        .student_summary(&req, path.0, user, query.into_inner())
        .await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attendance")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/sessions")
                    // 课次列表 - 教师/管理员（业务层裁剪教师可见范围）
                    .route(
                        web::get()
                            .to(list_sessions)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::post()
                            .to(create_session)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/sessions/{id}")
                    .route(
                        web::put()
                            .to(update_session)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_session)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/sessions/{id}/records")
                    .route(
                        web::get()
                            .to(list_session_records)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::post()
                            .to(record_attendance)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            // 学生考勤汇总 - 所有登录用户（业务层做家长/学生范围校验）
            .service(
                web::resource("/students/{id}/summary").route(web::get().to(student_summary)),
            ),
    );
}
