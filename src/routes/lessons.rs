use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT, RequireRole};
use crate::models::lessons::requests::{
    CreateLessonRequest, CreateResourceRequest, LessonListParams, UpdateLessonRequest,
};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::LessonService;
use crate::utils::SafeIDI64;

// 懒加载的全局 LessonService 实例
static LESSON_SERVICE: Lazy<LessonService> = Lazy::new(LessonService::new_lazy);

// 创建课程
pub async fn create_lesson(
    req: HttpRequest,
    body: web::Json<CreateLessonRequest>,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    LESSON_SERVICE
        .create_lesson(&req, user_id, body.into_inner())
        .await
}

// 列出课程
pub async fn list_lessons(
    req: HttpRequest,
    query: web::Query<LessonListParams>,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.list_lessons(&req, query.into_inner()).await
}

// 获取课程详情（带资源）
pub async fn get_lesson(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.get_lesson(&req, path.0).await
}

// 更新课程
pub async fn update_lesson(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateLessonRequest>,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE
        .update_lesson(&req, path.0, body.into_inner())
        .await
}

// 删除课程
pub async fn delete_lesson(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.delete_lesson(&req, path.0).await
}

// 添加课程资源
pub async fn add_resource(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<CreateResourceRequest>,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    LESSON_SERVICE
        .add_resource(&req, path.0, user_id, body.into_inner())
        .await
}

// 列出课程资源
pub async fn list_resources(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.list_resources(&req, path.0).await
}

// 删除课程资源
pub async fn delete_resource(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
) -> ActixResult<HttpResponse> {
    let (_lesson_id, resource_id) = path.into_inner();
    LESSON_SERVICE.delete_resource(&req, resource_id).await
}

// 配置路由
pub fn configure_lesson_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/lessons")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出课程 - 所有登录用户
                    .route(web::get().to(list_lessons))
                    // 创建课程 - 仅教师和管理员
                    .route(
                        web::post()
                            .to(create_lesson)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_lesson))
                    .route(
                        web::put()
                            .to(update_lesson)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_lesson)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{id}/resources")
                    .route(web::get().to(list_resources))
                    .route(
                        web::post()
                            .to(add_resource)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{id}/resources/{resource_id}").route(
                    web::delete()
                        .to(delete_resource)
                        .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                ),
            ),
    );
}
