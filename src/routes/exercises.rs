use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit, RequireJWT, RequireRole};
use crate::models::exercises::requests::{
    CreateExerciseRequest, ImportExerciseRequest, UpdateExerciseRequest,
};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::ExerciseService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ExerciseService 实例
static EXERCISE_SERVICE: Lazy<ExerciseService> = Lazy::new(ExerciseService::new_lazy);

// 在课程下创建练习
pub async fn create_exercise(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<CreateExerciseRequest>,
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

    EXERCISE_SERVICE
        .create_exercise(&req, path.0, user_id, body.into_inner())
        .await
}

// 导入 AI 生成的练习
pub async fn import_exercise(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<ImportExerciseRequest>,
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

    EXERCISE_SERVICE
        .import_exercise(&req, path.0, user_id, body.into_inner())
        .await
}

// 课程下的练习列表
pub async fn list_exercises(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    EXERCISE_SERVICE.list_exercises(&req, path.0).await
}

// 练习详情（整棵树）
pub async fn get_exercise(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    EXERCISE_SERVICE.get_exercise(&req, path.0).await
}

// 更新练习元数据
pub async fn update_exercise(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateExerciseRequest>,
) -> ActixResult<HttpResponse> {
    EXERCISE_SERVICE
        .update_exercise(&req, path.0, body.into_inner())
        .await
}

// 删除练习
pub async fn delete_exercise(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    EXERCISE_SERVICE.delete_exercise(&req, path.0).await
}

// 配置路由
pub fn configure_exercise_routes(cfg: &mut web::ServiceConfig) {
    // 课程维度的练习入口
    cfg.service(
        web::scope("/api/v1/lessons/{id}/exercises")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 练习列表 - 所有登录用户
                    .route(web::get().to(list_exercises))
                    // 创建练习 - 仅教师和管理员
                    .route(
                        web::post()
                            .to(create_exercise)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/import").route(
                    web::post()
                        .to(import_exercise)
                        .wrap(RateLimit::exercise_import())
                        .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                ),
            ),
    );

    // 练习维度的入口
    cfg.service(
        web::scope("/api/v1/exercises")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_exercise))
                    .route(
                        web::put()
                            .to(update_exercise)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_exercise)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
