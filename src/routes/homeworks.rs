use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT, RequireRole};
use crate::models::homeworks::requests::{
    CreateHomeworkRequest, GradeSubmissionRequest, HomeworkListParams, SubmitHomeworkRequest,
    UpdateHomeworkRequest,
};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::HomeworkService;
use crate::utils::SafeIDI64;

// 懒加载的全局 HomeworkService 实例
static HOMEWORK_SERVICE: Lazy<HomeworkService> = Lazy::new(HomeworkService::new_lazy);

// 从请求扩展取用户，失败直接 401
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

// 创建作业
pub async fn create_homework(
    req: HttpRequest,
    body: web::Json<CreateHomeworkRequest>,
) -> ActixResult<HttpResponse> {
    let user = current_user!(&req);
    HOMEWORK_SERVICE
        .create_homework(&req, user, body.into_inner())
        .await
}

// 列出作业
pub async fn list_homeworks(
    req: HttpRequest,
    query: web::Query<HomeworkListParams>,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .list_homeworks(&req, query.into_inner())
        .await
}

// 获取作业详情
pub async fn get_homework(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE.get_homework(&req, path.0).await
}

// 更新作业
pub async fn update_homework(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateHomeworkRequest>,
) -> ActixResult<HttpResponse> {
    let user = current_user!(&req);
    HOMEWORK_SERVICE
        .update_homework(&req, path.0, user, body.into_inner())
        .await
}

// 删除作业
pub async fn delete_homework(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    let user = current_user!(&req);
    HOMEWORK_SERVICE.delete_homework(&req, path.0, user).await
}

// 提交作业
pub async fn submit_homework(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<SubmitHomeworkRequest>,
) -> ActixResult<HttpResponse> {
    let user = current_user!(&req);
    HOMEWORK_SERVICE
        .submit_homework(&req, path.0, user, body.into_inner())
        .await
}

// 作业的全部提交
pub async fn list_submissions(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    let user = current_user!(&req);
    HOMEWORK_SERVICE.list_submissions(&req, path.0, user).await
}

// 我的提交
pub async fn get_my_submission(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    let user = current_user!(&req);
    HOMEWORK_SERVICE.get_my_submission(&req, path.0, user).await
}

// 评分
pub async fn grade_submission(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    let user = current_user!(&req);
    HOMEWORK_SERVICE
        .grade_submission(&req, path.0, user, body.into_inner())
        .await
}

// 配置路由
pub fn configure_homework_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/homeworks")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出作业 - 所有登录用户（业务层按角色裁剪）
                    .route(web::get().to(list_homeworks))
                    // 创建作业 - 仅教师和管理员
                    .route(
                        web::post()
                            .to(create_homework)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    // 获取作业详情 - 所有登录用户
                    .route(web::get().to(get_homework))
                    .route(
                        web::put()
                            .to(update_homework)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_homework)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            // 提交作业 - 仅学生（业务层校验选课关系）
            .service(
                web::resource("/{id}/submissions")
                    .route(web::post().to(submit_homework))
                    // 提交列表 - 仅教师和管理员（业务层校验授课关系）
                    .route(
                        web::get()
                            .to(list_submissions)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            // 我的提交 - 学生查看自己的提交与评分
            .service(web::resource("/{id}/submissions/my").route(web::get().to(get_my_submission))),
    );

    // 评分入口按提交 ID 挂载
    cfg.service(
        web::scope("/api/v1/submissions")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/{id}/grade").route(
                    web::post()
                        .to(grade_submission)
                        .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                ),
            ),
    );
}
