use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireRole};
use crate::models::sections::requests::{
    CreateSectionRequest, EnrollRequest, SectionListParams, UpdateSectionRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::SectionService;
use crate::utils::SafeIDI64;

// 懒加载的全局 SectionService 实例
static SECTION_SERVICE: Lazy<SectionService> = Lazy::new(SectionService::new_lazy);

// 创建班级
pub async fn create_section(
    req: HttpRequest,
    body: web::Json<CreateSectionRequest>,
) -> ActixResult<HttpResponse> {
    SECTION_SERVICE.create_section(&req, body.into_inner()).await
}

// 列出班级
pub async fn list_sections(
    req: HttpRequest,
    query: web::Query<SectionListParams>,
) -> ActixResult<HttpResponse> {
    SECTION_SERVICE.list_sections(&req, query.into_inner()).await
}

// 获取班级详情
pub async fn get_section(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    SECTION_SERVICE.get_section(&req, path.0).await
}

// 更新班级
pub async fn update_section(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateSectionRequest>,
) -> ActixResult<HttpResponse> {
    SECTION_SERVICE
        .update_section(&req, path.0, body.into_inner())
        .await
}

// 删除班级
pub async fn delete_section(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    SECTION_SERVICE.delete_section(&req, path.0).await
}

// 学生选课
pub async fn enroll_student(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<EnrollRequest>,
) -> ActixResult<HttpResponse> {
    SECTION_SERVICE
        .enroll_student(&req, path.0, body.into_inner())
        .await
}

// 学生退课
pub async fn unenroll_student(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
) -> ActixResult<HttpResponse> {
    let (section_id, student_id) = path.into_inner();
    SECTION_SERVICE
        .unenroll_student(&req, section_id, student_id)
        .await
}

// 班级学生名单
pub async fn list_section_students(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    SECTION_SERVICE.list_section_students(&req, path.0).await
}

// 配置路由
pub fn configure_section_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/sections")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出班级 - 教师/管理员（业务层裁剪教师可见范围）
                    .route(
                        web::get()
                            .to(list_sections)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    // 创建班级 - 仅管理员
                    .route(
                        web::post()
                            .to(create_section)
                            .wrap(RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(
                        web::get()
                            .to(get_section)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::put()
                            .to(update_section)
                            .wrap(RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_section)
                            .wrap(RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            // 班级学生名单 - 教师/管理员（业务层校验授课关系）
            .service(
                web::resource("/{id}/students")
                    .route(
                        web::get()
                            .to(list_section_students)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    // 选课 - 仅管理员
                    .route(
                        web::post()
                            .to(enroll_student)
                            .wrap(RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            // 退课 - 仅管理员
            .service(
                web::resource("/{id}/students/{student_id}").route(
                    web::delete()
                        .to(unenroll_student)
                        .wrap(RequireRole::new_any(UserRole::admin_roles())),
                ),
            ),
    );
}
