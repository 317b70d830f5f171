use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireRole};
use crate::models::catalog::requests::{
    CatalogListParams, CreateGradeRequest, CreateSubjectRequest, CreateTrackRequest,
    UpdateGradeRequest, UpdateSubjectRequest, UpdateTrackRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::CatalogService;
use crate::utils::SafeIDI64;

// 懒加载的全局 CatalogService 实例
static CATALOG_SERVICE: Lazy<CatalogService> = Lazy::new(CatalogService::new_lazy);

// 年级
pub async fn create_grade(
    req: HttpRequest,
    body: web::Json<CreateGradeRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.create_grade(&req, body.into_inner()).await
}

pub async fn list_grades(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.list_grades(&req).await
}

pub async fn update_grade(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateGradeRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .update_grade(&req, path.0, body.into_inner())
        .await
}

pub async fn delete_grade(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.delete_grade(&req, path.0).await
}

// 科目
pub async fn create_subject(
    req: HttpRequest,
    body: web::Json<CreateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.create_subject(&req, body.into_inner()).await
}

pub async fn list_subjects(
    req: HttpRequest,
    query: web::Query<CatalogListParams>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.list_subjects(&req, query.into_inner()).await
}

pub async fn update_subject(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .update_subject(&req, path.0, body.into_inner())
        .await
}

pub async fn delete_subject(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.delete_subject(&req, path.0).await
}

// 轨道
pub async fn create_track(
    req: HttpRequest,
    body: web::Json<CreateTrackRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.create_track(&req, body.into_inner()).await
}

pub async fn list_tracks(
    req: HttpRequest,
    query: web::Query<CatalogListParams>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.list_tracks(&req, query.into_inner()).await
}

pub async fn update_track(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateTrackRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .update_track(&req, path.0, body.into_inner())
        .await
}

pub async fn delete_track(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.delete_track(&req, path.0).await
}

// 配置路由
pub fn configure_catalog_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/catalog")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/grades")
                    // 读目录 - 所有登录用户；写目录 - 仅管理员
                    .route(web::get().to(list_grades))
                    .route(
                        web::post()
                            .to(create_grade)
                            .wrap(RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/grades/{id}")
                    .route(
                        web::put()
                            .to(update_grade)
                            .wrap(RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_grade)
                            .wrap(RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/subjects")
                    .route(web::get().to(list_subjects))
                    .route(
                        web::post()
                            .to(create_subject)
                            .wrap(RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/subjects/{id}")
                    .route(
                        web::put()
                            .to(update_subject)
                            .wrap(RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_subject)
                            .wrap(RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/tracks")
                    .route(web::get().to(list_tracks))
                    .route(
                        web::post()
                            .to(create_track)
                            .wrap(RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/tracks/{id}")
                    .route(
                        web::put()
                            .to(update_track)
                            .wrap(RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_track)
                            .wrap(RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
