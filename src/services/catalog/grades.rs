use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    catalog::{
        requests::{CreateGradeRequest, UpdateGradeRequest},
        responses::GradeListResponse,
    },
};

use super::CatalogService;

pub async fn create_grade(
    service: &CatalogService,
    request: &HttpRequest,
    req: CreateGradeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "年级名称不能为空",
        )));
    }

    match storage.create_grade(req).await {
        Ok(grade) => Ok(HttpResponse::Ok().json(ApiResponse::success(grade, "创建年级成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建年级失败: {e}"),
            )),
        ),
    }
}

pub async fn list_grades(
    service: &CatalogService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_grades().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            GradeListResponse { items },
            "获取年级列表成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取年级列表失败: {e}"),
            )),
        ),
    }
}

pub async fn update_grade(
    service: &CatalogService,
    request: &HttpRequest,
    grade_id: i64,
    req: UpdateGradeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_grade(grade_id, req).await {
        Ok(Some(grade)) => Ok(HttpResponse::Ok().json(ApiResponse::success(grade, "更新年级成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "年级不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新年级失败: {e}"),
            )),
        ),
    }
}

pub async fn delete_grade(
    service: &CatalogService,
    request: &HttpRequest,
    grade_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_grade(grade_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("删除年级成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "年级不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除年级失败: {e}"),
            )),
        ),
    }
}
