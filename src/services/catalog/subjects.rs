use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    catalog::{
        requests::{CatalogListParams, CreateSubjectRequest, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
};

use super::CatalogService;

pub async fn create_subject(
    service: &CatalogService,
    request: &HttpRequest,
    req: CreateSubjectRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "科目名称不能为空",
        )));
    }

    // 年级必须存在
    match storage.get_grade_by_id(req.grade_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotFound,
                "年级不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建科目失败: {e}"),
                )),
            );
        }
    }

    match storage.create_subject(req).await {
        Ok(subject) => Ok(HttpResponse::Ok().json(ApiResponse::success(subject, "创建科目成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建科目失败: {e}"),
            )),
        ),
    }
}

pub async fn list_subjects(
    service: &CatalogService,
    request: &HttpRequest,
    params: CatalogListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_subjects(params.grade_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubjectListResponse { items },
            "获取科目列表成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取科目列表失败: {e}"),
            )),
        ),
    }
}

pub async fn update_subject(
    service: &CatalogService,
    request: &HttpRequest,
    subject_id: i64,
    req: UpdateSubjectRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_subject(subject_id, req).await {
        Ok(Some(subject)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(subject, "更新科目成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "科目不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新科目失败: {e}"),
            )),
        ),
    }
}

pub async fn delete_subject(
    service: &CatalogService,
    request: &HttpRequest,
    subject_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_subject(subject_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("删除科目成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "科目不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除科目失败: {e}"),
            )),
        ),
    }
}
