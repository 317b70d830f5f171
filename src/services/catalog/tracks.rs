use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    catalog::{
        requests::{CatalogListParams, CreateTrackRequest, UpdateTrackRequest},
        responses::TrackListResponse,
    },
};

use super::CatalogService;

pub async fn create_track(
    service: &CatalogService,
    request: &HttpRequest,
    req: CreateTrackRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "轨道名称不能为空",
        )));
    }

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
                    format!("创建轨道失败: {e}"),
                )),
            );
        }
    }

    match storage.create_track(req).await {
        Ok(track) => Ok(HttpResponse::Ok().json(ApiResponse::success(track, "创建轨道成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建轨道失败: {e}"),
            )),
        ),
    }
}

pub async fn list_tracks(
    service: &CatalogService,
    request: &HttpRequest,
    params: CatalogListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_tracks(params.grade_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TrackListResponse { items },
            "获取轨道列表成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取轨道列表失败: {e}"),
            )),
        ),
    }
}

pub async fn update_track(
    service: &CatalogService,
    request: &HttpRequest,
    track_id: i64,
    req: UpdateTrackRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_track(track_id, req).await {
        Ok(Some(track)) => Ok(HttpResponse::Ok().json(ApiResponse::success(track, "更新轨道成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "轨道不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新轨道失败: {e}"),
            )),
        ),
    }
}

pub async fn delete_track(
    service: &CatalogService,
    request: &HttpRequest,
    track_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_track(track_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("删除轨道成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "轨道不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除轨道失败: {e}"),
            )),
        ),
    }
}
