use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::SectionService;

pub async fn get_section(
    service: &SectionService,
    request: &HttpRequest,
    section_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_section_by_id(section_id).await {
        Ok(Some(section)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(section, "获取班级成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "班级不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取班级失败: {e}"),
            )),
        ),
    }
}
